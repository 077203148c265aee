//! Arcana domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use strum::{AsRefStr, Display, EnumString};

use crate::{
    model::arcana::{ArcanaAttributesDto, ArcanaDto, ArcanaInputDto, ArcanaPatchDto},
    server::{
        error::AppError,
        util::{json, validate::Validator},
    },
};

const TIER_MESSAGE: &str = "Arcana tier must be 1, 2, or 3";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ArcanaColor {
    Red,
    Blue,
    Green,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ArcanaSort {
    /// Color, then tier, then name.
    #[default]
    Default,
    Name,
    /// Tier, then name.
    Tier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Arcana {
    pub id: i32,
    pub name: String,
    pub color: String,
    pub tier: i16,
    pub image: String,
    pub description: String,
    pub attributes: ArcanaAttributesDto,
    pub effects: Vec<String>,
    pub usage: Option<String>,
    pub recommended_for: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Arcana {
    pub fn from_entity(entity: entity::arcana::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            color: entity.color,
            tier: entity.tier,
            image: entity.image,
            description: entity.description,
            attributes: json::decode(entity.attributes, "attributes")?,
            effects: json::decode(entity.effects, "effects")?,
            usage: entity.usage,
            recommended_for: json::decode(entity.recommended_for, "recommended_for")?,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> ArcanaDto {
        ArcanaDto {
            id: self.id,
            name: self.name,
            color: self.color,
            tier: self.tier,
            image: self.image,
            description: self.description,
            attributes: self.attributes,
            effects: self.effects,
            usage: self.usage,
            recommended_for: self.recommended_for,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArcanaParams {
    pub name: String,
    pub color: ArcanaColor,
    pub tier: i16,
    pub image: String,
    pub description: String,
    pub attributes: ArcanaAttributesDto,
    pub effects: Vec<String>,
    pub usage: Option<String>,
    pub recommended_for: Vec<String>,
}

impl ArcanaParams {
    /// Validates an arcana create body.
    ///
    /// # Returns
    /// - `Ok(ArcanaParams)` - Trimmed parameters
    /// - `Err(AppError::Validation)` - Every failed rule
    pub fn from_dto(dto: ArcanaInputDto) -> Result<Self, AppError> {
        let mut v = Validator::new();

        check_name(&mut v, &dto.name);
        let color = v.parse::<ArcanaColor>(&dto.color, "Invalid arcana color");
        let tier = check_tier(&mut v, dto.tier);
        check_image(&mut v, &dto.image);
        check_description(&mut v, &dto.description);

        v.finish()?;

        let (Some(color), Some(tier)) = (color, tier) else {
            return Err(AppError::InternalError(
                "Arcana validation passed with missing fields".to_string(),
            ));
        };

        Ok(Self {
            name: dto.name.trim().to_string(),
            color,
            tier,
            image: dto.image.trim().to_string(),
            description: dto.description.trim().to_string(),
            attributes: dto.attributes,
            effects: dto.effects,
            usage: trim_optional(dto.usage),
            recommended_for: dto.recommended_for,
        })
    }
}

/// Partial arcana update. Only the fields that are present are validated and written.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArcanaPatch {
    pub name: Option<String>,
    pub color: Option<ArcanaColor>,
    pub tier: Option<i16>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub attributes: Option<ArcanaAttributesDto>,
    pub effects: Option<Vec<String>>,
    pub usage: Option<String>,
    pub recommended_for: Option<Vec<String>>,
}

impl ArcanaPatch {
    pub fn from_dto(dto: ArcanaPatchDto) -> Result<Self, AppError> {
        let mut v = Validator::new();

        if let Some(name) = &dto.name {
            check_name(&mut v, name);
        }
        let color = dto
            .color
            .as_deref()
            .and_then(|c| v.parse::<ArcanaColor>(c, "Invalid arcana color"));
        let tier = match dto.tier {
            Some(tier) => check_tier(&mut v, Some(tier)),
            None => None,
        };
        if let Some(image) = &dto.image {
            check_image(&mut v, image);
        }
        if let Some(description) = &dto.description {
            check_description(&mut v, description);
        }

        v.finish()?;

        Ok(Self {
            name: dto.name.map(|n| n.trim().to_string()),
            color,
            tier,
            image: dto.image.map(|i| i.trim().to_string()),
            description: dto.description.map(|d| d.trim().to_string()),
            attributes: dto.attributes,
            effects: dto.effects,
            usage: dto.usage.map(|u| u.trim().to_string()),
            recommended_for: dto.recommended_for,
        })
    }
}

/// Filters and ordering for the arcana list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArcanaListQuery {
    pub color: Option<ArcanaColor>,
    pub tier: Option<i16>,
    pub sort: ArcanaSort,
}

impl ArcanaListQuery {
    pub fn parse(
        color: Option<&str>,
        tier: Option<&str>,
        sort: Option<&str>,
    ) -> Result<Self, AppError> {
        let mut v = Validator::new();

        let color = color.and_then(|c| v.parse::<ArcanaColor>(c, "Invalid arcana color"));
        let tier = tier
            .and_then(|t| v.parse::<i64>(t, TIER_MESSAGE))
            .and_then(|t| check_tier(&mut v, Some(t)));
        let sort = sort
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| v.parse::<ArcanaSort>(s, "Invalid sort option"))
            .unwrap_or_default();

        v.finish()?;

        Ok(Self { color, tier, sort })
    }
}

fn check_name(v: &mut Validator, name: &str) {
    v.length(name, 1, 100, "Arcana name must be between 1 and 100 characters");
}

fn check_image(v: &mut Validator, image: &str) {
    v.check(!image.trim().is_empty(), "Arcana image is required");
}

fn check_description(v: &mut Validator, description: &str) {
    v.length(
        description,
        1,
        500,
        "Arcana description must be between 1 and 500 characters",
    );
}

fn check_tier(v: &mut Validator, tier: Option<i64>) -> Option<i16> {
    match tier {
        Some(t @ 1..=3) => Some(t as i16),
        _ => {
            v.push(TIER_MESSAGE);
            None
        }
    }
}

fn trim_optional(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}
