//! Equipment domain models and parameters.
//!
//! Stat blocks and the passive/active effects are stored as JSON columns in the same
//! shape they have on the wire. Build paths are rows in `equipment_build_link`.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use strum::{AsRefStr, Display, EnumString};

use crate::{
    model::equipment::{ActiveDto, EquipmentAttributesDto, EquipmentDto, EquipmentInputDto, PassiveDto},
    server::{
        error::AppError,
        util::{json, validate::Validator},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr)]
pub enum EquipmentCategory {
    Attack,
    Defense,
    Magic,
    Movement,
    Jungle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display, AsRefStr)]
pub enum EquipmentTier {
    #[default]
    Basic,
    Advanced,
    Epic,
    Legendary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum BuildLinkKind {
    /// The linked item is a component of this one.
    #[strum(serialize = "build_path")]
    BuildPath,
    /// The linked item is an upgrade of this one.
    #[strum(serialize = "builds_into")]
    BuildsInto,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Equipment {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub description: String,
    pub category: String,
    pub tier: String,
    pub price: i64,
    pub attributes: EquipmentAttributesDto,
    pub passive: Option<PassiveDto>,
    pub active: Option<ActiveDto>,
    pub build_path: Vec<i32>,
    pub builds_into: Vec<i32>,
    pub recommended_for: Vec<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Equipment {
    /// Converts an equipment row and its outgoing build links into a domain model.
    ///
    /// Links are expected in `position` order.
    ///
    /// # Returns
    /// - `Ok(Equipment)` - Converted model
    /// - `Err(DbErr::Custom)` - A JSON column does not match its expected shape
    pub fn from_entity(
        entity: entity::equipment::Model,
        links: Vec<entity::equipment_build_link::Model>,
    ) -> Result<Self, DbErr> {
        let (build_path, builds_into): (Vec<_>, Vec<_>) = links
            .into_iter()
            .partition(|l| l.kind == BuildLinkKind::BuildPath.as_ref());

        Ok(Self {
            id: entity.id,
            name: entity.name,
            image: entity.image,
            description: entity.description,
            category: entity.category,
            tier: entity.tier,
            price: entity.price,
            attributes: json::decode(entity.attributes, "attributes")?,
            passive: entity
                .passive
                .map(|p| json::decode(p, "passive"))
                .transpose()?,
            active: entity
                .active
                .map(|a| json::decode(a, "active"))
                .transpose()?,
            build_path: build_path.into_iter().map(|l| l.linked_id).collect(),
            builds_into: builds_into.into_iter().map(|l| l.linked_id).collect(),
            recommended_for: json::decode(entity.recommended_for, "recommended_for")?,
            tags: json::decode(entity.tags, "tags")?,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> EquipmentDto {
        EquipmentDto {
            id: self.id,
            name: self.name,
            image: self.image,
            description: self.description,
            category: self.category,
            tier: self.tier,
            price: self.price,
            attributes: self.attributes,
            passive: self.passive,
            active: self.active,
            build_path: self.build_path,
            builds_into: self.builds_into,
            recommended_for: self.recommended_for,
            tags: self.tags,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentParams {
    pub name: String,
    pub image: String,
    pub description: String,
    pub category: EquipmentCategory,
    pub tier: EquipmentTier,
    pub price: i64,
    pub attributes: EquipmentAttributesDto,
    pub passive: Option<PassiveDto>,
    pub active: Option<ActiveDto>,
    pub build_path: Vec<i32>,
    pub builds_into: Vec<i32>,
    pub recommended_for: Vec<String>,
    pub tags: Vec<String>,
}

impl EquipmentParams {
    /// Validates an equipment request body.
    ///
    /// Build references are only checked for shape; the service checks that they exist.
    ///
    /// # Returns
    /// - `Ok(EquipmentParams)` - Trimmed parameters, tier defaults to Basic
    /// - `Err(AppError::Validation)` - Every failed rule
    pub fn from_dto(dto: EquipmentInputDto) -> Result<Self, AppError> {
        let mut v = Validator::new();

        v.length(&dto.name, 1, 100, "Equipment name must be between 1 and 100 characters");
        v.check(!dto.image.trim().is_empty(), "Equipment image is required");
        v.length(
            &dto.description,
            1,
            1000,
            "Equipment description must be between 1 and 1000 characters",
        );
        v.check(
            dto.price.is_some_and(|p| p >= 0),
            "Price must be a positive integer",
        );
        let category = v.parse::<EquipmentCategory>(&dto.category, "Invalid equipment category");
        let tier = match dto.tier.as_deref().map(str::trim) {
            None | Some("") => Some(EquipmentTier::default()),
            Some(raw) => v.parse::<EquipmentTier>(raw, "Invalid equipment tier"),
        };
        v.check(
            dto.build_path
                .iter()
                .chain(dto.builds_into.iter())
                .all(|&id| id > 0),
            "Build references must be valid equipment ids",
        );

        v.finish()?;

        let (Some(category), Some(tier), Some(price)) = (category, tier, dto.price) else {
            return Err(AppError::InternalError(
                "Equipment validation passed with missing fields".to_string(),
            ));
        };

        Ok(Self {
            name: dto.name.trim().to_string(),
            image: dto.image.trim().to_string(),
            description: dto.description.trim().to_string(),
            category,
            tier,
            price,
            attributes: dto.attributes,
            passive: dto.passive,
            active: dto.active,
            build_path: dedup_keep_order(dto.build_path),
            builds_into: dedup_keep_order(dto.builds_into),
            recommended_for: dto.recommended_for,
            tags: dto.tags,
        })
    }

    /// Distinct equipment ids referenced by the build path and upgrades.
    pub fn referenced_ids(&self) -> Vec<i32> {
        let mut ids: Vec<i32> = self
            .build_path
            .iter()
            .chain(self.builds_into.iter())
            .copied()
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

/// Optional filters for the equipment list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EquipmentFilter {
    pub category: Option<EquipmentCategory>,
    pub tier: Option<EquipmentTier>,
}

impl EquipmentFilter {
    pub fn parse(category: Option<&str>, tier: Option<&str>) -> Result<Self, AppError> {
        let mut v = Validator::new();
        let category =
            category.and_then(|c| v.parse::<EquipmentCategory>(c, "Invalid equipment category"));
        let tier = tier.and_then(|t| v.parse::<EquipmentTier>(t, "Invalid equipment tier"));
        v.finish()?;

        Ok(Self { category, tier })
    }
}

fn dedup_keep_order(ids: Vec<i32>) -> Vec<i32> {
    let mut seen = Vec::with_capacity(ids.len());
    for id in ids {
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen
}
