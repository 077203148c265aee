//! Meta snapshot domain models and parameters.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::meta::{MetaDto, MetaInputDto, MetaPatchDto},
    server::{
        error::AppError,
        model::hero::HeroSummary,
        util::{json, validate::Validator},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Meta {
    pub id: i32,
    pub patch: String,
    pub heroes: Vec<HeroSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Meta {
    /// Reads the hero ids stored on a meta row.
    pub fn hero_ids(entity: &entity::meta::Model) -> Result<Vec<i32>, DbErr> {
        json::decode(entity.hero_ids.clone(), "hero_ids")
    }

    /// Populates a meta row with hero summaries.
    ///
    /// Ids missing from `heroes` belong to deleted heroes and are dropped.
    ///
    /// # Arguments
    /// - `entity` - The meta row
    /// - `heroes` - Hero rows keyed by id, covering at least the ids on this row
    pub fn from_entity(
        entity: entity::meta::Model,
        heroes: &HashMap<i32, entity::hero::Model>,
    ) -> Result<Self, DbErr> {
        let heroes = Self::hero_ids(&entity)?
            .into_iter()
            .filter_map(|id| heroes.get(&id).cloned())
            .map(HeroSummary::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: entity.id,
            patch: entity.patch,
            heroes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> MetaDto {
        MetaDto {
            id: self.id,
            patch: self.patch,
            heroes: self.heroes.into_iter().map(HeroSummary::into_dto).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetaParams {
    pub patch: String,
    pub hero_ids: Vec<i32>,
}

impl MetaParams {
    pub fn from_dto(dto: MetaInputDto) -> Result<Self, AppError> {
        let mut v = Validator::new();
        v.check(!dto.patch.trim().is_empty(), "Patch is required");
        check_hero_ids(&mut v, &dto.heroes);
        v.finish()?;

        Ok(Self {
            patch: dto.patch.trim().to_string(),
            hero_ids: dto.heroes,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetaPatch {
    pub patch: Option<String>,
    pub hero_ids: Option<Vec<i32>>,
}

impl MetaPatch {
    pub fn from_dto(dto: MetaPatchDto) -> Result<Self, AppError> {
        let mut v = Validator::new();
        if let Some(patch) = &dto.patch {
            v.check(!patch.trim().is_empty(), "Patch is required");
        }
        if let Some(heroes) = &dto.heroes {
            check_hero_ids(&mut v, heroes);
        }
        v.finish()?;

        Ok(Self {
            patch: dto.patch.map(|p| p.trim().to_string()),
            hero_ids: dto.heroes,
        })
    }
}

fn check_hero_ids(v: &mut Validator, ids: &[i32]) {
    v.check(ids.iter().all(|&id| id > 0), "Meta heroes must be valid hero ids");
}
