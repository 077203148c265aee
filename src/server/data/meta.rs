//! Meta snapshot data repository.
//!
//! Hero ids are stored as a JSON array on the meta row. Population with hero summaries
//! happens through `HeroRepository::find_by_ids`.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::{
    data::hero::HeroRepository,
    model::meta::{Meta, MetaParams, MetaPatch},
    util::json,
};

pub struct MetaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MetaRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: MetaParams) -> Result<Meta, DbErr> {
        let now = Utc::now();

        let entity = entity::meta::ActiveModel {
            patch: ActiveValue::Set(params.patch),
            hero_ids: ActiveValue::Set(json::encode(&params.hero_ids, "hero_ids")?),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        first(self.populate(vec![entity]).await?)
    }

    /// Writes the fields present in the patch and refreshes `updated_at`.
    pub async fn patch(&self, id: i32, patch: MetaPatch) -> Result<Option<Meta>, DbErr> {
        let Some(existing) = entity::prelude::Meta::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut model: entity::meta::ActiveModel = existing.into();
        if let Some(name) = patch.patch {
            model.patch = ActiveValue::Set(name);
        }
        if let Some(hero_ids) = patch.hero_ids {
            model.hero_ids = ActiveValue::Set(json::encode(&hero_ids, "hero_ids")?);
        }
        model.updated_at = ActiveValue::Set(Utc::now());
        let entity = model.update(self.db).await?;

        first(self.populate(vec![entity]).await?).map(Some)
    }

    /// Lists every snapshot, newest first, with heroes populated.
    pub async fn list(&self) -> Result<Vec<Meta>, DbErr> {
        let rows = entity::prelude::Meta::find()
            .order_by_desc(entity::meta::Column::CreatedAt)
            .order_by_desc(entity::meta::Column::Id)
            .all(self.db)
            .await?;

        self.populate(rows).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Meta::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn populate(&self, rows: Vec<entity::meta::Model>) -> Result<Vec<Meta>, DbErr> {
        let mut ids = Vec::new();
        for row in &rows {
            ids.extend(Meta::hero_ids(row)?);
        }
        ids.sort_unstable();
        ids.dedup();

        let heroes: HashMap<i32, entity::hero::Model> =
            HeroRepository::new(self.db).find_by_ids(&ids).await?;

        rows.into_iter()
            .map(|row| Meta::from_entity(row, &heroes))
            .collect()
    }
}

fn first(mut metas: Vec<Meta>) -> Result<Meta, DbErr> {
    metas
        .pop()
        .ok_or_else(|| DbErr::Custom("Meta row missing after write".to_string()))
}
