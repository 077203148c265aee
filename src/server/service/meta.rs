use sea_orm::DatabaseConnection;

use crate::server::{
    data::{hero::HeroRepository, meta::MetaRepository},
    error::AppError,
    model::meta::{Meta, MetaParams, MetaPatch},
};

pub struct MetaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MetaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Meta>, AppError> {
        Ok(MetaRepository::new(self.db).list().await?)
    }

    pub async fn create(&self, params: MetaParams) -> Result<Meta, AppError> {
        self.check_heroes(&params.hero_ids).await?;

        Ok(MetaRepository::new(self.db).create(params).await?)
    }

    pub async fn patch(&self, id: i32, patch: MetaPatch) -> Result<Meta, AppError> {
        if let Some(hero_ids) = &patch.hero_ids {
            self.check_heroes(hero_ids).await?;
        }

        MetaRepository::new(self.db)
            .patch(id, patch)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !MetaRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }

        Ok(())
    }

    async fn check_heroes(&self, hero_ids: &[i32]) -> Result<(), AppError> {
        let mut distinct = hero_ids.to_vec();
        distinct.sort_unstable();
        distinct.dedup();

        let existing = HeroRepository::new(self.db).existing_ids(&distinct).await?;
        if existing.len() != distinct.len() {
            return Err(AppError::Validation(vec![
                "Meta heroes must reference existing heroes".to_string(),
            ]));
        }

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Meta not found".to_string())
}
