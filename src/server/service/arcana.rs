use sea_orm::DatabaseConnection;

use crate::server::{
    data::arcana::ArcanaRepository,
    error::AppError,
    model::arcana::{Arcana, ArcanaListQuery, ArcanaParams, ArcanaPatch},
};

pub struct ArcanaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArcanaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, query: ArcanaListQuery) -> Result<Vec<Arcana>, AppError> {
        Ok(ArcanaRepository::new(self.db).list(&query).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Arcana, AppError> {
        ArcanaRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn create(&self, params: ArcanaParams) -> Result<Arcana, AppError> {
        let repo = ArcanaRepository::new(self.db);
        if repo.name_taken(&params.name, None).await? {
            return Err(conflict());
        }

        Ok(repo.create(params).await?)
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Arcana)` - The updated arcana
    /// - `Err(AppError::NotFound)` - No arcana with this id
    /// - `Err(AppError::Conflict)` - The new name is used by another arcana
    pub async fn patch(&self, id: i32, patch: ArcanaPatch) -> Result<Arcana, AppError> {
        let repo = ArcanaRepository::new(self.db);
        if let Some(name) = &patch.name {
            if repo.name_taken(name, Some(id)).await? {
                return Err(conflict());
            }
        }

        repo.patch(id, patch).await?.ok_or_else(not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ArcanaRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Arcana not found".to_string())
}

fn conflict() -> AppError {
    AppError::Conflict("Arcana with this name already exists".to_string())
}
