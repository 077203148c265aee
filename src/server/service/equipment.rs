use sea_orm::DatabaseConnection;

use crate::server::{
    data::equipment::EquipmentRepository,
    error::AppError,
    model::equipment::{Equipment, EquipmentFilter, EquipmentParams},
};

pub struct EquipmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EquipmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, filter: EquipmentFilter) -> Result<Vec<Equipment>, AppError> {
        Ok(EquipmentRepository::new(self.db).list(filter).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Equipment, AppError> {
        EquipmentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    /// Creates an item after checking name uniqueness and build references.
    ///
    /// # Returns
    /// - `Ok(Equipment)` - The created item
    /// - `Err(AppError::Conflict)` - Name already used
    /// - `Err(AppError::Validation)` - A build reference does not exist
    pub async fn create(&self, params: EquipmentParams) -> Result<Equipment, AppError> {
        let repo = EquipmentRepository::new(self.db);

        self.check(&repo, &params, None).await?;

        let equipment = repo.create(&params).await?;
        tracing::info!("Created equipment {}", equipment.id);

        Ok(equipment)
    }

    pub async fn update(&self, id: i32, params: EquipmentParams) -> Result<Equipment, AppError> {
        let repo = EquipmentRepository::new(self.db);

        self.check(&repo, &params, Some(id)).await?;

        repo.update(id, &params).await?.ok_or_else(not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !EquipmentRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }

        Ok(())
    }

    async fn check(
        &self,
        repo: &EquipmentRepository<'_>,
        params: &EquipmentParams,
        self_id: Option<i32>,
    ) -> Result<(), AppError> {
        if repo.name_taken(&params.name, self_id).await? {
            return Err(AppError::Conflict(
                "Equipment with this name already exists".to_string(),
            ));
        }

        let referenced = params.referenced_ids();
        if referenced.is_empty() {
            return Ok(());
        }

        let mut errors = Vec::new();
        if self_id.is_some_and(|id| referenced.contains(&id)) {
            errors.push("Equipment cannot be part of its own build".to_string());
        }
        if repo.existing_ids(&referenced).await?.len() != referenced.len() {
            errors.push("Build references must point to existing equipment".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Equipment not found".to_string())
}
