use sea_orm::DatabaseConnection;

use crate::server::{
    data::hero::HeroRepository,
    error::AppError,
    model::{
        hero::{Hero, HeroListQuery, HeroParams, HeroSummary},
        pagination::{Page, PageParams},
    },
};

const NAME_TAKEN: &str = "A hero with this name already exists";

pub struct HeroService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HeroService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        query: HeroListQuery,
        page: PageParams,
    ) -> Result<Page<HeroSummary>, AppError> {
        Ok(HeroRepository::new(self.db)
            .get_paginated(&query, page)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Hero, AppError> {
        HeroRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Hero, AppError> {
        HeroRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .ok_or_else(not_found)
    }

    /// Creates a hero after checking name uniqueness and matchup references.
    ///
    /// # Returns
    /// - `Ok(Hero)` - The created hero with populated matchups
    /// - `Err(AppError::Conflict)` - Name or derived slug already used
    /// - `Err(AppError::Validation)` - A matchup references a hero that does not exist
    pub async fn create(&self, params: HeroParams) -> Result<Hero, AppError> {
        let repo = HeroRepository::new(self.db);

        self.check_unique(&repo, &params, None).await?;
        self.check_references(&repo, &params, None).await?;

        let hero = repo
            .create(&params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, NAME_TAKEN))?;
        tracing::info!("Created hero {} ({})", hero.id, hero.slug);

        Ok(hero)
    }

    /// Replaces a hero. Same checks as `create`, and a hero may not reference itself.
    pub async fn update(&self, id: i32, params: HeroParams) -> Result<Hero, AppError> {
        let repo = HeroRepository::new(self.db);

        self.check_unique(&repo, &params, Some(id)).await?;
        self.check_references(&repo, &params, Some(id)).await?;

        repo.update(id, &params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, NAME_TAKEN))?
            .ok_or_else(not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !HeroRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }
        tracing::info!("Deleted hero {}", id);

        Ok(())
    }

    async fn check_unique(
        &self,
        repo: &HeroRepository<'_>,
        params: &HeroParams,
        exclude_id: Option<i32>,
    ) -> Result<(), AppError> {
        if repo
            .name_taken(&params.name, &params.slug(), exclude_id)
            .await?
        {
            return Err(AppError::Conflict(NAME_TAKEN.to_string()));
        }

        Ok(())
    }

    async fn check_references(
        &self,
        repo: &HeroRepository<'_>,
        params: &HeroParams,
        self_id: Option<i32>,
    ) -> Result<(), AppError> {
        let referenced = params.referenced_hero_ids();
        if referenced.is_empty() {
            return Ok(());
        }

        let mut errors = Vec::new();
        if self_id.is_some_and(|id| referenced.contains(&id)) {
            errors.push("A hero cannot be its own ally or counter".to_string());
        }
        let existing = repo.existing_ids(&referenced).await?;
        if existing.len() != referenced.len() {
            errors.push("Ally and counter references must point to existing heroes".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Hero not found".to_string())
}
