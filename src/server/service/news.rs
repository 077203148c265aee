use sea_orm::DatabaseConnection;

use crate::server::{
    data::news::NewsRepository,
    error::{is_unique_violation, AppError},
    model::{
        news::{News, NewsListQuery, NewsParams},
        pagination::{Page, PageParams},
    },
    util::slug::{news_slug, with_suffix},
};

/// Inserts tried before a slug collision is reported as a conflict.
const SLUG_ATTEMPTS: u32 = 3;

const SLUG_TAKEN: &str = "A post with this slug already exists";

pub struct NewsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        query: NewsListQuery,
        page: PageParams,
    ) -> Result<Page<News>, AppError> {
        Ok(NewsRepository::new(self.db)
            .get_paginated(&query, page)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<News, AppError> {
        NewsRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<News, AppError> {
        NewsRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .ok_or_else(not_found)
    }

    /// Creates a post under a slug derived from its title.
    ///
    /// A concurrent post can claim the chosen slug between the lookup and the insert;
    /// the slug is then picked again, up to `SLUG_ATTEMPTS` times.
    pub async fn create(&self, params: NewsParams) -> Result<News, AppError> {
        let repo = NewsRepository::new(self.db);

        let mut attempts = 1;
        loop {
            let slug = self.unique_slug(&params.title, None).await?;
            match repo.create(params.clone(), slug).await {
                Ok(news) => {
                    tracing::info!("Created news {} ({})", news.id, news.slug);
                    return Ok(news);
                }
                Err(err) if is_unique_violation(&err) && attempts < SLUG_ATTEMPTS => {
                    tracing::debug!("News slug taken during insert, retrying");
                    attempts += 1;
                }
                Err(err) => return Err(AppError::conflict_on_unique(err, SLUG_TAKEN)),
            }
        }
    }

    /// Replaces a post. The slug is regenerated only when the title changes.
    pub async fn update(&self, id: i32, params: NewsParams) -> Result<News, AppError> {
        let repo = NewsRepository::new(self.db);
        let existing = repo.find_by_id(id).await?.ok_or_else(not_found)?;

        let mut attempts = 1;
        loop {
            let slug = if existing.title == params.title {
                existing.slug.clone()
            } else {
                self.unique_slug(&params.title, Some(id)).await?
            };

            match repo.update(id, params.clone(), slug).await {
                Ok(news) => return news.ok_or_else(not_found),
                Err(err) if is_unique_violation(&err) && attempts < SLUG_ATTEMPTS => {
                    attempts += 1;
                }
                Err(err) => return Err(AppError::conflict_on_unique(err, SLUG_TAKEN)),
            }
        }
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !NewsRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }

        Ok(())
    }

    /// Finds the first free slug for `title`, appending `-2`, `-3`, ... on collision.
    async fn unique_slug(&self, title: &str, exclude_id: Option<i32>) -> Result<String, AppError> {
        let repo = NewsRepository::new(self.db);
        let base = news_slug(title);

        let mut attempt = 1;
        loop {
            let candidate = with_suffix(&base, attempt);
            if !repo.slug_exists(&candidate, exclude_id).await? {
                return Ok(candidate);
            }
            attempt += 1;
        }
    }
}

fn not_found() -> AppError {
    AppError::NotFound("News not found".to_string())
}
