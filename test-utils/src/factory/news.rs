//! News factory for creating test posts.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test news posts.
///
/// The slug defaults to `"news-{id}"` and is not derived from the title.
pub struct NewsFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    slug: String,
    content: String,
    category: String,
    author: String,
    published_at: DateTime<Utc>,
}

impl<'a> NewsFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("News {}", id),
            slug: format!("news-{}", id),
            content: "# Heading\n\nBody text.".to_string(),
            category: "guides".to_string(),
            author: "BlogHok".to_string(),
            published_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = published_at;
        self
    }

    pub async fn build(self) -> Result<entity::news::Model, DbErr> {
        entity::news::ActiveModel {
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            content: ActiveValue::Set(self.content),
            image: ActiveValue::Set(None),
            category: ActiveValue::Set(self.category),
            author: ActiveValue::Set(self.author),
            published_at: ActiveValue::Set(self.published_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a news post with default values.
pub async fn create_news(db: &DatabaseConnection) -> Result<entity::news::Model, DbErr> {
    NewsFactory::new(db).build().await
}
