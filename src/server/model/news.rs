//! News post domain models and parameters.

use chrono::{DateTime, Utc};
use strum::{AsRefStr, Display, EnumString};

use crate::{
    model::news::{NewsDto, NewsInputDto, NewsListItemDto},
    server::{
        error::AppError,
        util::{markdown::render_html, validate::Validator},
    },
};

/// Author written when a post does not name one.
pub const DEFAULT_AUTHOR: &str = "BlogHok";

/// Pages of this size or smaller leave `content` out of list items.
pub const SUMMARY_LIMIT: u64 = 10;

const MAX_SEARCH_LENGTH: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum NewsCategory {
    #[default]
    Guides,
    Updates,
    Events,
    Esports,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum NewsSort {
    #[default]
    Latest,
    Oldest,
    Title,
    /// No text index backs this, so it orders like `Latest`.
    Relevance,
}

#[derive(Debug, Clone, PartialEq)]
pub struct News {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub image: Option<String>,
    pub category: String,
    pub author: String,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl News {
    pub fn from_entity(entity: entity::news::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug,
            content: entity.content,
            image: entity.image,
            category: entity.category,
            author: entity.author,
            published_at: entity.published_at,
            created_at: entity.created_at,
        }
    }

    /// Converts to the detail DTO, rendering the markdown body to HTML.
    pub fn into_dto(self) -> NewsDto {
        let content_html = render_html(&self.content);

        NewsDto {
            id: self.id,
            title: self.title,
            slug: self.slug,
            content: self.content,
            content_html,
            image: self.image,
            category: self.category,
            author: self.author,
            published_at: self.published_at,
            created_at: self.created_at,
        }
    }

    pub fn into_list_item_dto(self, include_content: bool) -> NewsListItemDto {
        NewsListItemDto {
            id: self.id,
            title: self.title,
            slug: self.slug,
            content: include_content.then_some(self.content),
            image: self.image,
            category: self.category,
            author: self.author,
            published_at: self.published_at,
            created_at: self.created_at,
        }
    }
}

/// Validated news fields for create and update.
///
/// `published_at` is `None` when the client left it out; create fills in the current
/// time and update keeps the stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsParams {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub category: NewsCategory,
    pub author: String,
    pub published_at: Option<DateTime<Utc>>,
}

impl NewsParams {
    /// Validates a news request body.
    ///
    /// # Returns
    /// - `Ok(NewsParams)` - Trimmed parameters with defaults applied
    /// - `Err(AppError::Validation)` - Every failed rule
    pub fn from_dto(dto: NewsInputDto) -> Result<Self, AppError> {
        let mut v = Validator::new();

        v.length(&dto.title, 1, 200, "News title must be between 1 and 200 characters");
        v.length(
            &dto.content,
            1,
            10000,
            "News content must be between 1 and 10000 characters",
        );
        let category = match dto.category.as_deref().map(str::trim) {
            None | Some("") => Some(NewsCategory::default()),
            Some(raw) => v.parse::<NewsCategory>(raw, "Invalid category"),
        };
        let author = dto
            .author
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(DEFAULT_AUTHOR)
            .to_string();
        v.length(&author, 0, 100, "Author name must be less than 100 characters");

        v.finish()?;

        Ok(Self {
            title: dto.title.trim().to_string(),
            content: dto.content,
            image: dto
                .image
                .map(|i| i.trim().to_string())
                .filter(|i| !i.is_empty()),
            category: category.unwrap_or_default(),
            author,
            published_at: dto.published_at,
        })
    }
}

/// Filters and ordering for the news list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewsListQuery {
    pub category: Option<NewsCategory>,
    pub author: Option<String>,
    /// Case-insensitive substring matched against title or content.
    pub search: Option<String>,
    pub sort: NewsSort,
}

impl NewsListQuery {
    pub fn parse(
        category: Option<&str>,
        author: Option<&str>,
        search: Option<&str>,
        sort: Option<&str>,
    ) -> Result<Self, AppError> {
        let mut v = Validator::new();

        let search = search.map(str::trim).filter(|s| !s.is_empty());
        if let Some(search) = search {
            v.length(
                search,
                0,
                MAX_SEARCH_LENGTH,
                "Search query must be less than 100 characters",
            );
        }
        let category = category.and_then(|c| v.parse::<NewsCategory>(c, "Invalid category"));
        let sort = sort
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| v.parse::<NewsSort>(s, "Invalid sort option"))
            .unwrap_or_default();

        v.finish()?;

        Ok(Self {
            category,
            author: author
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(str::to_string),
            search: search.map(str::to_string),
            sort,
        })
    }
}
