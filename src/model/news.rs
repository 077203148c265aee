use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::PaginationDto;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsInputDto {
    pub title: String,
    /// Markdown source.
    pub content: String,
    pub image: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub content: String,
    /// `content` rendered from markdown to HTML.
    pub content_html: String,
    pub image: Option<String>,
    pub category: String,
    pub author: String,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// News post as it appears in list responses.
///
/// `content` is left out when a small page is requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsListItemDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub image: Option<String>,
    pub category: String,
    pub author: String,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedNewsDto {
    pub success: bool,
    pub data: Vec<NewsListItemDto>,
    pub pagination: PaginationDto,
}
