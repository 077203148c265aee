use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::PaginationDto;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SkillDto {
    pub name: String,
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ComboDto {
    /// Indices into the hero's skill list.
    pub skills: Vec<i64>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SkinDto {
    pub name: String,
    pub image: String,
}

/// Ally or counter reference sent when writing a hero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MatchupInputDto {
    /// Id of the referenced hero.
    pub hero: i32,
    #[serde(default)]
    pub description: String,
}

/// Ally or counter populated with the referenced hero's summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MatchupDto {
    pub hero: i32,
    pub name: String,
    pub slug: String,
    pub image: String,
    pub roles: Vec<String>,
    pub description: String,
}

/// Body of hero create and update requests.
///
/// Every field is optional at the JSON level so that validation can report all
/// missing or malformed fields at once.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroInputDto {
    pub name: String,
    pub title: String,
    pub image: String,
    pub roles: Vec<String>,
    pub lanes: Vec<String>,
    pub meta_tier: String,
    pub win_rate: Option<f64>,
    pub pick_rate: Option<f64>,
    pub ban_rate: Option<f64>,
    pub skills: Vec<SkillDto>,
    pub allies: Vec<MatchupInputDto>,
    pub counters: Vec<MatchupInputDto>,
    pub lore: String,
    pub profile: String,
    pub combo: Vec<ComboDto>,
    pub skins: Vec<SkinDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeroDto {
    pub id: i32,
    pub name: String,
    pub title: String,
    pub image: String,
    pub roles: Vec<String>,
    pub lanes: Vec<String>,
    pub meta_tier: String,
    pub win_rate: f64,
    pub pick_rate: f64,
    pub ban_rate: f64,
    pub skills: Vec<SkillDto>,
    pub allies: Vec<MatchupDto>,
    pub counters: Vec<MatchupDto>,
    pub lore: String,
    pub profile: String,
    pub combo: Vec<ComboDto>,
    pub skins: Vec<SkinDto>,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Reduced hero used in list responses and meta snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeroSummaryDto {
    pub id: i32,
    pub name: String,
    pub title: String,
    pub image: String,
    pub roles: Vec<String>,
    pub lanes: Vec<String>,
    pub meta_tier: String,
    pub win_rate: f64,
    pub pick_rate: f64,
    pub ban_rate: f64,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedHeroesDto {
    pub success: bool,
    pub data: Vec<HeroSummaryDto>,
    pub pagination: PaginationDto,
}
