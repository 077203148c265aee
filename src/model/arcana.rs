use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stat block of an arcana. Missing stats default to 0.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ArcanaAttributesDto {
    pub attack: f64,
    pub defense: f64,
    pub magic: f64,
    pub health: f64,
    pub mana: f64,
    pub speed: f64,
    pub critical_rate: f64,
    pub critical_damage: f64,
    pub penetration: f64,
    pub magic_penetration: f64,
    pub life_steal: f64,
    pub magic_life_steal: f64,
    pub cooldown_reduction: f64,
    pub attack_speed: f64,
    pub movement_speed: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ArcanaInputDto {
    pub name: String,
    pub color: String,
    pub tier: Option<i64>,
    pub image: String,
    pub description: String,
    pub attributes: ArcanaAttributesDto,
    pub effects: Vec<String>,
    pub usage: Option<String>,
    pub recommended_for: Vec<String>,
}

/// Partial arcana update. Absent fields keep their stored value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ArcanaPatchDto {
    pub name: Option<String>,
    pub color: Option<String>,
    pub tier: Option<i64>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub attributes: Option<ArcanaAttributesDto>,
    pub effects: Option<Vec<String>>,
    pub usage: Option<String>,
    pub recommended_for: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArcanaDto {
    pub id: i32,
    pub name: String,
    pub color: String,
    pub tier: i16,
    pub image: String,
    pub description: String,
    pub attributes: ArcanaAttributesDto,
    pub effects: Vec<String>,
    pub usage: Option<String>,
    pub recommended_for: Vec<String>,
    pub created_at: DateTime<Utc>,
}
