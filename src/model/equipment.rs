use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stat block of an equipment item. Missing stats default to 0.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct EquipmentAttributesDto {
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
    pub armor: f64,
    pub magic_resist: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PassiveDto {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ActiveDto {
    pub name: String,
    pub description: String,
    /// Cooldown in seconds.
    pub cooldown: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct EquipmentInputDto {
    pub name: String,
    pub image: String,
    pub description: String,
    pub category: String,
    pub tier: Option<String>,
    pub price: Option<i64>,
    pub attributes: EquipmentAttributesDto,
    pub passive: Option<PassiveDto>,
    pub active: Option<ActiveDto>,
    /// Ids of the components this item is built from.
    pub build_path: Vec<i32>,
    /// Ids of the items this one upgrades into.
    pub builds_into: Vec<i32>,
    pub recommended_for: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentDto {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub description: String,
    pub category: String,
    pub tier: String,
    pub price: i64,
    pub attributes: EquipmentAttributesDto,
    pub passive: Option<PassiveDto>,
    pub active: Option<ActiveDto>,
    pub build_path: Vec<i32>,
    pub builds_into: Vec<i32>,
    pub recommended_for: Vec<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}
