//! Arcana factory for creating test arcana.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating test arcana.
pub struct ArcanaFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    color: String,
    tier: i16,
}

impl<'a> ArcanaFactory<'a> {
    /// Creates a new ArcanaFactory for a tier 3 red arcana.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Arcana {}", next_id()),
            color: "red".to_string(),
            tier: 3,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn tier(mut self, tier: i16) -> Self {
        self.tier = tier;
        self
    }

    pub async fn build(self) -> Result<entity::arcana::Model, DbErr> {
        entity::arcana::ActiveModel {
            name: ActiveValue::Set(self.name),
            color: ActiveValue::Set(self.color),
            tier: ActiveValue::Set(self.tier),
            image: ActiveValue::Set("https://cdn.example.com/arcana.png".to_string()),
            description: ActiveValue::Set("Adds attack.".to_string()),
            attributes: ActiveValue::Set(json!({ "attack": 1.6 })),
            effects: ActiveValue::Set(json!([])),
            usage: ActiveValue::Set(None),
            recommended_for: ActiveValue::Set(json!([])),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an arcana with default values.
pub async fn create_arcana(db: &DatabaseConnection) -> Result<entity::arcana::Model, DbErr> {
    ArcanaFactory::new(db).build().await
}
