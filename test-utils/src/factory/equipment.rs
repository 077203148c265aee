//! Equipment factory for creating test items and build links.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating test equipment.
pub struct EquipmentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    category: String,
    tier: String,
    price: i64,
}

impl<'a> EquipmentFactory<'a> {
    /// Creates a new EquipmentFactory with default values.
    ///
    /// Defaults to a Basic Attack item priced at 300.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Item {}", next_id()),
            category: "Attack".to_string(),
            tier: "Basic".to_string(),
            price: 300,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn tier(mut self, tier: impl Into<String>) -> Self {
        self.tier = tier.into();
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    pub async fn build(self) -> Result<entity::equipment::Model, DbErr> {
        entity::equipment::ActiveModel {
            name: ActiveValue::Set(self.name),
            image: ActiveValue::Set("https://cdn.example.com/item.png".to_string()),
            description: ActiveValue::Set("An item.".to_string()),
            category: ActiveValue::Set(self.category),
            tier: ActiveValue::Set(self.tier),
            price: ActiveValue::Set(self.price),
            attributes: ActiveValue::Set(json!({ "attack": 20.0 })),
            passive: ActiveValue::Set(None),
            active: ActiveValue::Set(None),
            recommended_for: ActiveValue::Set(json!([])),
            tags: ActiveValue::Set(json!([])),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an equipment item with default values.
pub async fn create_equipment(db: &DatabaseConnection) -> Result<entity::equipment::Model, DbErr> {
    EquipmentFactory::new(db).build().await
}

/// Inserts a build link from `equipment_id` to `linked_id`.
///
/// # Arguments
/// - `kind` - `"build_path"` or `"builds_into"`
pub async fn create_build_link(
    db: &DatabaseConnection,
    equipment_id: i32,
    linked_id: i32,
    kind: &str,
) -> Result<entity::equipment_build_link::Model, DbErr> {
    entity::equipment_build_link::ActiveModel {
        equipment_id: ActiveValue::Set(equipment_id),
        linked_id: ActiveValue::Set(linked_id),
        kind: ActiveValue::Set(kind.to_string()),
        position: ActiveValue::Set(0),
        ..Default::default()
    }
    .insert(db)
    .await
}
