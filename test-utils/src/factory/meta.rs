//! Meta factory for creating patch snapshots.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Creates a meta snapshot for `patch` listing `hero_ids`.
pub async fn create_meta(
    db: &DatabaseConnection,
    patch: &str,
    hero_ids: &[i32],
) -> Result<entity::meta::Model, DbErr> {
    let now = Utc::now();
    entity::meta::ActiveModel {
        patch: ActiveValue::Set(patch.to_string()),
        hero_ids: ActiveValue::Set(json!(hero_ids)),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
