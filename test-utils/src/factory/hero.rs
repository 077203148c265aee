//! Hero factory for creating test heroes and matchups.

use crate::factory::helpers::{kebab, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating test heroes with customizable fields.
///
/// The slug always follows the name so lookups by slug behave like the API.
///
/// # Example
///
/// ```rust,ignore
/// let hero = HeroFactory::new(&db)
///     .name("Lu Bu")
///     .roles(&["Fighter"])
///     .win_rate(52.5)
///     .build()
///     .await?;
/// assert_eq!(hero.slug, "lu-bu");
/// ```
pub struct HeroFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    title: String,
    roles: Vec<String>,
    lanes: Vec<String>,
    meta_tier: String,
    win_rate: f64,
    pick_rate: f64,
    ban_rate: f64,
}

impl<'a> HeroFactory<'a> {
    /// Creates a new HeroFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Hero {id}"`
    /// - roles: `["Fighter"]`, lanes: `["Top"]`
    /// - meta tier `"B"` and all rates 50.0
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Hero {}", id),
            title: format!("Title {}", id),
            roles: vec!["Fighter".to_string()],
            lanes: vec!["Top".to_string()],
            meta_tier: "B".to_string(),
            win_rate: 50.0,
            pick_rate: 50.0,
            ban_rate: 5.0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn roles(mut self, roles: &[&str]) -> Self {
        self.roles = roles.iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn lanes(mut self, lanes: &[&str]) -> Self {
        self.lanes = lanes.iter().map(|l| l.to_string()).collect();
        self
    }

    /// Sets the meta tier label. The sort rank is derived from it.
    pub fn meta_tier(mut self, meta_tier: impl Into<String>) -> Self {
        self.meta_tier = meta_tier.into();
        self
    }

    pub fn win_rate(mut self, win_rate: f64) -> Self {
        self.win_rate = win_rate;
        self
    }

    pub fn pick_rate(mut self, pick_rate: f64) -> Self {
        self.pick_rate = pick_rate;
        self
    }

    /// Builds and inserts the hero entity into the database.
    pub async fn build(self) -> Result<entity::hero::Model, DbErr> {
        let now = Utc::now();
        let meta_tier_rank = match self.meta_tier.as_str() {
            "S+" => 0,
            "S" => 1,
            "A" => 2,
            "B" => 3,
            _ => 4,
        };

        entity::hero::ActiveModel {
            slug: ActiveValue::Set(kebab(&self.name)),
            name: ActiveValue::Set(self.name),
            title: ActiveValue::Set(self.title),
            image: ActiveValue::Set("https://cdn.example.com/hero.png".to_string()),
            roles: ActiveValue::Set(json!(self.roles)),
            lanes: ActiveValue::Set(json!(self.lanes)),
            meta_tier: ActiveValue::Set(self.meta_tier),
            meta_tier_rank: ActiveValue::Set(meta_tier_rank),
            win_rate: ActiveValue::Set(self.win_rate),
            pick_rate: ActiveValue::Set(self.pick_rate),
            ban_rate: ActiveValue::Set(self.ban_rate),
            skills: ActiveValue::Set(json!([
                { "name": "Strike", "icon": "", "description": "Deals damage." }
            ])),
            lore: ActiveValue::Set(String::new()),
            profile: ActiveValue::Set(String::new()),
            combo: ActiveValue::Set(json!([])),
            skins: ActiveValue::Set(json!([])),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a hero with default values.
pub async fn create_hero(db: &DatabaseConnection) -> Result<entity::hero::Model, DbErr> {
    HeroFactory::new(db).build().await
}

/// Inserts an ally or counter row from `hero_id` to `other_hero_id`.
///
/// # Arguments
/// - `kind` - `"ally"` or `"counter"`
pub async fn create_matchup(
    db: &DatabaseConnection,
    hero_id: i32,
    other_hero_id: i32,
    kind: &str,
) -> Result<entity::hero_matchup::Model, DbErr> {
    entity::hero_matchup::ActiveModel {
        hero_id: ActiveValue::Set(hero_id),
        other_hero_id: ActiveValue::Set(other_hero_id),
        kind: ActiveValue::Set(kind.to_string()),
        description: ActiveValue::Set(format!("{} note", kind)),
        position: ActiveValue::Set(0),
        ..Default::default()
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn derives_slug_from_name() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let hero = HeroFactory::new(db).name("Lu  Bu").build().await?;

        assert_eq!(hero.slug, "lu-bu");
        assert_eq!(hero.meta_tier_rank, 3);

        Ok(())
    }

    #[tokio::test]
    async fn creates_matchup_between_heroes() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let hero = create_hero(db).await?;
        let other = create_hero(db).await?;
        let matchup = create_matchup(db, hero.id, other.id, "counter").await?;

        assert_eq!(matchup.hero_id, hero.id);
        assert_eq!(matchup.other_hero_id, other.id);

        Ok(())
    }
}
