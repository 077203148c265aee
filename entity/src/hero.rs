use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "hero")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub title: String,
    pub image: String,
    /// JSON array of role names.
    pub roles: Json,
    /// JSON array of lane names.
    pub lanes: Json,
    pub meta_tier: String,
    /// Sort key for `meta_tier`, 0 is the strongest tier.
    pub meta_tier_rank: i16,
    pub win_rate: f64,
    pub pick_rate: f64,
    pub ban_rate: f64,
    /// JSON array of `{ name, icon, description }`.
    pub skills: Json,
    #[sea_orm(column_type = "Text")]
    pub lore: String,
    #[sea_orm(column_type = "Text")]
    pub profile: String,
    /// JSON array of `{ skills: [index], description }`.
    pub combo: Json,
    /// JSON array of `{ name, image }`.
    pub skins: Json,
    #[sea_orm(unique)]
    pub slug: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::hero_matchup::Entity")]
    HeroMatchup,
}

impl Related<super::hero_matchup::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HeroMatchup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
