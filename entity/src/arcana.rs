use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "arcana")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub color: String,
    pub tier: i16,
    pub image: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// JSON object with the 15 stat fields.
    pub attributes: Json,
    pub effects: Json,
    pub usage: Option<String>,
    pub recommended_for: Json,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
