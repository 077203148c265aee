use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "equipment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub image: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category: String,
    pub tier: String,
    pub price: i64,
    /// JSON object with the 17 stat fields.
    pub attributes: Json,
    /// JSON `{ name, description }` or null.
    pub passive: Option<Json>,
    /// JSON `{ name, description, cooldown }` or null.
    pub active: Option<Json>,
    pub recommended_for: Json,
    pub tags: Json,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::equipment_build_link::Entity")]
    EquipmentBuildLink,
}

impl Related<super::equipment_build_link::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EquipmentBuildLink.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
