use sea_orm::entity::prelude::*;

/// Ally or counter reference from one hero to another.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hero_matchup")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hero_id: i32,
    pub other_hero_id: i32,
    /// Either `"ally"` or `"counter"`.
    pub kind: String,
    pub description: String,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hero::Entity",
        from = "Column::HeroId",
        to = "super::hero::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Hero,
}

impl Related<super::hero::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hero.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
