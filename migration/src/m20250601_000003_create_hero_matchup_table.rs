use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000002_create_hero_table::Hero;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HeroMatchup::Table)
                    .if_not_exists()
                    .col(pk_auto(HeroMatchup::Id))
                    .col(integer(HeroMatchup::HeroId))
                    .col(integer(HeroMatchup::OtherHeroId))
                    .col(string(HeroMatchup::Kind))
                    .col(string(HeroMatchup::Description))
                    .col(integer(HeroMatchup::Position))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hero_matchup_hero_id")
                            .from(HeroMatchup::Table, HeroMatchup::HeroId)
                            .to(Hero::Table, Hero::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hero_matchup_other_hero_id")
                            .from(HeroMatchup::Table, HeroMatchup::OtherHeroId)
                            .to(Hero::Table, Hero::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HeroMatchup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HeroMatchup {
    Table,
    Id,
    HeroId,
    OtherHeroId,
    Kind,
    Description,
    Position,
}
