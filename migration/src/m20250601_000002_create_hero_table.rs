use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hero::Table)
                    .if_not_exists()
                    .col(pk_auto(Hero::Id))
                    .col(string_uniq(Hero::Name))
                    .col(string(Hero::Title))
                    .col(string(Hero::Image))
                    .col(json(Hero::Roles))
                    .col(json(Hero::Lanes))
                    .col(string(Hero::MetaTier))
                    .col(small_integer(Hero::MetaTierRank))
                    .col(double(Hero::WinRate))
                    .col(double(Hero::PickRate))
                    .col(double(Hero::BanRate))
                    .col(json(Hero::Skills))
                    .col(text(Hero::Lore))
                    .col(text(Hero::Profile))
                    .col(json(Hero::Combo))
                    .col(json(Hero::Skins))
                    .col(string_uniq(Hero::Slug))
                    .col(timestamp_with_time_zone(Hero::CreatedAt))
                    .col(timestamp_with_time_zone(Hero::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hero_meta_tier_win_rate")
                    .table(Hero::Table)
                    .col(Hero::MetaTierRank)
                    .col(Hero::WinRate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hero_created_at")
                    .table(Hero::Table)
                    .col(Hero::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hero::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Hero {
    Table,
    Id,
    Name,
    Title,
    Image,
    Roles,
    Lanes,
    MetaTier,
    MetaTierRank,
    WinRate,
    PickRate,
    BanRate,
    Skills,
    Lore,
    Profile,
    Combo,
    Skins,
    Slug,
    CreatedAt,
    UpdatedAt,
}
