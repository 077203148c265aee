use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Arcana::Table)
                    .if_not_exists()
                    .col(pk_auto(Arcana::Id))
                    .col(string_uniq(Arcana::Name))
                    .col(string(Arcana::Color))
                    .col(small_integer(Arcana::Tier))
                    .col(string(Arcana::Image))
                    .col(text(Arcana::Description))
                    .col(json(Arcana::Attributes))
                    .col(json(Arcana::Effects))
                    .col(text_null(Arcana::Usage))
                    .col(json(Arcana::RecommendedFor))
                    .col(timestamp_with_time_zone(Arcana::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Arcana::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Arcana {
    Table,
    Id,
    Name,
    Color,
    Tier,
    Image,
    Description,
    Attributes,
    Effects,
    Usage,
    RecommendedFor,
    CreatedAt,
}
