use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Equipment::Table)
                    .if_not_exists()
                    .col(pk_auto(Equipment::Id))
                    .col(string_uniq(Equipment::Name))
                    .col(string(Equipment::Image))
                    .col(text(Equipment::Description))
                    .col(string(Equipment::Category))
                    .col(string(Equipment::Tier))
                    .col(big_integer(Equipment::Price))
                    .col(json(Equipment::Attributes))
                    .col(json_null(Equipment::Passive))
                    .col(json_null(Equipment::Active))
                    .col(json(Equipment::RecommendedFor))
                    .col(json(Equipment::Tags))
                    .col(timestamp_with_time_zone(Equipment::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Equipment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Equipment {
    Table,
    Id,
    Name,
    Image,
    Description,
    Category,
    Tier,
    Price,
    Attributes,
    Passive,
    Active,
    RecommendedFor,
    Tags,
    CreatedAt,
}
