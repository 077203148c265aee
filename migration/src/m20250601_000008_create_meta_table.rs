use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Meta::Table)
                    .if_not_exists()
                    .col(pk_auto(Meta::Id))
                    .col(string(Meta::Patch))
                    .col(json(Meta::HeroIds))
                    .col(timestamp_with_time_zone(Meta::CreatedAt))
                    .col(timestamp_with_time_zone(Meta::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Meta::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Meta {
    Table,
    Id,
    Patch,
    HeroIds,
    CreatedAt,
    UpdatedAt,
}
