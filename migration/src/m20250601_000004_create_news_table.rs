use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(News::Table)
                    .if_not_exists()
                    .col(pk_auto(News::Id))
                    .col(string(News::Title))
                    .col(string_uniq(News::Slug))
                    .col(text(News::Content))
                    .col(string_null(News::Image))
                    .col(string(News::Category))
                    .col(string(News::Author))
                    .col(timestamp_with_time_zone(News::PublishedAt))
                    .col(timestamp_with_time_zone(News::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_news_published_at")
                    .table(News::Table)
                    .col(News::PublishedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_news_category_published_at")
                    .table(News::Table)
                    .col(News::Category)
                    .col(News::PublishedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_news_author")
                    .table(News::Table)
                    .col(News::Author)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(News::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum News {
    Table,
    Id,
    Title,
    Slug,
    Content,
    Image,
    Category,
    Author,
    PublishedAt,
    CreatedAt,
}
