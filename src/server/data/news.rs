//! News data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    model::{
        news::{News, NewsListQuery, NewsParams, NewsSort},
        pagination::{Page, PageParams},
    },
    util::like,
};

use entity::news::Column;

pub struct NewsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a news post under an already resolved slug.
    ///
    /// `published_at` defaults to the current time when the params leave it out.
    pub async fn create(&self, params: NewsParams, slug: String) -> Result<News, DbErr> {
        let now = Utc::now();

        let entity = entity::news::ActiveModel {
            title: ActiveValue::Set(params.title),
            slug: ActiveValue::Set(slug),
            content: ActiveValue::Set(params.content),
            image: ActiveValue::Set(params.image),
            category: ActiveValue::Set(params.category.to_string()),
            author: ActiveValue::Set(params.author),
            published_at: ActiveValue::Set(params.published_at.unwrap_or(now)),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(News::from_entity(entity))
    }

    /// Replaces the fields of a news post.
    ///
    /// The stored `published_at` is kept when the params leave it out.
    ///
    /// # Returns
    /// - `Ok(Some(News))` - The updated post
    /// - `Ok(None)` - No post with this id
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        params: NewsParams,
        slug: String,
    ) -> Result<Option<News>, DbErr> {
        let Some(existing) = entity::prelude::News::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut model: entity::news::ActiveModel = existing.into();
        model.title = ActiveValue::Set(params.title);
        model.slug = ActiveValue::Set(slug);
        model.content = ActiveValue::Set(params.content);
        model.image = ActiveValue::Set(params.image);
        model.category = ActiveValue::Set(params.category.to_string());
        model.author = ActiveValue::Set(params.author);
        if let Some(published_at) = params.published_at {
            model.published_at = ActiveValue::Set(published_at);
        }

        let entity = model.update(self.db).await?;

        Ok(Some(News::from_entity(entity)))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<News>, DbErr> {
        let entity = entity::prelude::News::find_by_id(id).one(self.db).await?;

        Ok(entity.map(News::from_entity))
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<News>, DbErr> {
        let entity = entity::prelude::News::find()
            .filter(Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(entity.map(News::from_entity))
    }

    /// Gets one page of news posts matching the list filters.
    pub async fn get_paginated(
        &self,
        query: &NewsListQuery,
        params: PageParams,
    ) -> Result<Page<News>, DbErr> {
        let mut condition = Condition::all();
        if let Some(category) = query.category {
            condition = condition.add(Column::Category.eq(category.as_ref()));
        }
        if let Some(author) = &query.author {
            condition = condition.add(Column::Author.eq(author.as_str()));
        }
        if let Some(search) = &query.search {
            condition = condition.add(
                Condition::any()
                    .add(Column::Title.like(like::contains(search)))
                    .add(Column::Content.like(like::contains(search))),
            );
        }

        let select = entity::prelude::News::find().filter(condition);
        let ordered = match query.sort {
            NewsSort::Latest | NewsSort::Relevance => {
                select.clone().order_by_desc(Column::PublishedAt)
            }
            NewsSort::Oldest => select.clone().order_by_asc(Column::PublishedAt),
            NewsSort::Title => select.clone().order_by_asc(Column::Title),
        }
        .order_by_desc(Column::Id);

        let (rows, total) = tokio::try_join!(
            ordered
                .offset(params.offset())
                .limit(params.limit)
                .all(self.db),
            select.count(self.db),
        )?;

        Ok(Page {
            items: rows.into_iter().map(News::from_entity).collect(),
            total,
            params,
        })
    }

    /// # Returns
    /// - `Ok(true)` - Post deleted
    /// - `Ok(false)` - No post with this id
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::News::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether a slug is used by a post other than `exclude_id`.
    pub async fn slug_exists(&self, slug: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut select = entity::prelude::News::find().filter(Column::Slug.eq(slug));
        if let Some(id) = exclude_id {
            select = select.filter(Column::Id.ne(id));
        }

        Ok(select.count(self.db).await? > 0)
    }
}
