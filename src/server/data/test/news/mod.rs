use crate::{
    model::news::NewsInputDto,
    server::{
        data::news::NewsRepository,
        error::is_unique_violation,
        model::{
            news::{NewsListQuery, NewsParams},
            pagination::PageParams,
        },
    },
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod slug_exists;
mod update;

fn params(title: &str) -> NewsParams {
    NewsParams::from_dto(NewsInputDto {
        title: title.to_string(),
        content: "Some **markdown**.".to_string(),
        ..Default::default()
    })
    .unwrap()
}
