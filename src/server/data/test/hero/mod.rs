use crate::{
    model::hero::{HeroInputDto, MatchupInputDto, SkillDto},
    server::{
        data::hero::HeroRepository,
        error::{is_unique_violation, AppError},
        model::{
            hero::{HeroListQuery, HeroParams, HeroSort, MetaTier},
            pagination::PageParams,
        },
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_slug;
mod get_paginated;
mod update;

/// Builds valid hero params with the given name and matchups.
fn params(name: &str, allies: &[i32], counters: &[i32]) -> HeroParams {
    let matchups = |ids: &[i32]| {
        ids.iter()
            .map(|&hero| MatchupInputDto {
                hero,
                description: format!("note {}", hero),
            })
            .collect()
    };

    HeroParams::from_dto(HeroInputDto {
        name: name.to_string(),
        title: "The Tester".to_string(),
        image: "/uploads/hero.png".to_string(),
        roles: vec!["Mage".to_string()],
        lanes: vec!["Mid".to_string()],
        meta_tier: "A".to_string(),
        win_rate: Some(50.0),
        pick_rate: Some(10.0),
        ban_rate: Some(1.0),
        skills: vec![SkillDto {
            name: "Bolt".to_string(),
            icon: String::new(),
            description: "Zaps a target.".to_string(),
        }],
        allies: matchups(allies),
        counters: matchups(counters),
        ..Default::default()
    })
    .unwrap()
}
