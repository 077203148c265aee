use crate::{
    model::arcana::{ArcanaInputDto, ArcanaPatchDto},
    server::{
        data::arcana::ArcanaRepository,
        model::arcana::{ArcanaListQuery, ArcanaParams, ArcanaPatch},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod list;
mod patch;
