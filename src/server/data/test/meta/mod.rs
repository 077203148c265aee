use crate::server::{
    data::meta::MetaRepository,
    model::meta::{MetaParams, MetaPatch},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod list;
