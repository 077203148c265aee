use crate::server::data::health::HealthRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod table_names;
