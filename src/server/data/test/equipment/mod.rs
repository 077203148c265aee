use crate::{
    model::equipment::EquipmentInputDto,
    server::{
        data::equipment::EquipmentRepository,
        model::equipment::{EquipmentFilter, EquipmentParams},
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod list;

fn params(name: &str, build_path: &[i32], builds_into: &[i32]) -> EquipmentParams {
    EquipmentParams::from_dto(EquipmentInputDto {
        name: name.to_string(),
        image: "/uploads/item.png".to_string(),
        description: "Sharp.".to_string(),
        category: "Attack".to_string(),
        tier: Some("Epic".to_string()),
        price: Some(1200),
        build_path: build_path.to_vec(),
        builds_into: builds_into.to_vec(),
        ..Default::default()
    })
    .unwrap()
}
