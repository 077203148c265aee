use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000005_create_equipment_table::Equipment;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EquipmentBuildLink::Table)
                    .if_not_exists()
                    .col(pk_auto(EquipmentBuildLink::Id))
                    .col(integer(EquipmentBuildLink::EquipmentId))
                    .col(integer(EquipmentBuildLink::LinkedId))
                    .col(string(EquipmentBuildLink::Kind))
                    .col(integer(EquipmentBuildLink::Position))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_equipment_build_link_equipment_id")
                            .from(EquipmentBuildLink::Table, EquipmentBuildLink::EquipmentId)
                            .to(Equipment::Table, Equipment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_equipment_build_link_linked_id")
                            .from(EquipmentBuildLink::Table, EquipmentBuildLink::LinkedId)
                            .to(Equipment::Table, Equipment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EquipmentBuildLink::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EquipmentBuildLink {
    Table,
    Id,
    EquipmentId,
    LinkedId,
    Kind,
    Position,
}
