pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_user_table;
mod m20250601_000002_create_hero_table;
mod m20250601_000003_create_hero_matchup_table;
mod m20250601_000004_create_news_table;
mod m20250601_000005_create_equipment_table;
mod m20250601_000006_create_equipment_build_link_table;
mod m20250601_000007_create_arcana_table;
mod m20250601_000008_create_meta_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_user_table::Migration),
            Box::new(m20250601_000002_create_hero_table::Migration),
            Box::new(m20250601_000003_create_hero_matchup_table::Migration),
            Box::new(m20250601_000004_create_news_table::Migration),
            Box::new(m20250601_000005_create_equipment_table::Migration),
            Box::new(m20250601_000006_create_equipment_build_link_table::Migration),
            Box::new(m20250601_000007_create_arcana_table::Migration),
            Box::new(m20250601_000008_create_meta_table::Migration),
        ]
    }
}
