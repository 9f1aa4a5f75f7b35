pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_antinuke_settings_table;
mod m20260301_000002_create_antinuke_whitelist_table;
mod m20260301_000003_create_antinuke_action_table;
mod m20260301_000004_create_antinuke_offense_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_antinuke_settings_table::Migration),
            Box::new(m20260301_000002_create_antinuke_whitelist_table::Migration),
            Box::new(m20260301_000003_create_antinuke_action_table::Migration),
            Box::new(m20260301_000004_create_antinuke_offense_table::Migration),
        ]
    }
}
