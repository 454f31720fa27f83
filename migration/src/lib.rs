pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_game_table;
mod m20250301_000002_create_game_source_table;
mod m20250301_000003_create_destination_table;
mod m20250301_000004_create_game_subscription_table;
mod m20250308_000005_create_release_announcement_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_game_table::Migration),
            Box::new(m20250301_000002_create_game_source_table::Migration),
            Box::new(m20250301_000003_create_destination_table::Migration),
            Box::new(m20250301_000004_create_game_subscription_table::Migration),
            Box::new(m20250308_000005_create_release_announcement_table::Migration),
        ]
    }
}
