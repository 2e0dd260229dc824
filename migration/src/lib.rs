pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_users_table;
mod m20260301_000002_create_tasks_and_bids;
mod m20260301_000003_create_verifications_and_wallets;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_users_table::Migration),
            Box::new(m20260301_000002_create_tasks_and_bids::Migration),
            Box::new(m20260301_000003_create_verifications_and_wallets::Migration),
        ]
    }
}
