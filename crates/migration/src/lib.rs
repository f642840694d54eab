//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_batch;
mod m20250301_000002_create_transformation;
mod m20250301_000003_create_logistics;
mod m20250301_000004_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_batch::Migration),
            Box::new(m20250301_000002_create_transformation::Migration),
            Box::new(m20250301_000003_create_logistics::Migration),
            // Indexes should always be applied last
            Box::new(m20250301_000004_add_indexes::Migration),
        ]
    }
}
