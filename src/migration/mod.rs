pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_customer_tables;
mod m20250101_000002_create_catalog_tables;
mod m20250101_000003_create_cart_tables;
mod m20250101_000004_create_order_tables;
mod m20250101_000005_create_engagement_tables;
mod m20250101_000006_create_audit_logs_table;
mod m20250101_000007_create_reporting_views;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_customer_tables::Migration),
            Box::new(m20250101_000002_create_catalog_tables::Migration),
            Box::new(m20250101_000003_create_cart_tables::Migration),
            Box::new(m20250101_000004_create_order_tables::Migration),
            Box::new(m20250101_000005_create_engagement_tables::Migration),
            Box::new(m20250101_000006_create_audit_logs_table::Migration),
            Box::new(m20250101_000007_create_reporting_views::Migration),
        ]
    }
}
