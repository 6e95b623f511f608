use std::time::Duration;

use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use crate::{config::AppConfig, migration::Migrator};

pub type OrmConn = DatabaseConnection;

/// Create a SeaORM connection with statement logging off.
pub async fn create_orm_conn(database_url: &str, max_connections: u32) -> Result<DatabaseConnection> {
    open(database_url, max_connections, false).await
}

/// Same as [`create_orm_conn`] but driven by the loaded configuration.
pub async fn connect(config: &AppConfig) -> Result<DatabaseConnection> {
    open(&config.database_url, config.max_connections, config.sqlx_logging).await
}

async fn open(database_url: &str, max_connections: u32, sqlx_logging: bool) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(30))
        .sqlx_logging(sqlx_logging);
    let conn = Database::connect(options).await?;
    Ok(conn)
}

/// Apply every pending migration in order.
pub async fn run_migrations(conn: &DatabaseConnection) -> Result<()> {
    Migrator::up(conn, None).await?;
    Ok(())
}
