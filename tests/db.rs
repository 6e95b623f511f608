use ecommerce_store::{
    config::AppConfig,
    db::{connect, run_migrations},
    services::report_service,
    state::AppState,
};

#[tokio::test]
async fn configured_connection_applies_migrations() -> anyhow::Result<()> {
    let config = AppConfig {
        database_url: std::env::var("TEST_DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".into()),
        max_connections: 1,
        sqlx_logging: true,
    };

    let orm = connect(&config).await?;
    run_migrations(&orm).await?;
    // A second run finds nothing pending.
    run_migrations(&orm).await?;

    let state = AppState::new(orm);
    report_service::stock_status(&state, false).await?;
    Ok(())
}
