use ecommerce_store::{
    config::AppConfig,
    db::{connect, run_migrations},
    logging::init_tracing,
    services::report_service,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let orm = connect(&config).await?;
    run_migrations(&orm).await?;
    tracing::info!("schema is up to date");

    let state = AppState::new(orm);

    let stock = report_service::stock_status(&state, false).await?;
    for row in &stock {
        tracing::info!(
            sku = %row.sku,
            quantity = row.quantity,
            reorder_level = row.reorder_level,
            state = %row.stock_state,
            "stock"
        );
    }

    let orders = report_service::order_summaries(&state, None, 20).await?;
    for row in &orders {
        tracing::info!(
            order_id = %row.order_id,
            customer = %row.customer_name,
            total = row.total,
            status = %row.status,
            "order"
        );
    }

    tracing::info!(products = stock.len(), orders = orders.len(), "report finished");
    Ok(())
}
