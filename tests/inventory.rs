mod common;

use ecommerce_store::{
    dto::orders::NewOrderItem,
    entity::order_items::Entity as OrderItems,
    error::AppError,
    services::inventory_service,
};
use sea_orm::{ConnectionTrait, DatabaseBackend, EntityTrait};

#[tokio::test]
async fn order_line_decrements_stock_and_stores_line_total() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "buyer@example.com").await?;
    let product = common::create_product(&state, "SKU-1", 1_999, Some(10)).await?;
    let order = common::create_order(&state, &user, 5_997).await?;

    let line = inventory_service::add_order_item(
        &state,
        NewOrderItem {
            order_id: order.id,
            product_id: product.id,
            quantity: 3,
            unit_price: 1_999,
        },
    )
    .await?;

    let stored = OrderItems::find_by_id(line.id)
        .one(&state.orm)
        .await?
        .expect("order line persisted");
    assert_eq!(stored.line_total, 5_997);
    assert_eq!(stored.quantity, 3);

    let stock = inventory_service::get_inventory(&state, product.id).await?;
    assert_eq!(stock.quantity, 7);
    Ok(())
}

#[tokio::test]
async fn insufficient_stock_rejects_line_and_keeps_counter() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "buyer@example.com").await?;
    let product = common::create_product(&state, "SKU-1", 500, Some(2)).await?;
    let order = common::create_order(&state, &user, 1_500).await?;

    let err = inventory_service::add_order_item(
        &state,
        NewOrderItem {
            order_id: order.id,
            product_id: product.id,
            quantity: 3,
            unit_price: 500,
        },
    )
    .await
    .unwrap_err();

    match err {
        AppError::InsufficientStock {
            product_id,
            requested,
            available,
        } => {
            assert_eq!(product_id, product.id);
            assert_eq!(requested, 3);
            assert_eq!(available, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let stock = inventory_service::get_inventory(&state, product.id).await?;
    assert_eq!(stock.quantity, 2);
    assert!(OrderItems::find().all(&state.orm).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn missing_inventory_row_is_reported() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "buyer@example.com").await?;
    let product = common::create_product(&state, "SKU-1", 500, None).await?;
    let order = common::create_order(&state, &user, 500).await?;

    let err = inventory_service::add_order_item(
        &state,
        NewOrderItem {
            order_id: order.id,
            product_id: product.id,
            quantity: 1,
            unit_price: 500,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::InventoryNotFound(id) if id == product.id));
    assert!(OrderItems::find().all(&state.orm).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn non_positive_quantity_is_rejected() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "buyer@example.com").await?;
    let product = common::create_product(&state, "SKU-1", 500, Some(5)).await?;
    let order = common::create_order(&state, &user, 500).await?;

    let err = inventory_service::add_order_item(
        &state,
        NewOrderItem {
            order_id: order.id,
            product_id: product.id,
            quantity: 0,
            unit_price: 500,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)));

    let stock = inventory_service::get_inventory(&state, product.id).await?;
    assert_eq!(stock.quantity, 5);
    Ok(())
}

// Two lines race for 6 of 10 units: exactly one may win. Only Postgres contends the row lock;
// the SQLite store runs on a single connection, so its transactions never overlap.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_lines_never_oversell() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    if state.orm.get_database_backend() != DatabaseBackend::Postgres {
        eprintln!("Skipping test: set TEST_DATABASE_URL to a Postgres database to race the row lock.");
        return Ok(());
    }
    let user = common::create_user(&state, "buyer@example.com").await?;
    let product = common::create_product(&state, "SKU-1", 100, Some(10)).await?;
    let order = common::create_order(&state, &user, 1_200).await?;

    let mut handles = Vec::new();
    for _ in 0..2 {
        let state = state.clone();
        let item = NewOrderItem {
            order_id: order.id,
            product_id: product.id,
            quantity: 6,
            unit_price: 100,
        };
        handles.push(tokio::spawn(async move {
            inventory_service::add_order_item(&state, item).await
        }));
    }

    let mut admitted = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await? {
            Ok(_) => admitted += 1,
            Err(AppError::InsufficientStock { .. }) => rejected += 1,
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }
    assert_eq!((admitted, rejected), (1, 1));

    let stock = inventory_service::get_inventory(&state, product.id).await?;
    assert_eq!(stock.quantity, 4);
    assert_eq!(OrderItems::find().all(&state.orm).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn manual_adjustment_cannot_go_negative() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let product = common::create_product(&state, "SKU-1", 100, Some(3)).await?;

    let restocked = inventory_service::adjust_stock(&state, product.id, 7, None).await?;
    assert_eq!(restocked.quantity, 10);

    let err = inventory_service::adjust_stock(&state, product.id, -11, None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InsufficientStock { available: 10, .. }));

    let stock = inventory_service::get_inventory(&state, product.id).await?;
    assert_eq!(stock.quantity, 10);
    Ok(())
}
