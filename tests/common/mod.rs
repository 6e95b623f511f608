#![allow(dead_code)]

use ecommerce_store::{
    db::{create_orm_conn, run_migrations},
    dto::{
        catalog::NewProduct,
        customers::NewUser,
        orders::CreateOrderRequest,
    },
    entity::{orders::Model as OrderModel, products::Model as ProductModel, users::Model as UserModel},
    services::{catalog_service, customer_service, order_service},
    state::AppState,
};
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

/// Fresh, migrated store. Uses `TEST_DATABASE_URL` (Postgres, run with `--test-threads=1`)
/// when set, otherwise a private in-memory SQLite database.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let (url, max_connections) = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) => (url, 5),
        // A single connection keeps the in-memory database alive and serializes transactions.
        Err(_) => ("sqlite::memory:".to_owned(), 1),
    };

    let orm = create_orm_conn(&url, max_connections).await?;
    run_migrations(&orm).await?;

    // Clean tables between runs
    if orm.get_database_backend() == DatabaseBackend::Postgres {
        orm.execute(Statement::from_string(
            DatabaseBackend::Postgres,
            "TRUNCATE TABLE audit_logs, wishlist_items, wishlists, reviews, shipments, payments, \
             order_items, orders, coupons, cart_items, carts, inventory, product_images, \
             product_categories, products, categories, addresses, user_roles, roles, users CASCADE",
        ))
        .await?;
    }

    Ok(AppState::new(orm))
}

pub async fn create_user(state: &AppState, email: &str) -> anyhow::Result<UserModel> {
    let user = customer_service::create_user(
        state,
        NewUser {
            email: email.to_owned(),
            password_hash: "dummy".into(),
            first_name: "Test".into(),
            last_name: "User".into(),
            phone: None,
            is_employee: false,
        },
    )
    .await?;
    Ok(user)
}

/// Product with an inventory row holding `stock` units. Pass `None` to leave it unstocked.
pub async fn create_product(
    state: &AppState,
    sku: &str,
    price: i64,
    stock: Option<i32>,
) -> anyhow::Result<ProductModel> {
    let product = catalog_service::create_product(
        state,
        NewProduct {
            sku: sku.to_owned(),
            name: format!("Product {sku}"),
            description: None,
            price,
            initial_stock: stock,
            reorder_level: Some(2),
            category_ids: Vec::new(),
        },
        None,
    )
    .await?;
    Ok(product)
}

pub async fn create_order(state: &AppState, user: &UserModel, subtotal: i64) -> anyhow::Result<OrderModel> {
    let order = order_service::create_order(
        state,
        CreateOrderRequest {
            user_id: user.id,
            shipping_address_id: None,
            billing_address_id: None,
            subtotal,
            shipping_fee: 0,
            tax: 0,
            discount: 0,
            coupon_id: None,
        },
    )
    .await?;
    Ok(order)
}
