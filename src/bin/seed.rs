use argon2::{
    Argon2, PasswordHasher,
    password_hash::{rand_core::OsRng, SaltString},
};
use ecommerce_store::{
    config::AppConfig,
    db::{connect, run_migrations},
    dto::{
        catalog::{NewCategory, NewCoupon, NewProduct},
        customers::{NewAddress, NewUser},
        orders::CheckoutRequest,
    },
    error::AppError,
    logging::init_tracing,
    services::{cart_service, catalog_service, coupon_service, customer_service, order_service},
    state::AppState,
};
use uuid::Uuid;

const ADMIN_EMAIL: &str = "admin@example.com";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let orm = connect(&config).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;
    let state = AppState::new(orm);

    match customer_service::get_user_by_email(&state, ADMIN_EMAIL).await {
        Ok(_) => {
            tracing::info!("seed data already present, nothing to do");
            return Ok(());
        }
        Err(AppError::NotFound(_)) => {}
        Err(err) => return Err(err.into()),
    }

    let admin_id = ensure_user_with_role(&state, ADMIN_EMAIL, "admin123", "Ada", "Admin", "admin", true).await?;
    let user_id = ensure_user_with_role(&state, "user@example.com", "user123", "Uma", "User", "customer", false).await?;

    let address = customer_service::add_address(
        &state,
        NewAddress {
            user_id,
            label: Some("home".into()),
            line1: "1 Crab Street".into(),
            line2: None,
            city: "Portland".into(),
            region: Some("OR".into()),
            postal_code: "97201".into(),
            country: "us".into(),
            is_default: true,
        },
    )
    .await?;

    let products = seed_catalog(&state, admin_id).await?;

    coupon_service::create_coupon(
        &state,
        NewCoupon {
            code: "welcome10".into(),
            description: Some("10.00 off the first order".into()),
            amount_off: 1_000,
            expires_at: None,
        },
    )
    .await?;

    for (product_id, quantity) in products.iter().take(2).zip([1, 3]) {
        cart_service::add_to_cart(&state, user_id, *product_id, quantity).await?;
    }
    let order = order_service::checkout_cart(
        &state,
        CheckoutRequest {
            user_id,
            shipping_address_id: Some(address.id),
            billing_address_id: Some(address.id),
            shipping_fee: 1_000,
            tax: 500,
            coupon_code: Some("WELCOME10".into()),
        },
    )
    .await?;

    tracing::info!(
        admin_id = %admin_id,
        user_id = %user_id,
        order_id = %order.order.id,
        "seed completed"
    );
    Ok(())
}

async fn ensure_user_with_role(
    state: &AppState,
    email: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
    role: &str,
    is_employee: bool,
) -> anyhow::Result<Uuid> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();

    let user = customer_service::create_user(
        state,
        NewUser {
            email: email.to_owned(),
            password_hash,
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            phone: None,
            is_employee,
        },
    )
    .await?;

    let role = customer_service::ensure_role(state, role, None).await?;
    customer_service::assign_role(state, user.id, role.id).await?;

    tracing::info!(email, role = %role.name, "ensured user");
    Ok(user.id)
}

async fn seed_catalog(state: &AppState, admin_id: Uuid) -> anyhow::Result<Vec<Uuid>> {
    let apparel = catalog_service::create_category(
        state,
        NewCategory {
            name: "Apparel".into(),
            slug: "apparel".into(),
            parent_id: None,
        },
    )
    .await?;
    let hoodies = catalog_service::create_category(
        state,
        NewCategory {
            name: "Hoodies".into(),
            slug: "hoodies".into(),
            parent_id: Some(apparel.id),
        },
    )
    .await?;
    let kitchen = catalog_service::create_category(
        state,
        NewCategory {
            name: "Kitchen".into(),
            slug: "kitchen".into(),
            parent_id: None,
        },
    )
    .await?;

    let catalog = [
        ("HOODIE-01", "Crab Hoodie", "Warm hoodie with an orange crab", 5_500, 50, hoodies.id),
        ("MUG-01", "Crab Mug", "Coffee tastes better with a crab", 1_200, 100, kitchen.id),
        ("STICKER-01", "Sticker Pack", "Decorate your laptop", 500, 3, apparel.id),
    ];

    let mut ids = Vec::with_capacity(catalog.len());
    for (sku, name, description, price, stock, category_id) in catalog {
        if let Some(existing) = catalog_service::find_product_by_sku(state, sku).await? {
            ids.push(existing.id);
            continue;
        }
        let product = catalog_service::create_product(
            state,
            NewProduct {
                sku: sku.into(),
                name: name.into(),
                description: Some(description.into()),
                price,
                initial_stock: Some(stock),
                reorder_level: Some(5),
                category_ids: vec![category_id],
            },
            Some(admin_id),
        )
        .await?;
        catalog_service::add_product_image(
            state,
            product.id,
            &format!("https://cdn.example.com/{}.png", sku.to_lowercase()),
            Some(name),
        )
        .await?;
        ids.push(product.id);
    }

    tracing::info!(products = ids.len(), "seeded catalog");
    Ok(ids)
}
