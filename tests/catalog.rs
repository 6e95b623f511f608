mod common;

use ecommerce_store::{
    dto::{
        catalog::{NewCategory, NewReview},
        orders::NewOrderItem,
    },
    entity::{inventory::Entity as Inventory, product_categories::Entity as ProductCategories},
    error::AppError,
    services::{catalog_service, inventory_service, review_service, wishlist_service},
    state::AppState,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use uuid::Uuid;

async fn category(state: &AppState, slug: &str, parent_id: Option<Uuid>) -> anyhow::Result<Uuid> {
    let category = catalog_service::create_category(
        state,
        NewCategory {
            name: slug.to_uppercase(),
            slug: slug.to_owned(),
            parent_id,
        },
    )
    .await?;
    Ok(category.id)
}

#[tokio::test]
async fn category_tree_rejects_cycles() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let root = category(&state, "apparel", None).await?;
    let mid = category(&state, "tops", Some(root)).await?;
    let leaf = category(&state, "hoodies", Some(mid)).await?;

    let ancestors = catalog_service::category_ancestors(&state.orm, leaf).await?;
    let slugs: Vec<_> = ancestors.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, ["tops", "apparel"]);

    let err = catalog_service::set_category_parent(&state, root, Some(leaf))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)));

    let err = catalog_service::set_category_parent(&state, mid, Some(mid))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)));

    let moved = catalog_service::set_category_parent(&state, leaf, Some(root)).await?;
    assert_eq!(moved.parent_id, Some(root));

    let err = catalog_service::create_category(
        &state,
        NewCategory {
            name: "Orphan".into(),
            slug: "orphan".into(),
            parent_id: Some(Uuid::new_v4()),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    Ok(())
}

#[tokio::test]
async fn product_creation_links_categories_and_stock() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let cat = category(&state, "kitchen", None).await?;

    let product = catalog_service::create_product(
        &state,
        ecommerce_store::dto::catalog::NewProduct {
            sku: " MUG-1 ".into(),
            name: "Mug".into(),
            description: None,
            price: 1_200,
            initial_stock: Some(12),
            reorder_level: None,
            category_ids: vec![cat],
        },
        None,
    )
    .await?;
    assert_eq!(product.sku, "MUG-1");

    let stock = Inventory::find_by_id(product.id)
        .one(&state.orm)
        .await?
        .expect("inventory row");
    assert_eq!(stock.quantity, 12);
    assert_eq!(stock.reorder_level, catalog_service::DEFAULT_REORDER_LEVEL);
    assert_eq!(ProductCategories::find().count(&state.orm).await?, 1);

    let err = common::create_product(&state, "MUG-1", 100, None)
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<AppError>(),
        Some(AppError::ConstraintViolation(_))
    ));
    Ok(())
}

#[tokio::test]
async fn images_are_appended_in_order() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let product = common::create_product(&state, "SKU-1", 100, None).await?;

    catalog_service::add_product_image(&state, product.id, "https://img/1.png", None).await?;
    catalog_service::add_product_image(&state, product.id, "https://img/2.png", Some("back")).await?;

    let images = catalog_service::list_product_images(&state, product.id).await?;
    let positions: Vec<_> = images.iter().map(|i| (i.position, i.url.as_str())).collect();
    assert_eq!(positions, [(0, "https://img/1.png"), (1, "https://img/2.png")]);
    Ok(())
}

#[tokio::test]
async fn ordered_products_cannot_be_deleted() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "buyer@example.com").await?;
    let sold = common::create_product(&state, "SOLD", 100, Some(5)).await?;
    let unsold = common::create_product(&state, "UNSOLD", 100, Some(5)).await?;
    let order = common::create_order(&state, &user, 100).await?;

    inventory_service::add_order_item(
        &state,
        NewOrderItem {
            order_id: order.id,
            product_id: sold.id,
            quantity: 1,
            unit_price: 100,
        },
    )
    .await?;

    let err = catalog_service::delete_product(&state, sold.id, None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ReferenceViolation(_)), "got {err:?}");

    catalog_service::delete_product(&state, unsold.id, None).await?;
    assert!(Inventory::find_by_id(unsold.id).one(&state.orm).await?.is_none());

    let inactive = catalog_service::set_product_active(&state, sold.id, false).await?;
    assert!(!inactive.active);
    Ok(())
}

#[tokio::test]
async fn one_review_per_user_and_product() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let alice = common::create_user(&state, "alice@example.com").await?;
    let bob = common::create_user(&state, "bob@example.com").await?;
    let product = common::create_product(&state, "SKU-1", 100, None).await?;

    let review = |user_id, rating| NewReview {
        product_id: product.id,
        user_id,
        rating,
        title: None,
        body: None,
    };

    review_service::create_review(&state, review(alice.id, 5)).await?;
    review_service::create_review(&state, review(bob.id, 4)).await?;

    let err = review_service::create_review(&state, review(alice.id, 1))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)), "got {err:?}");

    let err = review_service::create_review(&state, review(bob.id, 6))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)));

    assert_eq!(review_service::list_reviews(&state, product.id).await?.len(), 2);
    assert_eq!(review_service::average_rating(&state, product.id).await?, Some(4.5));
    Ok(())
}

#[tokio::test]
async fn wishlist_holds_each_product_once() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "buyer@example.com").await?;
    let mug = common::create_product(&state, "MUG", 100, None).await?;
    let hoodie = common::create_product(&state, "HOODIE", 100, None).await?;

    let list = wishlist_service::create_wishlist(&state, user.id, "Birthday").await?;
    wishlist_service::add_to_wishlist(&state, list.id, mug.id).await?;
    wishlist_service::add_to_wishlist(&state, list.id, mug.id).await?;
    wishlist_service::add_to_wishlist(&state, list.id, hoodie.id).await?;
    assert_eq!(wishlist_service::list_wishlist_products(&state, list.id).await?.len(), 2);

    wishlist_service::remove_from_wishlist(&state, list.id, mug.id).await?;
    let remaining = wishlist_service::list_wishlist_products(&state, list.id).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, hoodie.id);

    let err = wishlist_service::create_wishlist(&state, user.id, "Birthday")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)));
    Ok(())
}
