mod common;

use ecommerce_store::{
    dto::{catalog::NewReview, customers::NewAddress},
    entity::{addresses::Entity as Addresses, carts::Entity as Carts, reviews::Entity as Reviews},
    error::AppError,
    services::{cart_service, customer_service, review_service, wishlist_service},
};
use sea_orm::{EntityTrait, PaginatorTrait};

fn address(user_id: uuid::Uuid, country: &str) -> NewAddress {
    NewAddress {
        user_id,
        label: Some("home".into()),
        line1: "1 Main St".into(),
        line2: None,
        city: "Springfield".into(),
        region: None,
        postal_code: "12345".into(),
        country: country.into(),
        is_default: true,
    }
}

#[tokio::test]
async fn emails_are_normalised_and_unique() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "  Ada@Example.COM ").await?;
    assert_eq!(user.email, "ada@example.com");

    let found = customer_service::get_user_by_email(&state, "ADA@example.com").await?;
    assert_eq!(found.id, user.id);

    let err = common::create_user(&state, "ada@example.com").await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<AppError>(),
        Some(AppError::ConstraintViolation(_))
    ));

    let err = common::create_user(&state, "not-an-email").await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<AppError>(),
        Some(AppError::ConstraintViolation(_))
    ));
    Ok(())
}

#[tokio::test]
async fn deleting_a_user_cascades_to_owned_rows() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "leaver@example.com").await?;
    let product = common::create_product(&state, "SKU-1", 100, Some(5)).await?;

    let home = customer_service::add_address(&state, address(user.id, "gb")).await?;
    assert_eq!(home.country, "GB");
    cart_service::add_to_cart(&state, user.id, product.id, 1).await?;
    wishlist_service::create_wishlist(&state, user.id, "Later").await?;
    review_service::create_review(
        &state,
        NewReview {
            product_id: product.id,
            user_id: user.id,
            rating: 3,
            title: None,
            body: None,
        },
    )
    .await?;

    customer_service::delete_user(&state, user.id, None).await?;

    assert_eq!(Addresses::find().count(&state.orm).await?, 0);
    assert_eq!(Carts::find().count(&state.orm).await?, 0);
    assert_eq!(Reviews::find().count(&state.orm).await?, 0);
    assert!(matches!(
        customer_service::get_user_by_email(&state, "leaver@example.com").await,
        Err(AppError::NotFound(_))
    ));
    Ok(())
}

#[tokio::test]
async fn users_with_orders_cannot_be_deleted() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "buyer@example.com").await?;
    common::create_order(&state, &user, 1_000).await?;

    let err = customer_service::delete_user(&state, user.id, None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ReferenceViolation(_)), "got {err:?}");

    let still_there = customer_service::get_user_by_email(&state, "buyer@example.com").await?;
    assert_eq!(still_there.id, user.id);
    Ok(())
}

#[tokio::test]
async fn roles_are_assigned_once() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "staff@example.com").await?;

    let admin = customer_service::ensure_role(&state, "admin", Some("Back office")).await?;
    let again = customer_service::ensure_role(&state, "admin", None).await?;
    assert_eq!(admin.id, again.id);
    let support = customer_service::ensure_role(&state, "support", None).await?;

    customer_service::assign_role(&state, user.id, admin.id).await?;
    customer_service::assign_role(&state, user.id, admin.id).await?;
    customer_service::assign_role(&state, user.id, support.id).await?;

    assert_eq!(customer_service::role_names(&state, user.id).await?, ["admin", "support"]);

    let err = customer_service::add_address(&state, address(user.id, "USA"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)));
    assert_eq!(customer_service::list_addresses(&state, user.id).await?.len(), 0);
    Ok(())
}
