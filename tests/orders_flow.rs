mod common;

use ecommerce_store::{
    audit::list_audit_for,
    dto::{
        catalog::NewCoupon,
        orders::{CheckoutRequest, CreateOrderRequest},
    },
    error::AppError,
    models::{OrderStatus, PaymentMethod, PaymentStatus, ShipmentStatus},
    services::{
        cart_service, coupon_service, inventory_service, order_service, payment_service,
        shipment_service,
    },
};

#[tokio::test]
async fn create_order_records_total_upfront_payment_and_audit() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "buyer@example.com").await?;

    let order = order_service::create_order(
        &state,
        CreateOrderRequest {
            user_id: user.id,
            shipping_address_id: None,
            billing_address_id: None,
            subtotal: 149_800,
            shipping_fee: 10_000,
            tax: 5_000,
            discount: 0,
            coupon_id: None,
        },
    )
    .await?;
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total, 164_800);

    let payments = payment_service::list_payments(&state, order.id).await?;
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].amount, 82_400);
    assert_eq!(payments[0].status, PaymentStatus::Pending);
    assert_eq!(payments[0].method, PaymentMethod::Card);

    let audit = list_audit_for(&state.orm, "orders", order.id).await?;
    assert_eq!(audit.len(), 1);
    assert_eq!(audit[0].action, "order_created");
    let details = audit[0].details.clone().expect("audit details");
    assert_eq!(details["total"], 164_800);
    Ok(())
}

#[tokio::test]
async fn order_for_unknown_user_is_a_reference_violation() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let err = order_service::create_order(
        &state,
        CreateOrderRequest {
            user_id: uuid::Uuid::new_v4(),
            shipping_address_id: None,
            billing_address_id: None,
            subtotal: 1_000,
            shipping_fee: 0,
            tax: 0,
            discount: 0,
            coupon_id: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::ReferenceViolation(_)), "got {err:?}");
    Ok(())
}

#[tokio::test]
async fn status_updates_follow_the_lifecycle() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "buyer@example.com").await?;
    let order = common::create_order(&state, &user, 1_000).await?;

    let err = order_service::update_order_status(&state, order.id, OrderStatus::Shipped, None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition { entity: "order", .. }));

    for next in [OrderStatus::Paid, OrderStatus::Processing, OrderStatus::Shipped] {
        let updated = order_service::update_order_status(&state, order.id, next, None).await?;
        assert_eq!(updated.status, next);
    }

    let err = order_service::cancel_order(&state, order.id, None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition { .. }));

    let (orders, total) =
        order_service::list_orders_for_user(&state, user.id, Some(OrderStatus::Shipped), 1, 10)
            .await?;
    assert_eq!(total, 1);
    assert_eq!(orders[0].id, order.id);
    Ok(())
}

#[tokio::test]
async fn checkout_turns_cart_into_order_and_cancel_restocks() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "buyer@example.com").await?;
    let mug = common::create_product(&state, "MUG", 1_200, Some(10)).await?;
    let hoodie = common::create_product(&state, "HOODIE", 5_500, Some(4)).await?;

    coupon_service::create_coupon(
        &state,
        NewCoupon {
            code: "welcome".into(),
            description: None,
            amount_off: 1_000,
            expires_at: None,
        },
    )
    .await?;

    cart_service::add_to_cart(&state, user.id, mug.id, 2).await?;
    cart_service::add_to_cart(&state, user.id, hoodie.id, 1).await?;

    let checkout = order_service::checkout_cart(
        &state,
        CheckoutRequest {
            user_id: user.id,
            shipping_address_id: None,
            billing_address_id: None,
            shipping_fee: 500,
            tax: 0,
            coupon_code: Some("WELCOME".into()),
        },
    )
    .await?;

    // 2 x 1200 + 5500 + 500 shipping - 1000 coupon
    assert_eq!(checkout.order.subtotal, 7_900);
    assert_eq!(checkout.order.discount, 1_000);
    assert_eq!(checkout.order.total, 7_400);
    assert_eq!(checkout.items.len(), 2);
    assert_eq!(checkout.payments[0].amount, 3_700);
    let lines_total: i64 = checkout.items.iter().map(|item| item.line_total).sum();
    assert_eq!(lines_total, checkout.order.subtotal);

    assert!(cart_service::list_cart(&state, user.id).await?.items.is_empty());
    assert_eq!(inventory_service::get_inventory(&state, mug.id).await?.quantity, 8);
    assert_eq!(inventory_service::get_inventory(&state, hoodie.id).await?.quantity, 3);

    let cancelled = order_service::cancel_order(&state, checkout.order.id, Some(user.id)).await?;
    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    assert_eq!(inventory_service::get_inventory(&state, mug.id).await?.quantity, 10);
    assert_eq!(inventory_service::get_inventory(&state, hoodie.id).await?.quantity, 4);
    Ok(())
}

#[tokio::test]
async fn status_update_cannot_bypass_restocking_cancel() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "buyer@example.com").await?;
    let mug = common::create_product(&state, "MUG", 1_200, Some(10)).await?;
    cart_service::add_to_cart(&state, user.id, mug.id, 3).await?;

    let checkout = order_service::checkout_cart(
        &state,
        CheckoutRequest {
            user_id: user.id,
            shipping_address_id: None,
            billing_address_id: None,
            shipping_fee: 0,
            tax: 0,
            coupon_code: None,
        },
    )
    .await?;
    assert_eq!(inventory_service::get_inventory(&state, mug.id).await?.quantity, 7);

    let err = order_service::update_order_status(
        &state,
        checkout.order.id,
        OrderStatus::Cancelled,
        None,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)), "got {err:?}");

    let order = order_service::get_order_with_items(&state, checkout.order.id).await?;
    assert_eq!(order.order.status, OrderStatus::Pending);
    assert_eq!(inventory_service::get_inventory(&state, mug.id).await?.quantity, 7);

    order_service::cancel_order(&state, checkout.order.id, None).await?;
    assert_eq!(inventory_service::get_inventory(&state, mug.id).await?.quantity, 10);
    Ok(())
}

#[tokio::test]
async fn checkout_refuses_a_subtotal_that_overflows() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "buyer@example.com").await?;
    let pricey = common::create_product(&state, "PRICEY", i64::MAX / 2 + 1, Some(5)).await?;
    cart_service::add_to_cart(&state, user.id, pricey.id, 2).await?;

    let err = order_service::checkout_cart(
        &state,
        CheckoutRequest {
            user_id: user.id,
            shipping_address_id: None,
            billing_address_id: None,
            shipping_fee: 0,
            tax: 0,
            coupon_code: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)), "got {err:?}");

    let (orders, _) = order_service::list_orders_for_user(&state, user.id, None, 1, 10).await?;
    assert!(orders.is_empty());
    assert_eq!(inventory_service::get_inventory(&state, pricey.id).await?.quantity, 5);
    Ok(())
}

#[tokio::test]
async fn checkout_rolls_back_when_a_line_is_short() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "buyer@example.com").await?;
    let mug = common::create_product(&state, "MUG", 1_200, Some(10)).await?;
    let hoodie = common::create_product(&state, "HOODIE", 5_500, Some(1)).await?;

    cart_service::add_to_cart(&state, user.id, mug.id, 2).await?;
    cart_service::add_to_cart(&state, user.id, hoodie.id, 2).await?;

    let err = order_service::checkout_cart(
        &state,
        CheckoutRequest {
            user_id: user.id,
            shipping_address_id: None,
            billing_address_id: None,
            shipping_fee: 0,
            tax: 0,
            coupon_code: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::InsufficientStock { .. }));

    let (orders, total) = order_service::list_orders_for_user(&state, user.id, None, 1, 10).await?;
    assert!(orders.is_empty());
    assert_eq!(total, 0);
    assert_eq!(inventory_service::get_inventory(&state, mug.id).await?.quantity, 10);
    assert_eq!(cart_service::list_cart(&state, user.id).await?.items.len(), 2);
    Ok(())
}

#[tokio::test]
async fn payment_and_single_shipment_lifecycle() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "buyer@example.com").await?;
    let order = common::create_order(&state, &user, 2_000).await?;

    let upfront = payment_service::list_payments(&state, order.id).await?.remove(0);
    let paid = payment_service::update_payment_status(
        &state,
        upfront.id,
        PaymentStatus::Paid,
        Some("txn-123".into()),
        None,
    )
    .await?;
    assert!(paid.paid_at.is_some());
    assert_eq!(paid.transaction_ref.as_deref(), Some("txn-123"));

    let err = payment_service::update_payment_status(&state, paid.id, PaymentStatus::Failed, None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition { entity: "payment", .. }));

    let balance = payment_service::add_payment(&state, order.id, 1_000, PaymentMethod::BankTransfer).await?;
    payment_service::update_payment_status(&state, balance.id, PaymentStatus::Paid, None, None).await?;
    assert_eq!(payment_service::amount_paid(&state, order.id).await?, 2_000);

    let shipment =
        shipment_service::create_shipment(&state, order.id, Some("DHL".into()), None).await?;
    assert_eq!(shipment.status, ShipmentStatus::LabelCreated);

    let err = shipment_service::create_shipment(&state, order.id, None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)), "got {err:?}");

    let shipped =
        shipment_service::update_shipment_status(&state, shipment.id, ShipmentStatus::Shipped, None)
            .await?;
    assert!(shipped.shipped_at.is_some());

    let err = shipment_service::update_shipment_status(
        &state,
        shipment.id,
        ShipmentStatus::Delivered,
        None,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition { entity: "shipment", .. }));

    for next in [
        ShipmentStatus::InTransit,
        ShipmentStatus::OutForDelivery,
        ShipmentStatus::Delivered,
    ] {
        shipment_service::update_shipment_status(&state, shipment.id, next, None).await?;
    }
    let delivered = shipment_service::get_shipment_for_order(&state, order.id).await?;
    assert!(delivered.delivered_at.is_some());
    Ok(())
}
