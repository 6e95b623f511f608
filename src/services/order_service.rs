use chrono::Utc;
use sea_orm::sea_query::LockType;
use sea_orm::{
    ActiveEnum, ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::orders::{CheckoutRequest, CreateOrderRequest, NewOrderItem, OrderWithItems},
    entity::{
        order_items::{Column as OrderItemCol, Entity as OrderItems},
        orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, Model as OrderModel},
        payments::{ActiveModel as PaymentActive, Column as PaymentCol, Entity as Payments},
    },
    error::{AppError, AppResult},
    models::{DEFAULT_PAYMENT_METHOD, OrderStatus, PaymentStatus},
    services::{cart_service, coupon_service, inventory_service},
    state::AppState,
};

/// `subtotal + shipping_fee + tax - discount`, rejecting negative inputs and a negative result.
pub fn order_total(subtotal: i64, shipping_fee: i64, tax: i64, discount: i64) -> AppResult<i64> {
    for (name, value) in [
        ("subtotal", subtotal),
        ("shipping_fee", shipping_fee),
        ("tax", tax),
        ("discount", discount),
    ] {
        if value < 0 {
            return Err(AppError::ConstraintViolation(format!(
                "{name} must not be negative"
            )));
        }
    }

    let total = subtotal
        .checked_add(shipping_fee)
        .and_then(|v| v.checked_add(tax))
        .and_then(|v| v.checked_sub(discount))
        .ok_or_else(|| AppError::ConstraintViolation("order total overflows".into()))?;
    if total < 0 {
        return Err(AppError::ConstraintViolation(
            "discount exceeds the order amount".into(),
        ));
    }
    Ok(total)
}

/// Half of a non-negative total in minor units, rounding a half cent up.
pub fn upfront_payment(total: i64) -> i64 {
    total / 2 + total % 2
}

/// Create a pending order, its half-upfront payment and the audit entry, atomically.
pub async fn create_order(state: &AppState, payload: CreateOrderRequest) -> AppResult<OrderModel> {
    let txn = state.orm.begin().await?;
    let order = create_order_in(&txn, &payload).await?;
    txn.commit().await?;

    tracing::info!(order_id = %order.id, user_id = %order.user_id, total = order.total, "order created");
    Ok(order)
}

pub(crate) async fn create_order_in(
    txn: &DatabaseTransaction,
    payload: &CreateOrderRequest,
) -> AppResult<OrderModel> {
    let total = order_total(
        payload.subtotal,
        payload.shipping_fee,
        payload.tax,
        payload.discount,
    )?;
    let now = Utc::now();

    let order = OrderActive {
        id: Set(Uuid::new_v4()),
        user_id: Set(payload.user_id),
        shipping_address_id: Set(payload.shipping_address_id),
        billing_address_id: Set(payload.billing_address_id),
        coupon_id: Set(payload.coupon_id),
        status: Set(OrderStatus::Pending),
        subtotal: Set(payload.subtotal),
        shipping_fee: Set(payload.shipping_fee),
        tax: Set(payload.tax),
        discount: Set(payload.discount),
        total: Set(total),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(txn)
    .await?;

    let amount = upfront_payment(total);
    let payment = PaymentActive {
        id: Set(Uuid::new_v4()),
        order_id: Set(order.id),
        amount: Set(amount),
        method: Set(DEFAULT_PAYMENT_METHOD),
        status: Set(PaymentStatus::Pending),
        transaction_ref: Set(None),
        paid_at: Set(None),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(txn)
    .await?;

    log_audit(
        txn,
        "orders",
        Some(order.id),
        "order_created",
        Some(payload.user_id),
        Some(serde_json::json!({
            "total": total,
            "payment_id": payment.id,
            "upfront_amount": amount,
        })),
    )
    .await?;

    Ok(order)
}

pub async fn get_order_with_items(state: &AppState, order_id: Uuid) -> AppResult<OrderWithItems> {
    let order = Orders::find_by_id(order_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("order"))?;

    let items = OrderItems::find()
        .filter(OrderItemCol::OrderId.eq(order.id))
        .order_by_asc(OrderItemCol::CreatedAt)
        .all(&state.orm)
        .await?;

    let payments = Payments::find()
        .filter(PaymentCol::OrderId.eq(order.id))
        .order_by_asc(PaymentCol::CreatedAt)
        .all(&state.orm)
        .await?;

    Ok(OrderWithItems {
        order,
        items,
        payments,
    })
}

/// Newest first. Returns the page and the total number of the user's orders.
pub async fn list_orders_for_user(
    state: &AppState,
    user_id: Uuid,
    status: Option<OrderStatus>,
    page: u64,
    per_page: u64,
) -> AppResult<(Vec<OrderModel>, u64)> {
    let page = page.max(1);
    let per_page = per_page.clamp(1, 100);

    let mut finder = Orders::find().filter(OrderCol::UserId.eq(user_id));
    if let Some(status) = status {
        finder = finder.filter(OrderCol::Status.eq(status));
    }
    let finder = finder.order_by_desc(OrderCol::CreatedAt);

    let total = finder.clone().count(&state.orm).await?;
    let orders = finder
        .limit(per_page)
        .offset((page - 1) * per_page)
        .all(&state.orm)
        .await?;

    Ok((orders, total))
}

/// Move an order along its lifecycle. Cancellation goes through [`cancel_order`], which also restocks.
pub async fn update_order_status(
    state: &AppState,
    order_id: Uuid,
    next: OrderStatus,
    actor_id: Option<Uuid>,
) -> AppResult<OrderModel> {
    if next == OrderStatus::Cancelled {
        return Err(AppError::ConstraintViolation(
            "orders are cancelled with cancel_order so their stock is returned".into(),
        ));
    }

    let txn = state.orm.begin().await?;
    let order = transition_in(&txn, order_id, next, actor_id).await?;
    txn.commit().await?;
    Ok(order)
}

async fn transition_in(
    txn: &DatabaseTransaction,
    order_id: Uuid,
    next: OrderStatus,
    actor_id: Option<Uuid>,
) -> AppResult<OrderModel> {
    let order = Orders::find_by_id(order_id)
        .lock(LockType::Update)
        .one(txn)
        .await?
        .ok_or(AppError::NotFound("order"))?;

    let current = order.status;
    if !current.can_transition_to(next) {
        return Err(AppError::InvalidTransition {
            entity: "order",
            from: current.to_value(),
            to: next.to_value(),
        });
    }

    let mut active: OrderActive = order.into();
    active.status = Set(next);
    active.updated_at = Set(Utc::now().into());
    let order = active.update(txn).await?;

    log_audit(
        txn,
        "orders",
        Some(order.id),
        "order_status_update",
        actor_id,
        Some(serde_json::json!({ "from": current, "to": next })),
    )
    .await?;

    tracing::info!(order_id = %order.id, from = ?current, to = ?next, "order status updated");
    Ok(order)
}

/// Cancel an order and put every line's quantity back into stock.
pub async fn cancel_order(
    state: &AppState,
    order_id: Uuid,
    actor_id: Option<Uuid>,
) -> AppResult<OrderModel> {
    let txn = state.orm.begin().await?;
    let order = transition_in(&txn, order_id, OrderStatus::Cancelled, actor_id).await?;

    let items = OrderItems::find()
        .filter(OrderItemCol::OrderId.eq(order.id))
        .all(&txn)
        .await?;
    for item in &items {
        inventory_service::adjust_stock_in(&txn, item.product_id, item.quantity).await?;
    }

    log_audit(
        &txn,
        "orders",
        Some(order.id),
        "order_restocked",
        actor_id,
        Some(serde_json::json!({ "lines": items.len() })),
    )
    .await?;
    txn.commit().await?;

    Ok(order)
}

/// Turn the user's cart into an order: one unit of work covering the order, its payment,
/// every line's stock admission and the emptied cart.
pub async fn checkout_cart(state: &AppState, payload: CheckoutRequest) -> AppResult<OrderWithItems> {
    let txn = state.orm.begin().await?;

    let cart = cart_service::load_cart_in(&txn, payload.user_id)
        .await?
        .ok_or_else(|| AppError::ConstraintViolation("cart is empty".into()))?;
    if cart.items.is_empty() {
        return Err(AppError::ConstraintViolation("cart is empty".into()));
    }
    if let Some(line) = cart.items.iter().find(|line| !line.product.active) {
        return Err(AppError::ConstraintViolation(format!(
            "product {} is not available",
            line.product.sku
        )));
    }

    let subtotal = cart.subtotal()?;
    let (coupon_id, discount) = match payload.coupon_code.as_deref() {
        Some(code) => {
            let coupon = coupon_service::find_active_coupon_in(&txn, code).await?;
            (Some(coupon.id), coupon_service::discount_for(&coupon, subtotal))
        }
        None => (None, 0),
    };

    let order = create_order_in(
        &txn,
        &CreateOrderRequest {
            user_id: payload.user_id,
            shipping_address_id: payload.shipping_address_id,
            billing_address_id: payload.billing_address_id,
            subtotal,
            shipping_fee: payload.shipping_fee,
            tax: payload.tax,
            discount,
            coupon_id,
        },
    )
    .await?;

    let mut items = Vec::with_capacity(cart.items.len());
    for line in &cart.items {
        let item = inventory_service::add_order_item_in(
            &txn,
            &NewOrderItem {
                order_id: order.id,
                product_id: line.product.id,
                quantity: line.quantity,
                unit_price: line.product.price,
            },
        )
        .await?;
        items.push(item);
    }

    cart_service::clear_cart_in(&txn, cart.cart_id).await?;

    let payments = Payments::find()
        .filter(PaymentCol::OrderId.eq(order.id))
        .all(&txn)
        .await?;

    txn.commit().await?;

    tracing::info!(order_id = %order.id, lines = items.len(), total = order.total, "checkout completed");
    Ok(OrderWithItems {
        order,
        items,
        payments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_adds_fees_and_subtracts_discount() {
        assert_eq!(order_total(149_800, 10_000, 5_000, 0).unwrap(), 164_800);
        assert_eq!(order_total(10_000, 500, 0, 2_500).unwrap(), 8_000);
    }

    #[test]
    fn total_rejects_negative_inputs_and_results() {
        assert!(matches!(
            order_total(-1, 0, 0, 0),
            Err(AppError::ConstraintViolation(_))
        ));
        assert!(matches!(
            order_total(100, 0, 0, 101),
            Err(AppError::ConstraintViolation(_))
        ));
    }

    #[test]
    fn upfront_payment_is_half_rounded_up() {
        assert_eq!(upfront_payment(164_800), 82_400);
        assert_eq!(upfront_payment(1_001), 501);
        assert_eq!(upfront_payment(1), 1);
        assert_eq!(upfront_payment(0), 0);
    }
}
