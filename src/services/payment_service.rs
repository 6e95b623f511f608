use chrono::Utc;
use sea_orm::sea_query::LockType;
use sea_orm::{
    ActiveEnum, ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Set, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    audit::log_audit,
    entity::{
        orders::Entity as Orders,
        payments::{ActiveModel as PaymentActive, Column as PaymentCol, Entity as Payments, Model as PaymentModel},
    },
    error::{AppError, AppResult},
    models::{PaymentMethod, PaymentStatus},
    state::AppState,
};

/// Record a further pending payment against an order (for example the balance after the upfront half).
pub async fn add_payment(
    state: &AppState,
    order_id: Uuid,
    amount: i64,
    method: PaymentMethod,
) -> AppResult<PaymentModel> {
    if amount < 0 {
        return Err(AppError::ConstraintViolation(
            "payment amount must not be negative".into(),
        ));
    }

    let order = Orders::find_by_id(order_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("order"))?;
    if order.status.is_terminal() {
        return Err(AppError::ConstraintViolation(format!(
            "order {} is closed",
            order.id
        )));
    }

    let now = Utc::now();
    let payment = PaymentActive {
        id: Set(Uuid::new_v4()),
        order_id: Set(order.id),
        amount: Set(amount),
        method: Set(method),
        status: Set(PaymentStatus::Pending),
        transaction_ref: Set(None),
        paid_at: Set(None),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(order_id = %order.id, payment_id = %payment.id, amount, "payment recorded");
    Ok(payment)
}

/// Move a payment along its lifecycle. Marking it paid stamps `paid_at` and the gateway reference.
pub async fn update_payment_status(
    state: &AppState,
    payment_id: Uuid,
    next: PaymentStatus,
    transaction_ref: Option<String>,
    actor_id: Option<Uuid>,
) -> AppResult<PaymentModel> {
    let txn = state.orm.begin().await?;

    let payment = Payments::find_by_id(payment_id)
        .lock(LockType::Update)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound("payment"))?;

    let current = payment.status;
    if !current.can_transition_to(next) {
        return Err(AppError::InvalidTransition {
            entity: "payment",
            from: current.to_value(),
            to: next.to_value(),
        });
    }

    let now = Utc::now();
    let mut active: PaymentActive = payment.into();
    active.status = Set(next);
    active.updated_at = Set(now.into());
    if next == PaymentStatus::Paid {
        active.paid_at = Set(Some(now.into()));
    }
    if transaction_ref.is_some() {
        active.transaction_ref = Set(transaction_ref);
    }
    let payment = active.update(&txn).await?;

    log_audit(
        &txn,
        "payments",
        Some(payment.id),
        "payment_status_update",
        actor_id,
        Some(serde_json::json!({ "from": current, "to": next, "order_id": payment.order_id })),
    )
    .await?;
    txn.commit().await?;

    tracing::info!(payment_id = %payment.id, from = ?current, to = ?next, "payment status updated");
    Ok(payment)
}

pub async fn list_payments(state: &AppState, order_id: Uuid) -> AppResult<Vec<PaymentModel>> {
    let rows = Payments::find()
        .filter(PaymentCol::OrderId.eq(order_id))
        .order_by_asc(PaymentCol::CreatedAt)
        .all(&state.orm)
        .await?;
    Ok(rows)
}

/// Sum of the order's payments that reached `paid`.
pub async fn amount_paid(state: &AppState, order_id: Uuid) -> AppResult<i64> {
    let paid = list_payments(state, order_id)
        .await?
        .into_iter()
        .filter(|payment| payment.status == PaymentStatus::Paid)
        .map(|payment| payment.amount)
        .sum();
    Ok(paid)
}
