use chrono::Utc;
use sea_orm::sea_query::LockType;
use sea_orm::{
    ActiveEnum, ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QuerySelect, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::{
    audit::log_audit,
    entity::{
        orders::Entity as Orders,
        shipments::{ActiveModel as ShipmentActive, Column as ShipmentCol, Entity as Shipments, Model as ShipmentModel},
    },
    error::{AppError, AppResult},
    models::ShipmentStatus,
    state::AppState,
};

/// Open the shipment of an order. An order ships at most once; a second call fails on the
/// unique `order_id` column with `ConstraintViolation`.
pub async fn create_shipment(
    state: &AppState,
    order_id: Uuid,
    carrier: Option<String>,
    tracking_number: Option<String>,
) -> AppResult<ShipmentModel> {
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
    let shipment = ShipmentActive {
        id: Set(Uuid::new_v4()),
        order_id: Set(order.id),
        carrier: Set(carrier),
        tracking_number: Set(tracking_number),
        status: Set(ShipmentStatus::LabelCreated),
        shipped_at: Set(None),
        delivered_at: Set(None),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(order_id = %order.id, shipment_id = %shipment.id, "shipment created");
    Ok(shipment)
}

pub async fn get_shipment_for_order(state: &AppState, order_id: Uuid) -> AppResult<ShipmentModel> {
    Shipments::find()
        .filter(ShipmentCol::OrderId.eq(order_id))
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("shipment"))
}

pub async fn update_shipment_status(
    state: &AppState,
    shipment_id: Uuid,
    next: ShipmentStatus,
    actor_id: Option<Uuid>,
) -> AppResult<ShipmentModel> {
    let txn = state.orm.begin().await?;

    let shipment = Shipments::find_by_id(shipment_id)
        .lock(LockType::Update)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound("shipment"))?;

    let current = shipment.status;
    if !current.can_transition_to(next) {
        return Err(AppError::InvalidTransition {
            entity: "shipment",
            from: current.to_value(),
            to: next.to_value(),
        });
    }

    let now = Utc::now();
    let mut active: ShipmentActive = shipment.into();
    active.status = Set(next);
    active.updated_at = Set(now.into());
    match next {
        ShipmentStatus::Shipped => active.shipped_at = Set(Some(now.into())),
        ShipmentStatus::Delivered => active.delivered_at = Set(Some(now.into())),
        _ => {}
    }
    let shipment = active.update(&txn).await?;

    log_audit(
        &txn,
        "shipments",
        Some(shipment.id),
        "shipment_status_update",
        actor_id,
        Some(serde_json::json!({ "from": current, "to": next })),
    )
    .await?;
    txn.commit().await?;

    tracing::info!(shipment_id = %shipment.id, from = ?current, to = ?next, "shipment status updated");
    Ok(shipment)
}
