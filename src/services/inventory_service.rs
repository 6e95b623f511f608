//! Stock counter maintenance and the admission-check-then-decrement rule for order lines.
//!
//! Every order line goes through [`add_order_item_in`]: the inventory row is read with an
//! exclusive row lock, the line is inserted, and the counter is decremented, all inside the
//! caller's transaction. The lock is held until that transaction ends, so two lines for the
//! same product cannot both consume the same unit.

use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::{Expr, LockType};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, QueryFilter,
    QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::orders::NewOrderItem,
    entity::{
        inventory::{ActiveModel as InventoryActive, Column as InvCol, Entity as Inventory, Model as InventoryModel},
        order_items::{ActiveModel as OrderItemActive, Model as OrderItemModel},
    },
    error::{AppError, AppResult},
    state::AppState,
};

/// Record one order line, admitting it only if stock covers the requested quantity.
pub async fn add_order_item(state: &AppState, item: NewOrderItem) -> AppResult<OrderItemModel> {
    let txn = state.orm.begin().await?;
    let line = add_order_item_in(&txn, &item).await?;
    txn.commit().await?;

    tracing::info!(
        order_id = %line.order_id,
        product_id = %line.product_id,
        quantity = line.quantity,
        "order line recorded"
    );
    Ok(line)
}

/// Transaction-scoped variant of [`add_order_item`]; the caller owns commit or rollback.
pub async fn add_order_item_in(
    txn: &DatabaseTransaction,
    item: &NewOrderItem,
) -> AppResult<OrderItemModel> {
    if item.quantity <= 0 {
        return Err(AppError::ConstraintViolation(
            "order item quantity must be greater than 0".into(),
        ));
    }
    if item.unit_price < 0 {
        return Err(AppError::ConstraintViolation(
            "unit price must not be negative".into(),
        ));
    }
    let line_total = item
        .unit_price
        .checked_mul(i64::from(item.quantity))
        .ok_or_else(|| AppError::ConstraintViolation("line total overflows".into()))?;

    admit(txn, item.product_id, item.quantity).await?;

    let line = OrderItemActive {
        id: Set(Uuid::new_v4()),
        order_id: Set(item.order_id),
        product_id: Set(item.product_id),
        quantity: Set(item.quantity),
        unit_price: Set(item.unit_price),
        line_total: Set(line_total),
        created_at: Set(Utc::now().into()),
    }
    .insert(txn)
    .await?;

    decrement(txn, item.product_id, item.quantity).await?;

    Ok(line)
}

/// Admission check. Locks the inventory row for the rest of the transaction.
async fn admit(txn: &DatabaseTransaction, product_id: Uuid, requested: i32) -> AppResult<InventoryModel> {
    let stock = lock_inventory(txn, product_id)
        .await?
        .ok_or(AppError::InventoryNotFound(product_id))?;

    if stock.quantity < requested {
        tracing::warn!(
            product_id = %product_id,
            requested,
            available = stock.quantity,
            "order line rejected: insufficient stock"
        );
        return Err(AppError::InsufficientStock {
            product_id,
            requested,
            available: stock.quantity,
        });
    }

    tracing::debug!(product_id = %product_id, requested, available = stock.quantity, "order line admitted");
    Ok(stock)
}

async fn decrement(txn: &DatabaseTransaction, product_id: Uuid, quantity: i32) -> AppResult<()> {
    let result = Inventory::update_many()
        .col_expr(InvCol::Quantity, Expr::col(InvCol::Quantity).sub(quantity))
        .col_expr(InvCol::UpdatedAt, Expr::value(DateTimeWithTimeZone::from(Utc::now())))
        .filter(InvCol::ProductId.eq(product_id))
        .filter(InvCol::Quantity.gte(quantity))
        .exec(txn)
        .await?;

    // The row is locked and was admitted above, so a miss here means the lock did not hold.
    if result.rows_affected != 1 {
        return Err(AppError::Internal(anyhow::anyhow!(
            "stock decrement for product {product_id} affected {} rows",
            result.rows_affected
        )));
    }
    Ok(())
}

async fn lock_inventory(
    txn: &DatabaseTransaction,
    product_id: Uuid,
) -> AppResult<Option<InventoryModel>> {
    let row = Inventory::find()
        .filter(InvCol::ProductId.eq(product_id))
        .lock(LockType::Update)
        .one(txn)
        .await?;
    Ok(row)
}

/// Create the stock record for a product. A product has at most one.
pub async fn create_inventory<C>(
    conn: &C,
    product_id: Uuid,
    quantity: i32,
    reorder_level: i32,
) -> AppResult<InventoryModel>
where
    C: ConnectionTrait,
{
    if quantity < 0 || reorder_level < 0 {
        return Err(AppError::ConstraintViolation(
            "stock and reorder level must not be negative".into(),
        ));
    }

    let row = InventoryActive {
        product_id: Set(product_id),
        quantity: Set(quantity),
        reorder_level: Set(reorder_level),
        updated_at: Set(Utc::now().into()),
    }
    .insert(conn)
    .await?;
    Ok(row)
}

pub async fn get_inventory(state: &AppState, product_id: Uuid) -> AppResult<InventoryModel> {
    Inventory::find_by_id(product_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::InventoryNotFound(product_id))
}

/// Add (positive delta) or remove (negative delta) stock outside of order lines.
pub async fn adjust_stock(
    state: &AppState,
    product_id: Uuid,
    delta: i32,
    actor_id: Option<Uuid>,
) -> AppResult<InventoryModel> {
    if delta == 0 {
        return Err(AppError::ConstraintViolation("delta must not be 0".into()));
    }

    let txn = state.orm.begin().await?;
    let updated = adjust_stock_in(&txn, product_id, delta).await?;
    log_audit(
        &txn,
        "inventory",
        Some(product_id),
        "inventory_adjust",
        actor_id,
        Some(serde_json::json!({ "delta": delta, "quantity": updated.quantity })),
    )
    .await?;
    txn.commit().await?;

    tracing::info!(product_id = %product_id, delta, quantity = updated.quantity, "inventory adjusted");
    Ok(updated)
}

pub(crate) async fn adjust_stock_in(
    txn: &DatabaseTransaction,
    product_id: Uuid,
    delta: i32,
) -> AppResult<InventoryModel> {
    let stock = lock_inventory(txn, product_id)
        .await?
        .ok_or(AppError::InventoryNotFound(product_id))?;

    let new_quantity = stock
        .quantity
        .checked_add(delta)
        .ok_or_else(|| AppError::ConstraintViolation("stock quantity overflows".into()))?;
    if new_quantity < 0 {
        return Err(AppError::InsufficientStock {
            product_id,
            requested: -delta,
            available: stock.quantity,
        });
    }

    let mut active: InventoryActive = stock.into();
    active.quantity = Set(new_quantity);
    active.updated_at = Set(Utc::now().into());
    let updated = active.update(txn).await?;
    Ok(updated)
}

pub async fn set_reorder_level(
    state: &AppState,
    product_id: Uuid,
    reorder_level: i32,
) -> AppResult<InventoryModel> {
    if reorder_level < 0 {
        return Err(AppError::ConstraintViolation(
            "reorder level must not be negative".into(),
        ));
    }
    let stock = Inventory::find_by_id(product_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::InventoryNotFound(product_id))?;

    let mut active: InventoryActive = stock.into();
    active.reorder_level = Set(reorder_level);
    active.updated_at = Set(Utc::now().into());
    Ok(active.update(&state.orm).await?)
}
