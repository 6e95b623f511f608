//! Read-only access to the `stock_status` and `order_summary` views.

use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::{Alias, Asterisk, Expr, Order, Query};
use sea_orm::{ActiveEnum, ConnectionTrait, FromQueryResult};
use serde::Serialize;
use uuid::Uuid;

use crate::{error::AppResult, models::OrderStatus, state::AppState};

pub const STOCK_OUT: &str = "out_of_stock";
pub const STOCK_LOW: &str = "low_stock";
pub const STOCK_OK: &str = "in_stock";

#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct StockStatusRow {
    pub product_id: Uuid,
    pub sku: String,
    pub name: String,
    pub quantity: i32,
    pub reorder_level: i32,
    pub stock_state: String,
}

#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct OrderSummaryRow {
    pub order_id: Uuid,
    pub user_id: Uuid,
    pub customer_name: String,
    pub email: String,
    pub total: i64,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

/// Stock per product, by SKU. With `only_attention` set, rows that are `in_stock` are left out.
pub async fn stock_status(state: &AppState, only_attention: bool) -> AppResult<Vec<StockStatusRow>> {
    let mut stmt = Query::select();
    stmt.column(Asterisk)
        .from(Alias::new("stock_status"))
        .order_by(Alias::new("sku"), Order::Asc);
    if only_attention {
        stmt.and_where(Expr::col(Alias::new("stock_state")).ne(STOCK_OK));
    }

    let backend = state.orm.get_database_backend();
    let rows = StockStatusRow::find_by_statement(backend.build(&stmt))
        .all(&state.orm)
        .await?;
    Ok(rows)
}

/// Newest orders first, optionally restricted to one status.
pub async fn order_summaries(
    state: &AppState,
    status: Option<OrderStatus>,
    limit: u64,
) -> AppResult<Vec<OrderSummaryRow>> {
    let mut stmt = Query::select();
    stmt.column(Asterisk)
        .from(Alias::new("order_summary"))
        .order_by(Alias::new("created_at"), Order::Desc)
        .limit(limit.clamp(1, 1000));
    if let Some(status) = status {
        stmt.and_where(Expr::col(Alias::new("status")).eq(status.to_value()));
    }

    let backend = state.orm.get_database_backend();
    let rows = OrderSummaryRow::find_by_statement(backend.build(&stmt))
        .all(&state.orm)
        .await?;
    Ok(rows)
}
