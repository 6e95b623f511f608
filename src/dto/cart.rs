use serde::Serialize;
use uuid::Uuid;

use crate::{
    entity::products::Model as Product,
    error::{AppError, AppResult},
};

#[derive(Debug, Serialize)]
pub struct CartLine {
    pub id: Uuid,
    pub product: Product,
    pub quantity: i32,
}

#[derive(Debug, Serialize)]
pub struct CartView {
    pub cart_id: Uuid,
    pub items: Vec<CartLine>,
}

impl CartView {
    /// Sum of `price × quantity` over the lines, refusing amounts that do not fit in `i64`.
    pub fn subtotal(&self) -> AppResult<i64> {
        self.items.iter().try_fold(0i64, |acc, line| {
            line.product
                .price
                .checked_mul(i64::from(line.quantity))
                .and_then(|amount| acc.checked_add(amount))
                .ok_or_else(|| AppError::ConstraintViolation("cart subtotal overflows".into()))
        })
    }
}
