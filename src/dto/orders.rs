use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::{
    order_items::Model as OrderItem, orders::Model as Order, payments::Model as Payment,
};

/// Inputs of the order-creation helper. Amounts are minor currency units computed by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub user_id: Uuid,
    pub shipping_address_id: Option<Uuid>,
    pub billing_address_id: Option<Uuid>,
    pub subtotal: i64,
    pub shipping_fee: i64,
    pub tax: i64,
    pub discount: i64,
    #[serde(default)]
    pub coupon_id: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewOrderItem {
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub unit_price: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutRequest {
    pub user_id: Uuid,
    pub shipping_address_id: Option<Uuid>,
    pub billing_address_id: Option<Uuid>,
    pub shipping_fee: i64,
    pub tax: i64,
    pub coupon_code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OrderWithItems {
    pub order: Order,
    pub items: Vec<OrderItem>,
    pub payments: Vec<Payment>,
}
