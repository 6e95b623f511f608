use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::{
    dto::cart::{CartLine, CartView},
    entity::{
        cart_items::{ActiveModel as CartItemActive, Column as CartItemCol, Entity as CartItems, Model as CartItemModel},
        carts::{ActiveModel as CartActive, Column as CartCol, Entity as Carts, Model as CartModel},
        products::Entity as Products,
    },
    error::{AppError, AppResult},
    state::AppState,
};

async fn get_or_create_cart<C>(conn: &C, user_id: Uuid) -> AppResult<CartModel>
where
    C: ConnectionTrait,
{
    if let Some(cart) = Carts::find()
        .filter(CartCol::UserId.eq(user_id))
        .one(conn)
        .await?
    {
        return Ok(cart);
    }

    let now = Utc::now();
    let cart = CartActive {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(conn)
    .await?;
    Ok(cart)
}

/// Put `quantity` units of a product in the user's cart, replacing any earlier quantity.
pub async fn add_to_cart(
    state: &AppState,
    user_id: Uuid,
    product_id: Uuid,
    quantity: i32,
) -> AppResult<CartItemModel> {
    if quantity <= 0 {
        return Err(AppError::ConstraintViolation(
            "quantity must be greater than 0".to_string(),
        ));
    }

    let product = Products::find_by_id(product_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("product"))?;
    if !product.active {
        return Err(AppError::ConstraintViolation(format!(
            "product {} is not available",
            product.sku
        )));
    }

    let cart = get_or_create_cart(&state.orm, user_id).await?;

    let existing = CartItems::find()
        .filter(CartItemCol::CartId.eq(cart.id))
        .filter(CartItemCol::ProductId.eq(product_id))
        .one(&state.orm)
        .await?;

    let item = match existing {
        Some(item) => {
            let mut active: CartItemActive = item.into();
            active.quantity = Set(quantity);
            active.update(&state.orm).await?
        }
        None => {
            CartItemActive {
                id: Set(Uuid::new_v4()),
                cart_id: Set(cart.id),
                product_id: Set(product_id),
                quantity: Set(quantity),
                added_at: Set(Utc::now().into()),
            }
            .insert(&state.orm)
            .await?
        }
    };

    tracing::debug!(user_id = %user_id, product_id = %product_id, quantity, "cart updated");
    Ok(item)
}

pub async fn remove_from_cart(state: &AppState, user_id: Uuid, product_id: Uuid) -> AppResult<()> {
    let cart = Carts::find()
        .filter(CartCol::UserId.eq(user_id))
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("cart"))?;

    let result = CartItems::delete_many()
        .filter(CartItemCol::CartId.eq(cart.id))
        .filter(CartItemCol::ProductId.eq(product_id))
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("cart item"));
    }
    Ok(())
}

/// The user's cart with product details. A user who never added anything has an empty cart.
pub async fn list_cart(state: &AppState, user_id: Uuid) -> AppResult<CartView> {
    match load_cart_in(&state.orm, user_id).await? {
        Some(cart) => Ok(cart),
        None => {
            let cart = get_or_create_cart(&state.orm, user_id).await?;
            Ok(CartView {
                cart_id: cart.id,
                items: Vec::new(),
            })
        }
    }
}

pub async fn clear_cart(state: &AppState, user_id: Uuid) -> AppResult<u64> {
    let Some(cart) = Carts::find()
        .filter(CartCol::UserId.eq(user_id))
        .one(&state.orm)
        .await?
    else {
        return Ok(0);
    };
    clear_cart_in(&state.orm, cart.id).await
}

pub(crate) async fn load_cart_in<C>(conn: &C, user_id: Uuid) -> AppResult<Option<CartView>>
where
    C: ConnectionTrait,
{
    let Some(cart) = Carts::find()
        .filter(CartCol::UserId.eq(user_id))
        .one(conn)
        .await?
    else {
        return Ok(None);
    };

    let rows = CartItems::find()
        .filter(CartItemCol::CartId.eq(cart.id))
        .order_by_asc(CartItemCol::AddedAt)
        .find_also_related(Products)
        .all(conn)
        .await?;

    let items = rows
        .into_iter()
        .filter_map(|(item, product)| {
            product.map(|product| CartLine {
                id: item.id,
                product,
                quantity: item.quantity,
            })
        })
        .collect();

    Ok(Some(CartView {
        cart_id: cart.id,
        items,
    }))
}

pub(crate) async fn clear_cart_in<C>(conn: &C, cart_id: Uuid) -> AppResult<u64>
where
    C: ConnectionTrait,
{
    let result = CartItems::delete_many()
        .filter(CartItemCol::CartId.eq(cart_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
