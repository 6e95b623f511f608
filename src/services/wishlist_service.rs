use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::{
    entity::{
        products::{Entity as Products, Model as ProductModel},
        wishlist_items::{ActiveModel as WishlistItemActive, Column as WishlistItemCol, Entity as WishlistItems},
        wishlists::{ActiveModel as WishlistActive, Column as WishlistCol, Entity as Wishlists, Model as WishlistModel},
    },
    error::{AppError, AppResult},
    state::AppState,
};

/// Wishlist names are unique per user.
pub async fn create_wishlist(state: &AppState, user_id: Uuid, name: &str) -> AppResult<WishlistModel> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::ConstraintViolation(
            "wishlist name must not be empty".into(),
        ));
    }

    let wishlist = WishlistActive {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        name: Set(name.to_owned()),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;
    Ok(wishlist)
}

pub async fn list_wishlists(state: &AppState, user_id: Uuid) -> AppResult<Vec<WishlistModel>> {
    let rows = Wishlists::find()
        .filter(WishlistCol::UserId.eq(user_id))
        .order_by_asc(WishlistCol::Name)
        .all(&state.orm)
        .await?;
    Ok(rows)
}

/// Adding a product that is already on the list is a no-op.
pub async fn add_to_wishlist(state: &AppState, wishlist_id: Uuid, product_id: Uuid) -> AppResult<()> {
    let existing = WishlistItems::find_by_id((wishlist_id, product_id))
        .one(&state.orm)
        .await?;
    if existing.is_some() {
        return Ok(());
    }

    WishlistItemActive {
        wishlist_id: Set(wishlist_id),
        product_id: Set(product_id),
        added_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;
    Ok(())
}

pub async fn remove_from_wishlist(
    state: &AppState,
    wishlist_id: Uuid,
    product_id: Uuid,
) -> AppResult<()> {
    let result = WishlistItems::delete_many()
        .filter(WishlistItemCol::WishlistId.eq(wishlist_id))
        .filter(WishlistItemCol::ProductId.eq(product_id))
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("wishlist item"));
    }
    Ok(())
}

pub async fn list_wishlist_products(
    state: &AppState,
    wishlist_id: Uuid,
) -> AppResult<Vec<ProductModel>> {
    let wishlist = Wishlists::find_by_id(wishlist_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("wishlist"))?;

    let products = wishlist
        .find_related(WishlistItems)
        .order_by_asc(WishlistItemCol::AddedAt)
        .find_also_related(Products)
        .all(&state.orm)
        .await?
        .into_iter()
        .filter_map(|(_, product)| product)
        .collect();
    Ok(products)
}
