use std::collections::HashSet;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::catalog::{NewCategory, NewProduct},
    entity::{
        categories::{ActiveModel as CategoryActive, Entity as Categories, Model as CategoryModel},
        product_categories::ActiveModel as ProductCategoryActive,
        product_images::{ActiveModel as ImageActive, Column as ImageCol, Entity as ProductImages, Model as ImageModel},
        products::{ActiveModel as ProductActive, Column as ProductCol, Entity as Products, Model as ProductModel},
    },
    error::{AppError, AppResult},
    services::inventory_service,
    state::AppState,
};

/// Reorder level used when a product is stocked without one.
pub const DEFAULT_REORDER_LEVEL: i32 = 10;

pub async fn create_category(state: &AppState, payload: NewCategory) -> AppResult<CategoryModel> {
    if let Some(parent_id) = payload.parent_id {
        Categories::find_by_id(parent_id)
            .one(&state.orm)
            .await?
            .ok_or(AppError::NotFound("parent category"))?;
    }

    let category = CategoryActive {
        id: Set(Uuid::new_v4()),
        parent_id: Set(payload.parent_id),
        name: Set(payload.name),
        slug: Set(payload.slug),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;
    Ok(category)
}

/// Walk parent links from `category_id` to the root. The first element is the direct parent.
pub async fn category_ancestors<C>(conn: &C, category_id: Uuid) -> AppResult<Vec<CategoryModel>>
where
    C: ConnectionTrait,
{
    let start = Categories::find_by_id(category_id)
        .one(conn)
        .await?
        .ok_or(AppError::NotFound("category"))?;

    let mut seen = HashSet::from([start.id]);
    let mut ancestors = Vec::new();
    let mut next = start.parent_id;
    while let Some(parent_id) = next {
        if !seen.insert(parent_id) {
            return Err(AppError::ConstraintViolation(format!(
                "category tree contains a cycle at {parent_id}"
            )));
        }
        let parent = Categories::find_by_id(parent_id)
            .one(conn)
            .await?
            .ok_or(AppError::NotFound("category"))?;
        next = parent.parent_id;
        ancestors.push(parent);
    }
    Ok(ancestors)
}

/// Move a category under a new parent (or to the root). Refuses moves that would create a cycle.
pub async fn set_category_parent(
    state: &AppState,
    category_id: Uuid,
    parent_id: Option<Uuid>,
) -> AppResult<CategoryModel> {
    let txn = state.orm.begin().await?;

    let category = Categories::find_by_id(category_id)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound("category"))?;

    if let Some(parent_id) = parent_id {
        if parent_id == category_id {
            return Err(AppError::ConstraintViolation(
                "a category cannot be its own parent".into(),
            ));
        }
        let lineage = category_ancestors(&txn, parent_id).await?;
        if lineage.iter().any(|c| c.id == category_id) {
            return Err(AppError::ConstraintViolation(format!(
                "moving category {category_id} under {parent_id} would create a cycle"
            )));
        }
    }

    let mut active: CategoryActive = category.into();
    active.parent_id = Set(parent_id);
    let updated = active.update(&txn).await?;
    txn.commit().await?;
    Ok(updated)
}

/// Create a product, its category links and, when `initial_stock` is given, its inventory row.
pub async fn create_product(
    state: &AppState,
    payload: NewProduct,
    actor_id: Option<Uuid>,
) -> AppResult<ProductModel> {
    if payload.price < 0 {
        return Err(AppError::ConstraintViolation(
            "price must not be negative".into(),
        ));
    }

    let txn = state.orm.begin().await?;
    let now = Utc::now();

    let product = ProductActive {
        id: Set(Uuid::new_v4()),
        sku: Set(payload.sku.trim().to_owned()),
        name: Set(payload.name),
        description: Set(payload.description),
        price: Set(payload.price),
        active: Set(true),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(&txn)
    .await?;

    for category_id in &payload.category_ids {
        ProductCategoryActive {
            product_id: Set(product.id),
            category_id: Set(*category_id),
        }
        .insert(&txn)
        .await?;
    }

    if let Some(quantity) = payload.initial_stock {
        inventory_service::create_inventory(
            &txn,
            product.id,
            quantity,
            payload.reorder_level.unwrap_or(DEFAULT_REORDER_LEVEL),
        )
        .await?;
    }

    log_audit(
        &txn,
        "products",
        Some(product.id),
        "product_create",
        actor_id,
        Some(serde_json::json!({ "sku": product.sku, "initial_stock": payload.initial_stock })),
    )
    .await?;
    txn.commit().await?;

    tracing::info!(product_id = %product.id, sku = %product.sku, "product created");
    Ok(product)
}

pub async fn get_product(state: &AppState, product_id: Uuid) -> AppResult<ProductModel> {
    Products::find_by_id(product_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("product"))
}

pub async fn find_product_by_sku(state: &AppState, sku: &str) -> AppResult<Option<ProductModel>> {
    let product = Products::find()
        .filter(ProductCol::Sku.eq(sku.trim()))
        .one(&state.orm)
        .await?;
    Ok(product)
}

/// Soft on/off switch. Inactive products keep their history but cannot be added to carts.
pub async fn set_product_active(
    state: &AppState,
    product_id: Uuid,
    active_flag: bool,
) -> AppResult<ProductModel> {
    let product = get_product(state, product_id).await?;
    let mut active: ProductActive = product.into();
    active.active = Set(active_flag);
    active.updated_at = Set(Utc::now().into());
    Ok(active.update(&state.orm).await?)
}

pub async fn set_product_price(
    state: &AppState,
    product_id: Uuid,
    price: i64,
) -> AppResult<ProductModel> {
    if price < 0 {
        return Err(AppError::ConstraintViolation(
            "price must not be negative".into(),
        ));
    }
    let product = get_product(state, product_id).await?;
    let mut active: ProductActive = product.into();
    active.price = Set(price);
    active.updated_at = Set(Utc::now().into());
    Ok(active.update(&state.orm).await?)
}

/// Hard delete. Refused with `ReferenceViolation` once the product appears on an order.
pub async fn delete_product(state: &AppState, product_id: Uuid, actor_id: Option<Uuid>) -> AppResult<()> {
    let result = Products::delete_by_id(product_id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("product"));
    }

    if let Err(err) = log_audit(
        &state.orm,
        "products",
        Some(product_id),
        "product_delete",
        actor_id,
        None,
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }
    Ok(())
}

/// Append an image after the product's current last position.
pub async fn add_product_image(
    state: &AppState,
    product_id: Uuid,
    url: &str,
    alt_text: Option<&str>,
) -> AppResult<ImageModel> {
    let txn = state.orm.begin().await?;

    let last: Option<ImageModel> = ProductImages::find()
        .filter(ImageCol::ProductId.eq(product_id))
        .order_by_desc(ImageCol::Position)
        .limit(1)
        .one(&txn)
        .await?;
    let position = last.map_or(0, |image| image.position + 1);

    let image = ImageActive {
        id: Set(Uuid::new_v4()),
        product_id: Set(product_id),
        url: Set(url.to_owned()),
        alt_text: Set(alt_text.map(str::to_owned)),
        position: Set(position),
        created_at: Set(Utc::now().into()),
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;
    Ok(image)
}

pub async fn list_product_images(state: &AppState, product_id: Uuid) -> AppResult<Vec<ImageModel>> {
    let images = ProductImages::find()
        .filter(ImageCol::ProductId.eq(product_id))
        .order_by_asc(ImageCol::Position)
        .all(&state.orm)
        .await?;
    Ok(images)
}
