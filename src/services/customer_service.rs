use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::customers::{NewAddress, NewUser},
    entity::{
        addresses::{ActiveModel as AddressActive, Column as AddressCol, Entity as Addresses, Model as AddressModel},
        roles::{ActiveModel as RoleActive, Column as RoleCol, Entity as Roles, Model as RoleModel},
        user_roles::{ActiveModel as UserRoleActive, Column as UserRoleCol, Entity as UserRoles},
        users::{ActiveModel as UserActive, Column as UserCol, Entity as Users, Model as UserModel},
    },
    error::{AppError, AppResult},
    state::AppState,
};

pub async fn create_user(state: &AppState, payload: NewUser) -> AppResult<UserModel> {
    let email = payload.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::ConstraintViolation(format!(
            "invalid email address: {email:?}"
        )));
    }

    let now = Utc::now();
    let user = UserActive {
        id: Set(Uuid::new_v4()),
        email: Set(email),
        password_hash: Set(payload.password_hash),
        first_name: Set(payload.first_name),
        last_name: Set(payload.last_name),
        phone: Set(payload.phone),
        is_employee: Set(payload.is_employee),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(&state.orm)
    .await?;

    if let Err(err) = log_audit(
        &state.orm,
        "users",
        Some(user.id),
        "user_created",
        None,
        Some(serde_json::json!({ "email": user.email })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(user)
}

pub async fn get_user_by_email(state: &AppState, email: &str) -> AppResult<UserModel> {
    Users::find()
        .filter(UserCol::Email.eq(email.trim().to_lowercase()))
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("user"))
}

pub async fn add_address(state: &AppState, payload: NewAddress) -> AppResult<AddressModel> {
    let country = payload.country.trim().to_uppercase();
    if country.len() != 2 {
        return Err(AppError::ConstraintViolation(
            "country must be a two-letter code".into(),
        ));
    }

    let address = AddressActive {
        id: Set(Uuid::new_v4()),
        user_id: Set(payload.user_id),
        label: Set(payload.label),
        line1: Set(payload.line1),
        line2: Set(payload.line2),
        city: Set(payload.city),
        region: Set(payload.region),
        postal_code: Set(payload.postal_code),
        country: Set(country),
        is_default: Set(payload.is_default),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;
    Ok(address)
}

pub async fn list_addresses(state: &AppState, user_id: Uuid) -> AppResult<Vec<AddressModel>> {
    let rows = Addresses::find()
        .filter(AddressCol::UserId.eq(user_id))
        .order_by_asc(AddressCol::CreatedAt)
        .all(&state.orm)
        .await?;
    Ok(rows)
}

/// Delete a user together with addresses, cart, wishlists and reviews.
/// Refused with `ReferenceViolation` while the user has orders.
pub async fn delete_user(state: &AppState, user_id: Uuid, actor_id: Option<Uuid>) -> AppResult<()> {
    let user = Users::find_by_id(user_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("user"))?;

    user.delete(&state.orm).await?;

    if let Err(err) = log_audit(
        &state.orm,
        "users",
        Some(user_id),
        "user_deleted",
        actor_id,
        None,
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    tracing::info!(user_id = %user_id, "user deleted");
    Ok(())
}

/// Fetch a role by name, creating it on first use.
pub async fn ensure_role(state: &AppState, name: &str, description: Option<&str>) -> AppResult<RoleModel> {
    if let Some(role) = Roles::find()
        .filter(RoleCol::Name.eq(name))
        .one(&state.orm)
        .await?
    {
        return Ok(role);
    }

    let role = RoleActive {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_owned()),
        description: Set(description.map(str::to_owned)),
    }
    .insert(&state.orm)
    .await?;
    Ok(role)
}

pub async fn assign_role(state: &AppState, user_id: Uuid, role_id: Uuid) -> AppResult<()> {
    let already = UserRoles::find()
        .filter(UserRoleCol::UserId.eq(user_id))
        .filter(UserRoleCol::RoleId.eq(role_id))
        .one(&state.orm)
        .await?;
    if already.is_some() {
        return Ok(());
    }

    UserRoleActive {
        user_id: Set(user_id),
        role_id: Set(role_id),
        assigned_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;
    Ok(())
}

pub async fn role_names(state: &AppState, user_id: Uuid) -> AppResult<Vec<String>> {
    let user = Users::find_by_id(user_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("user"))?;

    let mut names: Vec<String> = user
        .find_related(Roles)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|role| role.name)
        .collect();
    names.sort();
    Ok(names)
}
