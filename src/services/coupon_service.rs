use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::{
    dto::catalog::NewCoupon,
    entity::coupons::{ActiveModel as CouponActive, Column as CouponCol, Entity as Coupons, Model as CouponModel},
    error::{AppError, AppResult},
    state::AppState,
};

pub async fn create_coupon(state: &AppState, payload: NewCoupon) -> AppResult<CouponModel> {
    if payload.amount_off < 0 {
        return Err(AppError::ConstraintViolation(
            "coupon amount must not be negative".into(),
        ));
    }

    let coupon = CouponActive {
        id: Set(Uuid::new_v4()),
        code: Set(payload.code.trim().to_uppercase()),
        description: Set(payload.description),
        amount_off: Set(payload.amount_off),
        active: Set(true),
        expires_at: Set(payload.expires_at.map(Into::into)),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(code = %coupon.code, amount_off = coupon.amount_off, "coupon created");
    Ok(coupon)
}

pub async fn find_active_coupon(state: &AppState, code: &str) -> AppResult<CouponModel> {
    find_active_coupon_in(&state.orm, code).await
}

/// Look up a coupon by code (case-insensitive). Inactive or expired coupons are reported as missing.
pub(crate) async fn find_active_coupon_in<C>(conn: &C, code: &str) -> AppResult<CouponModel>
where
    C: ConnectionTrait,
{
    let coupon = Coupons::find()
        .filter(CouponCol::Code.eq(code.trim().to_uppercase()))
        .filter(CouponCol::Active.eq(true))
        .one(conn)
        .await?
        .ok_or(AppError::NotFound("coupon"))?;

    if let Some(expires_at) = coupon.expires_at {
        if expires_at <= Utc::now() {
            return Err(AppError::NotFound("coupon"));
        }
    }
    Ok(coupon)
}

pub async fn deactivate_coupon(state: &AppState, coupon_id: Uuid) -> AppResult<CouponModel> {
    let coupon = Coupons::find_by_id(coupon_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("coupon"))?;

    let mut active: CouponActive = coupon.into();
    active.active = Set(false);
    Ok(active.update(&state.orm).await?)
}

/// Fixed amount off, never more than the subtotal it applies to.
pub fn discount_for(coupon: &CouponModel, subtotal: i64) -> i64 {
    coupon.amount_off.min(subtotal).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coupon(amount_off: i64) -> CouponModel {
        CouponModel {
            id: Uuid::new_v4(),
            code: "WELCOME".into(),
            description: None,
            amount_off,
            active: true,
            expires_at: None,
            created_at: Utc::now().into(),
        }
    }

    #[test]
    fn discount_is_capped_by_subtotal() {
        assert_eq!(discount_for(&coupon(500), 10_000), 500);
        assert_eq!(discount_for(&coupon(50_000), 10_000), 10_000);
        assert_eq!(discount_for(&coupon(500), 0), 0);
    }
}
