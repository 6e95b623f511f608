use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    dto::catalog::NewReview,
    entity::reviews::{ActiveModel as ReviewActive, Column as ReviewCol, Entity as Reviews, Model as ReviewModel},
    error::{AppError, AppResult},
    state::AppState,
};

/// One review per (product, user). A second review by the same user fails with `ConstraintViolation`.
pub async fn create_review(state: &AppState, payload: NewReview) -> AppResult<ReviewModel> {
    if !(1..=5).contains(&payload.rating) {
        return Err(AppError::ConstraintViolation(
            "rating must be between 1 and 5".into(),
        ));
    }

    let review = ReviewActive {
        id: Set(Uuid::new_v4()),
        product_id: Set(payload.product_id),
        user_id: Set(payload.user_id),
        rating: Set(payload.rating),
        title: Set(payload.title),
        body: Set(payload.body),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;
    Ok(review)
}

pub async fn list_reviews(state: &AppState, product_id: Uuid) -> AppResult<Vec<ReviewModel>> {
    let rows = Reviews::find()
        .filter(ReviewCol::ProductId.eq(product_id))
        .order_by_desc(ReviewCol::CreatedAt)
        .all(&state.orm)
        .await?;
    Ok(rows)
}

/// Mean rating, or `None` for a product nobody reviewed.
pub async fn average_rating(state: &AppState, product_id: Uuid) -> AppResult<Option<f64>> {
    let ratings: Vec<i32> = list_reviews(state, product_id)
        .await?
        .into_iter()
        .map(|review| review.rating)
        .collect();
    Ok(mean(&ratings))
}

fn mean(ratings: &[i32]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    Some(sum as f64 / ratings.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::mean;

    #[test]
    fn mean_of_ratings() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[4]), Some(4.0));
        assert_eq!(mean(&[5, 4, 3]), Some(4.0));
        assert_eq!(mean(&[5, 4]), Some(4.5));
    }
}
