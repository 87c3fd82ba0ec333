use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::{
    assets::AssetKind,
    dto::reviews::{CreateReviewRequest, UpdateReviewRequest},
    entity::product_reviews::{
        ActiveModel, Column, Entity as ProductReviews, Model as ReviewModel,
    },
    error::{AppError, AppResult},
    models::ProductReview,
    pagination::{Page, Pagination},
    state::AppState,
};

/// `review_date` is assigned by the store.
pub async fn create_review(
    state: &AppState,
    payload: CreateReviewRequest,
) -> AppResult<ProductReview> {
    let review = ActiveModel {
        id: Set(Uuid::new_v4()),
        product_id: Set(payload.product_id),
        user_id: Set(payload.user_id),
        rating: Set(payload.rating),
        review_text: Set(payload.review_text),
        review_date: NotSet,
        review_image: Set(payload
            .review_image
            .map(|image| AssetKind::ReviewImage.reference(&image))),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(
        review_id = %review.id,
        product_id = %review.product_id,
        user_id = %review.user_id,
        "review created"
    );
    Ok(review_from_entity(review))
}

pub async fn get_review(state: &AppState, id: Uuid) -> AppResult<ProductReview> {
    ProductReviews::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(review_from_entity)
        .ok_or(AppError::NotFound)
}

/// Reviews of a product, newest first.
pub async fn list_product_reviews(
    state: &AppState,
    product_id: Uuid,
    pagination: Pagination,
) -> AppResult<Page<ProductReview>> {
    let (page, limit, offset) = pagination.normalize();
    let finder = ProductReviews::find()
        .filter(Column::ProductId.eq(product_id))
        .order_by_desc(Column::ReviewDate);

    let total = finder.clone().count(&state.orm).await?;
    let items = finder
        .limit(limit)
        .offset(offset)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(review_from_entity)
        .collect();
    Ok(Page::new(items, page, limit, total))
}

pub async fn list_user_reviews(state: &AppState, user_id: Uuid) -> AppResult<Vec<ProductReview>> {
    let items = ProductReviews::find()
        .filter(Column::UserId.eq(user_id))
        .order_by_desc(Column::ReviewDate)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(review_from_entity)
        .collect();
    Ok(items)
}

pub async fn update_review(
    state: &AppState,
    id: Uuid,
    payload: UpdateReviewRequest,
) -> AppResult<ProductReview> {
    let existing = ProductReviews::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ActiveModel = existing.into();
    if let Some(rating) = payload.rating {
        active.rating = Set(rating);
    }
    if let Some(review_text) = payload.review_text {
        active.review_text = Set(review_text);
    }
    if let Some(review_image) = payload.review_image {
        active.review_image =
            Set(review_image.map(|image| AssetKind::ReviewImage.reference(&image)));
    }

    let review = active.reset_all().update(&state.orm).await?;
    Ok(review_from_entity(review))
}

pub async fn delete_review(state: &AppState, id: Uuid) -> AppResult<()> {
    let result = ProductReviews::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}

fn review_from_entity(model: ReviewModel) -> ProductReview {
    ProductReview {
        id: model.id,
        product_id: model.product_id,
        user_id: model.user_id,
        rating: model.rating,
        review_text: model.review_text,
        review_date: model.review_date.with_timezone(&Utc),
        review_image: model.review_image,
    }
}
