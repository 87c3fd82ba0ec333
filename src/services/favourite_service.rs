use uuid::Uuid;

use crate::{
    dto::favourites::AddFavouriteRequest,
    error::{AppError, AppResult},
    models::{FavouriteProduct, Product},
    pagination::{Page, Pagination},
    state::AppState,
};

/// A user's favourite products, most recently added first.
pub async fn list_favourites(
    state: &AppState,
    user_id: Uuid,
    pagination: Pagination,
) -> AppResult<Page<Product>> {
    let (page, limit, offset) = pagination.normalize();
    let products = sqlx::query_as::<_, Product>(
        r#"
        SELECT p.*
        FROM favourite_products f
        JOIN products p ON p.id = f.product_id
        WHERE f.user_id = $1
        ORDER BY f.date_added DESC, f.id
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(user_id)
    .bind(limit as i64)
    .bind(offset as i64)
    .fetch_all(&state.pool)
    .await?;

    let total: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM favourite_products WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&state.pool)
            .await?;

    Ok(Page::new(products, page, limit, total.0 as u64))
}

/// Add a product to a user's favourites. An existing pairing is returned as is.
pub async fn add_favourite(
    state: &AppState,
    payload: AddFavouriteRequest,
) -> AppResult<FavouriteProduct> {
    let existing: Option<FavouriteProduct> = sqlx::query_as(
        "SELECT * FROM favourite_products WHERE user_id = $1 AND product_id = $2 LIMIT 1",
    )
    .bind(payload.user_id)
    .bind(payload.product_id)
    .fetch_optional(&state.pool)
    .await?;

    if let Some(favourite) = existing {
        return Ok(favourite);
    }

    // Missing user or product rows are rejected by the foreign keys.
    let favourite = sqlx::query_as::<_, FavouriteProduct>(
        r#"
        INSERT INTO favourite_products (id, user_id, product_id)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(payload.user_id)
    .bind(payload.product_id)
    .fetch_one(&state.pool)
    .await?;

    tracing::info!(
        user_id = %favourite.user_id,
        product_id = %favourite.product_id,
        "favourite added"
    );
    Ok(favourite)
}

pub async fn remove_favourite(state: &AppState, user_id: Uuid, product_id: Uuid) -> AppResult<()> {
    let result =
        sqlx::query("DELETE FROM favourite_products WHERE user_id = $1 AND product_id = $2")
            .bind(user_id)
            .bind(product_id)
            .execute(&state.pool)
            .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(%user_id, %product_id, "favourite removed");
    Ok(())
}

pub async fn is_favourite(state: &AppState, user_id: Uuid, product_id: Uuid) -> AppResult<bool> {
    let found: Option<(Uuid,)> = sqlx::query_as(
        "SELECT id FROM favourite_products WHERE user_id = $1 AND product_id = $2 LIMIT 1",
    )
    .bind(user_id)
    .bind(product_id)
    .fetch_optional(&state.pool)
    .await?;
    Ok(found.is_some())
}
