use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    Set,
};
use uuid::Uuid;

use crate::{
    dto::styles::{CreateStyleRequest, UpdateStyleRequest},
    entity::styles::{ActiveModel, Column, Entity as Styles, Model as StyleModel},
    error::{AppError, AppResult},
    models::Style,
    pagination::{Page, Pagination},
    state::AppState,
};

/// Labels are unique; a duplicate surfaces as `AppError::Conflict`.
pub async fn create_style(state: &AppState, payload: CreateStyleRequest) -> AppResult<Style> {
    let style = ActiveModel {
        id: Set(Uuid::new_v4()),
        style: Set(payload.style),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(style_id = %style.id, style = %style.style, "style created");
    Ok(style_from_entity(style))
}

pub async fn get_style(state: &AppState, id: Uuid) -> AppResult<Style> {
    Styles::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(style_from_entity)
        .ok_or(AppError::NotFound)
}

pub async fn find_style_by_label(state: &AppState, label: &str) -> AppResult<Option<Style>> {
    let style = Styles::find()
        .filter(Column::Style.eq(label))
        .one(&state.orm)
        .await?
        .map(style_from_entity);
    Ok(style)
}

pub async fn list_styles(state: &AppState, pagination: Pagination) -> AppResult<Page<Style>> {
    let (page, limit, offset) = pagination.normalize();
    let finder = Styles::find().order_by_asc(Column::Style);
    let total = finder.clone().count(&state.orm).await?;
    let items = finder
        .limit(limit)
        .offset(offset)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(style_from_entity)
        .collect();
    Ok(Page::new(items, page, limit, total))
}

pub async fn update_style(
    state: &AppState,
    id: Uuid,
    payload: UpdateStyleRequest,
) -> AppResult<Style> {
    let existing = Styles::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ActiveModel = existing.into();
    active.style = Set(payload.style);
    let style = active.update(&state.orm).await?;
    Ok(style_from_entity(style))
}

/// Products using the style keep existing with `style_id` cleared.
pub async fn delete_style(state: &AppState, id: Uuid) -> AppResult<()> {
    let result = Styles::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(style_id = %id, "style deleted");
    Ok(())
}

fn style_from_entity(model: StyleModel) -> Style {
    Style {
        id: model.id,
        style: model.style,
    }
}
