use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    dto::categories::{CreateSubCategoryRequest, UpdateSubCategoryRequest},
    entity::sub_categories::{
        ActiveModel, Column, Entity as SubCategories, Model as SubCategoryModel,
    },
    error::{AppError, AppResult},
    models::SubCategory,
    state::AppState,
};

pub async fn create_subcategory(
    state: &AppState,
    payload: CreateSubCategoryRequest,
) -> AppResult<SubCategory> {
    let subcategory = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        parent_category_id: Set(payload.parent_category_id),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(
        subcategory_id = %subcategory.id,
        category_id = %subcategory.parent_category_id,
        "subcategory created"
    );
    Ok(subcategory_from_entity(subcategory))
}

pub async fn get_subcategory(state: &AppState, id: Uuid) -> AppResult<SubCategory> {
    SubCategories::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(subcategory_from_entity)
        .ok_or(AppError::NotFound)
}

pub async fn list_subcategories(
    state: &AppState,
    category_id: Uuid,
) -> AppResult<Vec<SubCategory>> {
    let items = SubCategories::find()
        .filter(Column::ParentCategoryId.eq(category_id))
        .order_by_asc(Column::Name)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(subcategory_from_entity)
        .collect();
    Ok(items)
}

pub async fn update_subcategory(
    state: &AppState,
    id: Uuid,
    payload: UpdateSubCategoryRequest,
) -> AppResult<SubCategory> {
    let existing = SubCategories::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(parent_category_id) = payload.parent_category_id {
        active.parent_category_id = Set(parent_category_id);
    }

    let subcategory = active.reset_all().update(&state.orm).await?;
    Ok(subcategory_from_entity(subcategory))
}

/// Products filed under the subcategory are removed with it.
pub async fn delete_subcategory(state: &AppState, id: Uuid) -> AppResult<()> {
    let result = SubCategories::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}

fn subcategory_from_entity(model: SubCategoryModel) -> SubCategory {
    SubCategory {
        id: model.id,
        name: model.name,
        parent_category_id: model.parent_category_id,
    }
}
