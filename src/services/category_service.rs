use std::collections::HashSet;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::{
    assets::AssetKind,
    dto::categories::{CreateCategoryRequest, UpdateCategoryRequest},
    entity::categories::{ActiveModel, Column, Entity as Categories, Model as CategoryModel},
    error::{AppError, AppResult},
    models::Category,
    pagination::{Page, Pagination},
    state::AppState,
};

pub async fn create_category(
    state: &AppState,
    payload: CreateCategoryRequest,
) -> AppResult<Category> {
    let category = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        icon: Set(payload
            .icon
            .map(|icon| AssetKind::CategoryIcon.reference(&icon))),
        parent_category_id: Set(payload.parent_category_id),
        description: Set(payload.description),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(category_id = %category.id, "category created");
    Ok(category_from_entity(category))
}

pub async fn get_category(state: &AppState, id: Uuid) -> AppResult<Category> {
    Categories::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(category_from_entity)
        .ok_or(AppError::NotFound)
}

pub async fn list_categories(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<Page<Category>> {
    let (page, limit, offset) = pagination.normalize();
    let finder = Categories::find().order_by_asc(Column::Name);
    let total = finder.clone().count(&state.orm).await?;
    let items = finder
        .limit(limit)
        .offset(offset)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(category_from_entity)
        .collect();
    Ok(Page::new(items, page, limit, total))
}

/// Categories whose parent is `parent_id`.
pub async fn list_child_categories(state: &AppState, parent_id: Uuid) -> AppResult<Vec<Category>> {
    let children = Categories::find()
        .filter(Column::ParentCategoryId.eq(parent_id))
        .order_by_asc(Column::Name)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(category_from_entity)
        .collect();
    Ok(children)
}

pub async fn update_category(
    state: &AppState,
    id: Uuid,
    payload: UpdateCategoryRequest,
) -> AppResult<Category> {
    let existing = Categories::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    if let Some(Some(parent_id)) = payload.parent_category_id {
        ensure_acyclic_parent(&state.orm, id, parent_id).await?;
    }

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(icon) = payload.icon {
        active.icon = Set(icon.map(|icon| AssetKind::CategoryIcon.reference(&icon)));
    }
    if let Some(parent_category_id) = payload.parent_category_id {
        active.parent_category_id = Set(parent_category_id);
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }

    let category = active.reset_all().update(&state.orm).await?;
    Ok(category_from_entity(category))
}

/// Deleting a category removes its subcategories and products; child
/// categories survive with their parent cleared.
pub async fn delete_category(state: &AppState, id: Uuid) -> AppResult<()> {
    let result = Categories::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(category_id = %id, "category deleted");
    Ok(())
}

/// Reject a parent assignment that would make `id` its own ancestor.
pub async fn ensure_acyclic_parent<C>(db: &C, id: Uuid, parent_id: Uuid) -> AppResult<()>
where
    C: ConnectionTrait,
{
    let mut seen = HashSet::from([id]);
    let mut cursor = Some(parent_id);
    while let Some(current) = cursor {
        if !seen.insert(current) {
            return Err(AppError::BadRequest(
                "category hierarchy would form a cycle".into(),
            ));
        }
        let parent = Categories::find_by_id(current)
            .one(db)
            .await?
            .ok_or_else(|| AppError::InvalidReference(format!("category {current}")))?;
        cursor = parent.parent_category_id;
    }
    Ok(())
}

fn category_from_entity(model: CategoryModel) -> Category {
    Category {
        id: model.id,
        name: model.name,
        icon: model.icon,
        parent_category_id: model.parent_category_id,
        description: model.description,
    }
}
