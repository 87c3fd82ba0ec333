use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    dto::products::{CreateAttributeRequest, UpdateAttributeRequest},
    entity::product_attributes::{
        ActiveModel, Column, Entity as ProductAttributes, Model as AttributeModel,
    },
    error::{AppError, AppResult},
    models::ProductAttribute,
    state::AppState,
};

pub async fn create_attribute(
    state: &AppState,
    payload: CreateAttributeRequest,
) -> AppResult<ProductAttribute> {
    let attribute = ActiveModel {
        id: Set(Uuid::new_v4()),
        attribute_type: Set(payload.attribute_type),
        attribute_value: Set(payload.attribute_value),
        product_id: Set(payload.product_id),
    }
    .insert(&state.orm)
    .await?;

    tracing::debug!(
        product_id = %attribute.product_id,
        attribute_type = %attribute.attribute_type,
        "attribute added"
    );
    Ok(attribute_from_entity(attribute))
}

pub async fn get_attribute(state: &AppState, id: Uuid) -> AppResult<ProductAttribute> {
    ProductAttributes::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(attribute_from_entity)
        .ok_or(AppError::NotFound)
}

pub async fn list_attributes(
    state: &AppState,
    product_id: Uuid,
) -> AppResult<Vec<ProductAttribute>> {
    let items = ProductAttributes::find()
        .filter(Column::ProductId.eq(product_id))
        .order_by_asc(Column::AttributeType)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(attribute_from_entity)
        .collect();
    Ok(items)
}

pub async fn update_attribute(
    state: &AppState,
    id: Uuid,
    payload: UpdateAttributeRequest,
) -> AppResult<ProductAttribute> {
    let existing = ProductAttributes::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ActiveModel = existing.into();
    if let Some(attribute_type) = payload.attribute_type {
        active.attribute_type = Set(attribute_type);
    }
    if let Some(attribute_value) = payload.attribute_value {
        active.attribute_value = Set(attribute_value);
    }

    let attribute = active.reset_all().update(&state.orm).await?;
    Ok(attribute_from_entity(attribute))
}

pub async fn delete_attribute(state: &AppState, id: Uuid) -> AppResult<()> {
    let result = ProductAttributes::delete_by_id(id)
        .exec(&state.orm)
        .await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}

fn attribute_from_entity(model: AttributeModel) -> ProductAttribute {
    ProductAttribute {
        id: model.id,
        attribute_type: model.attribute_type,
        attribute_value: model.attribute_value,
        product_id: model.product_id,
    }
}
