use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::{
    assets::AssetKind,
    dto::products::{CreateProductRequest, ProductQuery, UpdateProductRequest},
    entity::products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    error::{AppError, AppResult},
    models::Product,
    pagination::Page,
    state::AppState,
};

pub async fn list_products(state: &AppState, query: ProductQuery) -> AppResult<Page<Product>> {
    let (page, limit, offset) = query.pagination.normalize();
    let mut condition = Condition::all();

    if let Some(category_id) = query.category_id {
        condition = condition.add(Column::CategoryId.eq(category_id));
    }
    if let Some(subcategory_id) = query.subcategory_id {
        condition = condition.add(Column::SubcategoryId.eq(subcategory_id));
    }
    if let Some(style_id) = query.style_id {
        condition = condition.add(Column::StyleId.eq(style_id));
    }

    let finder = Products::find()
        .filter(condition)
        .order_by_asc(Column::Name)
        .order_by_asc(Column::Id);

    let total = finder.clone().count(&state.orm).await?;

    let items = finder
        .limit(limit)
        .offset(offset)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();

    Ok(Page::new(items, page, limit, total))
}

pub async fn get_product(state: &AppState, id: Uuid) -> AppResult<Product> {
    Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(product_from_entity)
        .ok_or(AppError::NotFound)
}

/// Insert a product. The style code is filled in by the entity's
/// before-save step when a style is attached and no code was supplied.
pub async fn create_product(
    state: &AppState,
    payload: CreateProductRequest,
) -> AppResult<Product> {
    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        description: Set(payload.description),
        price: Set(payload.price),
        quantity: Set(payload.quantity),
        category_id: Set(payload.category_id),
        subcategory_id: Set(payload.subcategory_id),
        image: Set(AssetKind::ProductImage.reference(&payload.image)),
        specification: Set(payload.specification),
        size: Set(payload.size),
        color: Set(payload.color),
        style_id: Set(payload.style_id),
        style_code: Set(payload.style_code.unwrap_or_default()),
    };
    let product = active.insert(&state.orm).await?;

    tracing::info!(
        product_id = %product.id,
        style_code = %product.style_code,
        "product created"
    );
    Ok(product_from_entity(product))
}

/// Apply the given changes and write the whole row back.
///
/// Every call is a save: an empty payload still rewrites the row and runs the
/// before-save step, so a product that gained a style without ever getting a
/// code receives one here. A code that already exists is kept as is.
pub async fn update_product(
    state: &AppState,
    id: Uuid,
    payload: UpdateProductRequest,
) -> AppResult<Product> {
    let existing = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(price) = payload.price {
        active.price = Set(price);
    }
    if let Some(quantity) = payload.quantity {
        active.quantity = Set(quantity);
    }
    if let Some(category_id) = payload.category_id {
        active.category_id = Set(category_id);
    }
    if let Some(subcategory_id) = payload.subcategory_id {
        active.subcategory_id = Set(subcategory_id);
    }
    if let Some(image) = payload.image {
        active.image = Set(AssetKind::ProductImage.reference(&image));
    }
    if let Some(specification) = payload.specification {
        active.specification = Set(specification);
    }
    if let Some(size) = payload.size {
        active.size = Set(size);
    }
    if let Some(color) = payload.color {
        active.color = Set(color);
    }
    if let Some(style_id) = payload.style_id {
        active.style_id = Set(style_id);
    }

    let product = active.reset_all().update(&state.orm).await?;
    tracing::debug!(product_id = %product.id, "product saved");
    Ok(product_from_entity(product))
}

/// Save a product without changing any field.
pub async fn save_product(state: &AppState, id: Uuid) -> AppResult<Product> {
    update_product(state, id, UpdateProductRequest::default()).await
}

/// Attributes, reviews and favourites of the product are removed with it.
pub async fn delete_product(state: &AppState, id: Uuid) -> AppResult<()> {
    let result = Products::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(product_id = %id, "product deleted");
    Ok(())
}

fn product_from_entity(model: ProductModel) -> Product {
    Product {
        id: model.id,
        name: model.name,
        description: model.description,
        price: model.price,
        quantity: model.quantity,
        category_id: model.category_id,
        subcategory_id: model.subcategory_id,
        image: model.image,
        specification: model.specification,
        size: model.size,
        color: model.color,
        style_id: model.style_id,
        style_code: model.style_code,
    }
}
