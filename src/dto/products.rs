use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use super::double_option;
use crate::pagination::Pagination;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub quantity: i32,
    pub category_id: Uuid,
    pub subcategory_id: Option<Uuid>,
    pub image: String,
    pub specification: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub style_id: Option<Uuid>,
    /// Usually left out; a blank value is filled in on save when a style is attached.
    #[serde(default)]
    pub style_code: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub quantity: Option<i32>,
    pub category_id: Option<Uuid>,
    #[serde(default, deserialize_with = "double_option")]
    pub subcategory_id: Option<Option<Uuid>>,
    pub image: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub specification: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub size: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub color: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub style_id: Option<Option<Uuid>>,
}

#[derive(Debug, Deserialize)]
pub struct CreateAttributeRequest {
    pub product_id: Uuid,
    pub attribute_type: String,
    pub attribute_value: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateAttributeRequest {
    pub attribute_type: Option<String>,
    pub attribute_value: Option<String>,
}

/// Relationship filters for product listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductQuery {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub category_id: Option<Uuid>,
    pub subcategory_id: Option<Uuid>,
    pub style_id: Option<Uuid>,
}
