use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub icon: Option<String>,
    pub parent_category_id: Option<Uuid>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Style {
    pub id: Uuid,
    pub style: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubCategory {
    pub id: Uuid,
    pub name: String,
    pub parent_category_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: Uuid,
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
    pub style_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductAttribute {
    pub id: Uuid,
    pub attribute_type: String,
    pub attribute_value: String,
    pub product_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductReview {
    pub id: Uuid,
    pub product_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub review_text: String,
    pub review_date: DateTime<Utc>,
    pub review_image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FavouriteProduct {
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub date_added: DateTime<Utc>,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.style)
    }
}

impl fmt::Display for SubCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// Labels for rows whose text depends on the product or user they point at.

impl ProductAttribute {
    pub fn label(&self, product: &Product) -> String {
        format!(
            "{} - {}: {}",
            product.name, self.attribute_type, self.attribute_value
        )
    }
}

impl ProductReview {
    pub fn label(&self, product: &Product, user: &User) -> String {
        format!("Review for {} by {}", product.name, user.username)
    }
}

impl FavouriteProduct {
    pub fn label(&self, user: &User, product: &Product) -> String {
        format!("{}'s Favourite: {}", user.username, product.name)
    }
}
