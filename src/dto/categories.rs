use serde::Deserialize;
use uuid::Uuid;

use super::double_option;

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub icon: Option<String>,
    pub parent_category_id: Option<Uuid>,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub icon: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub parent_category_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}

#[derive(Debug, Deserialize)]
pub struct CreateSubCategoryRequest {
    pub name: String,
    pub parent_category_id: Uuid,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateSubCategoryRequest {
    pub name: Option<String>,
    pub parent_category_id: Option<Uuid>,
}
