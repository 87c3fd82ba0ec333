use serde::Deserialize;
use uuid::Uuid;

use super::double_option;

#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub product_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub review_text: String,
    pub review_image: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateReviewRequest {
    pub rating: Option<i32>,
    pub review_text: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub review_image: Option<Option<String>>,
}
