use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct AddFavouriteRequest {
    pub user_id: Uuid,
    pub product_id: Uuid,
}
