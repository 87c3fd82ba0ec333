use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateStyleRequest {
    pub style: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStyleRequest {
    pub style: String,
}
