use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductImage {
    pub id: i64,
    pub image_path: String,
    pub product_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub pickup_location: String,
    pub condition: String,
    pub user_id: i64,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    // Not part of the product response schema; present only when the backend
    // chooses to include it
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub pickup_location: String,
    pub condition: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_paths: Vec<String>,
}
