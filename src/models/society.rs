use serde::{Deserialize, Serialize};

use crate::models::Creator;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Society {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub instagram_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocietyReview {
    pub id: i64,
    pub rating: f64,
    pub comment: String,
    pub user_id: i64,
    pub society_id: i64,
    pub creator: Creator,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocietyWithReviews {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub instagram_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub reviews: Vec<SocietyReview>,
}

/// Listing-page row from the pre-aggregated `with-reviews` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocietyWithRating {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub instagram_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub average_rating: f64,
    pub review_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocietyCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocietyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocietyReviewCreate {
    pub rating: f64,
    pub comment: String,
    pub society_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocietyReviewUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}
