use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Creator;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripImage {
    pub id: i64,
    pub image_path: String,
    pub trip_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub departure_location: String,
    pub max_participants: i32,
    pub cost_per_person: f64,
    pub creator_id: i64,
    #[serde(default)]
    pub images: Vec<TripImage>,
    pub creator: Creator,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripCreate {
    pub title: String,
    pub description: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub departure_location: String,
    pub max_participants: i32,
    pub cost_per_person: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_paths: Vec<String>,
}
