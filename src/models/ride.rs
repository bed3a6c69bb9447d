use serde::{Deserialize, Serialize};

use crate::models::Creator;

/// A carpool listing. Ride requests carry only the route and contact; the
/// offer variant fills in the vehicle fields and a price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ride {
    pub id: i64,
    pub from_location: String,
    pub to_location: String,
    pub ride_date: String,
    pub ride_time: String,
    pub contact: String,
    #[serde(default)]
    pub vehicle_type: Option<String>,
    #[serde(default)]
    pub vehicle_model: Option<String>,
    #[serde(default)]
    pub vehicle_color: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    pub requester_id: i64,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub requester: Option<Creator>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RideCreate {
    pub from_location: String,
    pub to_location: String,
    pub ride_date: String,
    pub ride_time: String,
    pub contact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RideUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ride_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ride_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}
