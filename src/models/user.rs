use serde::{Deserialize, Serialize};

use crate::models::{Donation, Event, LostFoundItem, Product, Ride, Trip};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub department: String,
}

/// Creator reference embedded in listing responses. Different endpoints embed
/// different subsets, so everything but the username is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub department: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileStats {
    pub product_count: i64,
    pub trip_count: i64,
    pub ride_count: i64,
    pub donation_count: i64,
    pub event_count: i64,
    pub lost_found_count: i64,
}

/// Aggregate profile payload: the user plus per-kind counts and the five most
/// recent items of each kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user: User,
    pub stats: ProfileStats,
    pub recent_products: Vec<Product>,
    pub recent_trips: Vec<Trip>,
    pub recent_rides: Vec<Ride>,
    pub recent_donations: Vec<Donation>,
    pub recent_events: Vec<Event>,
    pub recent_lost_found: Vec<LostFoundItem>,
}
