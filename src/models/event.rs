use serde::{Deserialize, Serialize};

use crate::models::Creator;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventImage {
    pub id: i64,
    pub image_path: String,
    pub event_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub society: String,
    pub location: String,
    pub event_date: String,
    #[serde(default)]
    pub contact_number: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub creator_id: i64,
    pub creator: Creator,
    #[serde(default)]
    pub images: Vec<EventImage>,
    #[serde(default)]
    pub max_attendees: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCreate {
    pub title: String,
    pub description: String,
    pub society: String,
    pub location: String,
    pub event_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_paths: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<i32>,
}
