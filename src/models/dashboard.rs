use serde::{Deserialize, Serialize};

use crate::models::ActivityKind;

/// Server-side pre-merged feed entry from `/dashboard/latest`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardCard {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
    pub creator_username: String,
    pub created_at: String,
}
