use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Creator;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationImage {
    pub id: i64,
    pub image_path: String,
    pub donation_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Donation {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub beneficiary: String,
    pub goal_amount: f64,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub contact_number: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub creator_id: i64,
    pub creator: Creator,
    #[serde(default)]
    pub images: Vec<DonationImage>,
}

impl Donation {
    /// Days remaining until the drive closes, clamped at zero once the end
    /// date has passed.
    pub fn days_left(&self) -> i64 {
        (self.end_date - Utc::now().date_naive()).num_days().max(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationCreate {
    pub title: String,
    pub description: String,
    pub beneficiary: String,
    pub goal_amount: f64,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_paths: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DonationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_paths: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn donation(end_date: NaiveDate) -> Donation {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "Flood relief",
            "description": "Supplies for affected families",
            "beneficiary": "Flood victims",
            "goal_amount": 50000.0,
            "end_date": end_date.to_string(),
            "created_at": "2025-01-01T00:00:00",
            "updated_at": "2025-01-01T00:00:00",
            "creator_id": 1,
            "creator": {"id": 1, "username": "ayesha"}
        }))
        .unwrap()
    }

    #[test]
    fn test_days_left_counts_down_to_end_date() {
        let d = donation(Utc::now().date_naive() + Duration::days(7));
        assert_eq!(d.days_left(), 7);
    }

    #[test]
    fn test_days_left_clamps_after_end_date() {
        let d = donation(Utc::now().date_naive() - Duration::days(3));
        assert_eq!(d.days_left(), 0);
    }
}
