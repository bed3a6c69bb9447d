use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Creator;

/// Lifecycle of a lost-and-found listing. Claiming moves any item to
/// `Claimed` regardless of whether it started lost or found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemStatus {
    Lost,
    Found,
    Claimed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LostFoundItem {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub location: String,
    pub date: NaiveDate,
    pub description: String,
    pub image_path: String,
    pub contact_method: String,
    pub contact_info: String,
    /// "lost" or "found"
    #[serde(rename = "type")]
    pub item_type: String,
    pub status: ItemStatus,
    pub creator_id: i64,
    pub creator: Creator,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LostFoundItemCreate {
    pub title: String,
    pub category: String,
    pub location: String,
    pub date: NaiveDate,
    pub description: String,
    pub image_path: String,
    pub contact_method: String,
    pub contact_info: String,
    #[serde(rename = "type")]
    pub item_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_uses_uppercase_wire_names() {
        assert_eq!(
            serde_json::to_string(&ItemStatus::Claimed).unwrap(),
            "\"CLAIMED\""
        );
        let status: ItemStatus = serde_json::from_str("\"LOST\"").unwrap();
        assert_eq!(status, ItemStatus::Lost);
    }

    #[test]
    fn test_type_field_round_trips_under_rename() {
        let item: LostFoundItem = serde_json::from_value(serde_json::json!({
            "id": 3,
            "title": "Black wallet",
            "category": "Accessories",
            "location": "C1 cafeteria",
            "date": "2025-03-10",
            "description": "Leather wallet with student card",
            "image_path": "/uploads/wallet.jpg",
            "contact_method": "phone",
            "contact_info": "0300-1234567",
            "type": "found",
            "status": "FOUND",
            "creator_id": 9,
            "creator": {"id": 9, "username": "hamza"}
        }))
        .unwrap();
        assert_eq!(item.item_type, "found");
        assert_eq!(item.status, ItemStatus::Found);
    }
}
