use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Creator;

/// Discriminator shared by every feed surface: the unified activity list, the
/// recent-interactions list, and click recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Product,
    Trip,
    Donation,
    Event,
    Ride,
    LostFound,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Product => "product",
            ActivityKind::Trip => "trip",
            ActivityKind::Donation => "donation",
            ActivityKind::Event => "event",
            ActivityKind::Ride => "ride",
            ActivityKind::LostFound => "lost_found",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the heterogeneous activity feed, tagged by item kind.
///
/// The wire shape is a flat object with a `type` discriminator; each kind
/// carries its own summary fields. The payload fields are optional because
/// client-assembled entries (built from list responses) and server-assembled
/// entries (the recent-items endpoint) fill in slightly different subsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActivityItem {
    Product {
        id: i64,
        title: String,
        #[serde(default)]
        price: Option<f64>,
        #[serde(default)]
        category: Option<String>,
        #[serde(default)]
        image: Option<String>,
        #[serde(default)]
        creator: Option<Creator>,
    },
    Trip {
        id: i64,
        title: String,
        #[serde(default)]
        destination: Option<String>,
        #[serde(default)]
        cost_per_person: Option<f64>,
        #[serde(default)]
        image: Option<String>,
        #[serde(default)]
        creator: Option<Creator>,
    },
    Donation {
        id: i64,
        title: String,
        #[serde(default)]
        beneficiary: Option<String>,
        #[serde(default)]
        goal_amount: Option<f64>,
        #[serde(default)]
        creator: Option<Creator>,
    },
    Event {
        id: i64,
        title: String,
        #[serde(default)]
        society: Option<String>,
        #[serde(default)]
        location: Option<String>,
        #[serde(default)]
        image: Option<String>,
        #[serde(default)]
        creator: Option<Creator>,
    },
    Ride {
        id: i64,
        from_location: String,
        to_location: String,
        #[serde(default)]
        price: Option<f64>,
        #[serde(default)]
        creator: Option<Creator>,
    },
    LostFound {
        id: i64,
        title: String,
        /// "lost" or "found"
        #[serde(default, rename = "type_")]
        item_type: Option<String>,
        #[serde(default)]
        location: Option<String>,
        #[serde(default)]
        image: Option<String>,
        #[serde(default)]
        creator: Option<Creator>,
    },
}

impl ActivityItem {
    pub fn kind(&self) -> ActivityKind {
        match self {
            ActivityItem::Product { .. } => ActivityKind::Product,
            ActivityItem::Trip { .. } => ActivityKind::Trip,
            ActivityItem::Donation { .. } => ActivityKind::Donation,
            ActivityItem::Event { .. } => ActivityKind::Event,
            ActivityItem::Ride { .. } => ActivityKind::Ride,
            ActivityItem::LostFound { .. } => ActivityKind::LostFound,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            ActivityItem::Product { id, .. }
            | ActivityItem::Trip { id, .. }
            | ActivityItem::Donation { id, .. }
            | ActivityItem::Event { id, .. }
            | ActivityItem::Ride { id, .. }
            | ActivityItem::LostFound { id, .. } => *id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInteractionCreate {
    pub item_id: i64,
    pub item_type: ActivityKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInteractionResponse {
    pub id: i64,
    pub user_id: i64,
    pub item_id: i64,
    pub item_type: ActivityKind,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ActivityKind::LostFound).unwrap(),
            "\"lost_found\""
        );
        assert_eq!(ActivityKind::Ride.as_str(), "ride");
    }

    #[test]
    fn test_recent_item_wire_shape_decodes() {
        let item: ActivityItem = serde_json::from_value(serde_json::json!({
            "id": 12,
            "type": "trip",
            "title": "Hunza valley trip",
            "destination": "Hunza",
            "cost_per_person": 15000.0,
            "image": "/uploads/hunza.jpg",
            "creator": {"username": "sara"}
        }))
        .unwrap();
        assert_eq!(item.kind(), ActivityKind::Trip);
        assert_eq!(item.id(), 12);
    }

    #[test]
    fn test_lost_found_type_underscore_field() {
        let item: ActivityItem = serde_json::from_value(serde_json::json!({
            "id": 4,
            "type": "lost_found",
            "title": "Black wallet",
            "type_": "lost",
            "location": "Library",
            "creator": {"username": "hamza"}
        }))
        .unwrap();
        match item {
            ActivityItem::LostFound { item_type, .. } => {
                assert_eq!(item_type.as_deref(), Some("lost"));
            }
            other => panic!("decoded as {:?}", other),
        }
    }

    #[test]
    fn test_ride_entry_has_route_instead_of_title() {
        let item: ActivityItem = serde_json::from_value(serde_json::json!({
            "id": 8,
            "type": "ride",
            "from_location": "H-12",
            "to_location": "F-10 Markaz",
            "price": 300.0,
            "creator": {"username": "bilal"}
        }))
        .unwrap();
        assert_eq!(item.kind(), ActivityKind::Ride);
    }
}
