// Feed normalization: merging the six listing kinds into one chronological
// activity feed, plus the bounded recent-interactions list behind the
// "recent activity" rail.

use chrono::{DateTime, NaiveDateTime};
use std::cmp::Reverse;

use crate::error::ApiResult;
use crate::http_client::HttpClient;
use crate::models::{ActivityItem, ActivityKind, Donation, Event, LostFoundItem, Product, Ride, Trip};
use crate::services::{
    DonationsClient, EventsClient, LostFoundClient, ProductsClient, RidesClient, TripsClient,
};

/// Default capacity of the recent-interactions list.
pub const RECENT_ACTIVITY_CAPACITY: usize = 10;

/// Parse a backend timestamp. Accepts RFC 3339 and the offset-less form the
/// backend emits; anything malformed is treated as absent.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_utc())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}

/// A listing type that can appear in the unified activity feed.
pub trait FeedSource {
    const KIND: ActivityKind;

    fn id(&self) -> i64;

    /// Creation timestamp, when the backend exposes one for this kind.
    fn created_at(&self) -> Option<NaiveDateTime>;

    fn to_activity(&self) -> ActivityItem;
}

impl FeedSource for Product {
    const KIND: ActivityKind = ActivityKind::Product;

    fn id(&self) -> i64 {
        self.id
    }

    fn created_at(&self) -> Option<NaiveDateTime> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }

    fn to_activity(&self) -> ActivityItem {
        ActivityItem::Product {
            id: self.id,
            title: self.title.clone(),
            price: Some(self.price),
            category: Some(self.category.clone()),
            image: self.images.first().map(|i| i.image_path.clone()),
            // Product responses reference the owner by id only
            creator: None,
        }
    }
}

impl FeedSource for Trip {
    const KIND: ActivityKind = ActivityKind::Trip;

    fn id(&self) -> i64 {
        self.id
    }

    fn created_at(&self) -> Option<NaiveDateTime> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }

    fn to_activity(&self) -> ActivityItem {
        ActivityItem::Trip {
            id: self.id,
            title: self.title.clone(),
            destination: Some(self.destination.clone()),
            cost_per_person: Some(self.cost_per_person),
            image: self.images.first().map(|i| i.image_path.clone()),
            creator: Some(self.creator.clone()),
        }
    }
}

impl FeedSource for Donation {
    const KIND: ActivityKind = ActivityKind::Donation;

    fn id(&self) -> i64 {
        self.id
    }

    fn created_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.created_at)
    }

    fn to_activity(&self) -> ActivityItem {
        ActivityItem::Donation {
            id: self.id,
            title: self.title.clone(),
            beneficiary: Some(self.beneficiary.clone()),
            goal_amount: Some(self.goal_amount),
            creator: Some(self.creator.clone()),
        }
    }
}

impl FeedSource for Event {
    const KIND: ActivityKind = ActivityKind::Event;

    fn id(&self) -> i64 {
        self.id
    }

    fn created_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.created_at)
    }

    fn to_activity(&self) -> ActivityItem {
        ActivityItem::Event {
            id: self.id,
            title: self.title.clone(),
            society: Some(self.society.clone()),
            location: Some(self.location.clone()),
            image: self.images.first().map(|i| i.image_path.clone()),
            creator: Some(self.creator.clone()),
        }
    }
}

impl FeedSource for Ride {
    const KIND: ActivityKind = ActivityKind::Ride;

    fn id(&self) -> i64 {
        self.id
    }

    fn created_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.created_at)
    }

    fn to_activity(&self) -> ActivityItem {
        ActivityItem::Ride {
            id: self.id,
            from_location: self.from_location.clone(),
            to_location: self.to_location.clone(),
            price: self.price,
            creator: self.requester.clone(),
        }
    }
}

impl FeedSource for LostFoundItem {
    const KIND: ActivityKind = ActivityKind::LostFound;

    fn id(&self) -> i64 {
        self.id
    }

    fn created_at(&self) -> Option<NaiveDateTime> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }

    fn to_activity(&self) -> ActivityItem {
        ActivityItem::LostFound {
            id: self.id,
            title: self.title.clone(),
            item_type: Some(self.item_type.clone()),
            location: Some(self.location.clone()),
            image: Some(self.image_path.clone()),
            creator: Some(self.creator.clone()),
        }
    }
}

struct FeedEntry {
    created_at: Option<NaiveDateTime>,
    item: ActivityItem,
}

/// Builds the unified latest-activity feed out of independently fetched
/// listing collections.
#[derive(Default)]
pub struct LatestFeed {
    entries: Vec<FeedEntry>,
}

impl LatestFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit at most `cap` items from the front of `items`. The small
    /// per-kind cap keeps one busy kind from drowning out the rest of a mixed
    /// feed. Empty collections are fine and contribute nothing.
    pub fn push_source<T: FeedSource>(&mut self, items: &[T], cap: usize) -> &mut Self {
        for item in items.iter().take(cap) {
            self.entries.push(FeedEntry {
                created_at: item.created_at(),
                item: item.to_activity(),
            });
        }
        self
    }

    /// Most recent first. Items without a timestamp sort as the oldest
    /// possible value, after everything that has one. The sort is stable, so
    /// equal timestamps keep the order sources were pushed in.
    pub fn finish(mut self) -> Vec<ActivityItem> {
        self.entries
            .sort_by_key(|e| Reverse(e.created_at.unwrap_or(NaiveDateTime::MIN)));
        self.entries.into_iter().map(|e| e.item).collect()
    }
}

/// Bounded most-recently-clicked list backing the "recent activity" rail.
///
/// Purely in-memory: it is seeded from the server snapshot at mount and then
/// updated locally on every click; whatever the server recorded via
/// `record_click` is all that survives a restart.
#[derive(Debug, Clone)]
pub struct RecentActivity {
    items: Vec<ActivityItem>,
    capacity: usize,
}

impl RecentActivity {
    pub fn new() -> Self {
        Self::with_capacity(RECENT_ACTIVITY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    /// Install the server-side snapshot fetched at mount.
    pub fn seed(&mut self, items: Vec<ActivityItem>) {
        self.items = items;
        self.items.truncate(self.capacity);
    }

    /// Record a click. An existing entry for the same (id, kind) pair moves
    /// to the front instead of duplicating, and the list never grows past
    /// capacity.
    pub fn record(&mut self, item: ActivityItem) {
        let key = (item.id(), item.kind());
        self.items
            .retain(|existing| (existing.id(), existing.kind()) != key);
        self.items.insert(0, item);
        self.items.truncate(self.capacity);
    }

    pub fn items(&self) -> &[ActivityItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for RecentActivity {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetches the six listing collections concurrently and merges them into one
/// chronological feed.
#[derive(Clone)]
pub struct FeedAggregator {
    products: ProductsClient,
    trips: TripsClient,
    donations: DonationsClient,
    events: EventsClient,
    rides: RidesClient,
    lost_found: LostFoundClient,
}

impl FeedAggregator {
    pub fn new(http: HttpClient) -> Self {
        Self {
            products: ProductsClient::new(http.clone()),
            trips: TripsClient::new(http.clone()),
            donations: DonationsClient::new(http.clone()),
            events: EventsClient::new(http.clone()),
            rides: RidesClient::new(http.clone()),
            lost_found: LostFoundClient::new(http),
        }
    }

    /// One concurrent fetch per kind, joined before merging. A failure in any
    /// collection fails the whole feed; callers wanting partial data can
    /// issue individual list calls instead.
    pub async fn latest(&self, per_kind: usize) -> ApiResult<Vec<ActivityItem>> {
        let limit = per_kind as u32;
        let (products, trips, donations, events, rides, lost_found) = tokio::try_join!(
            self.products.list(0, limit),
            self.trips.list(0, limit),
            self.donations.list(0, limit),
            self.events.list(),
            self.rides.list(0, limit),
            self.lost_found.list(),
        )?;

        let mut feed = LatestFeed::new();
        feed.push_source(&products, per_kind)
            .push_source(&trips, per_kind)
            .push_source(&donations, per_kind)
            .push_source(&events, per_kind)
            .push_source(&rides, per_kind)
            .push_source(&lost_found, per_kind);
        Ok(feed.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Creator;
    use serde_json::json;

    fn product(id: i64) -> Product {
        serde_json::from_value(json!({
            "id": id,
            "title": format!("Product {}", id),
            "description": "",
            "price": 500.0,
            "category": "Books",
            "pickup_location": "Gate 1",
            "condition": "used",
            "user_id": 1
        }))
        .unwrap()
    }

    fn trip(id: i64, created_at: &str) -> Trip {
        serde_json::from_value(json!({
            "id": id,
            "title": format!("Trip {}", id),
            "description": "",
            "destination": "Hunza",
            "start_date": "2025-06-01",
            "end_date": "2025-06-05",
            "departure_location": "Islamabad",
            "max_participants": 10,
            "cost_per_person": 15000.0,
            "creator_id": 1,
            "creator": {"id": 1, "username": "sara"},
            "created_at": created_at
        }))
        .unwrap()
    }

    fn ride_entry(id: i64) -> ActivityItem {
        ActivityItem::Ride {
            id,
            from_location: "H-12".to_string(),
            to_location: "F-10".to_string(),
            price: None,
            creator: Some(Creator {
                id: None,
                username: "bilal".to_string(),
                email: None,
                department: None,
            }),
        }
    }

    fn trip_entry(id: i64) -> ActivityItem {
        ActivityItem::Trip {
            id,
            title: format!("Trip {}", id),
            destination: None,
            cost_per_person: None,
            image: None,
            creator: None,
        }
    }

    #[test]
    fn test_feed_source_tags_match_declared_kind() {
        assert_eq!(product(1).to_activity().kind(), <Product as FeedSource>::KIND);
        assert_eq!(
            trip(1, "2025-03-01T10:00:00").to_activity().kind(),
            <Trip as FeedSource>::KIND
        );
    }

    #[test]
    fn test_parse_timestamp_accepts_both_forms() {
        assert!(parse_timestamp("2025-03-10T08:30:00").is_some());
        assert!(parse_timestamp("2025-03-10T08:30:00.123456").is_some());
        assert!(parse_timestamp("2025-03-10T08:30:00Z").is_some());
        assert!(parse_timestamp("last tuesday").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_merge_caps_each_kind_and_sorts_untimed_last() {
        // 3 products without timestamps, 2 trips with T2 > T1, cap 2:
        // the trips lead newest-first, then the first two products.
        let products = vec![product(1), product(2), product(3)];
        let trips = vec![
            trip(10, "2025-03-01T10:00:00"),
            trip(11, "2025-03-02T10:00:00"),
        ];

        let mut feed = LatestFeed::new();
        feed.push_source(&products, 2).push_source(&trips, 2);
        let merged = feed.finish();

        assert_eq!(merged.len(), 4);
        assert_eq!((merged[0].kind(), merged[0].id()), (ActivityKind::Trip, 11));
        assert_eq!((merged[1].kind(), merged[1].id()), (ActivityKind::Trip, 10));
        assert_eq!(
            (merged[2].kind(), merged[2].id()),
            (ActivityKind::Product, 1)
        );
        assert_eq!(
            (merged[3].kind(), merged[3].id()),
            (ActivityKind::Product, 2)
        );
    }

    #[test]
    fn test_merge_length_bound() {
        let products = vec![product(1)];
        let trips = vec![
            trip(10, "2025-03-01T10:00:00"),
            trip(11, "2025-03-02T10:00:00"),
            trip(12, "2025-03-03T10:00:00"),
        ];

        let mut feed = LatestFeed::new();
        feed.push_source(&products, 2).push_source(&trips, 2);
        let merged = feed.finish();

        // min(2, 1) + min(2, 3)
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_merge_of_empty_sources_is_empty() {
        let mut feed = LatestFeed::new();
        feed.push_source::<Product>(&[], 2)
            .push_source::<Trip>(&[], 2);
        assert!(feed.finish().is_empty());
    }

    #[test]
    fn test_equal_timestamps_keep_push_order() {
        let trips_a = vec![trip(1, "2025-03-01T10:00:00")];
        let trips_b = vec![trip(2, "2025-03-01T10:00:00")];

        let mut feed = LatestFeed::new();
        feed.push_source(&trips_a, 1).push_source(&trips_b, 1);
        let merged = feed.finish();

        assert_eq!(merged[0].id(), 1);
        assert_eq!(merged[1].id(), 2);
    }

    #[test]
    fn test_malformed_timestamp_sorts_as_oldest() {
        let trips = vec![trip(1, "not a date"), trip(2, "2025-03-01T10:00:00")];

        let mut feed = LatestFeed::new();
        feed.push_source(&trips, 2);
        let merged = feed.finish();

        assert_eq!(merged[0].id(), 2);
        assert_eq!(merged[1].id(), 1);
    }

    #[test]
    fn test_recent_list_never_exceeds_capacity() {
        let mut recent = RecentActivity::new();
        for id in 0..25 {
            recent.record(trip_entry(id));
        }
        assert_eq!(recent.len(), RECENT_ACTIVITY_CAPACITY);
        // Newest click first
        assert_eq!(recent.items()[0].id(), 24);
    }

    #[test]
    fn test_recent_list_dedupes_by_id_and_kind() {
        let mut recent = RecentActivity::new();
        recent.record(trip_entry(5));
        recent.record(trip_entry(5));
        recent.record(ride_entry(7));

        assert_eq!(recent.len(), 2);
        assert_eq!(
            (recent.items()[0].kind(), recent.items()[0].id()),
            (ActivityKind::Ride, 7)
        );
        assert_eq!(
            (recent.items()[1].kind(), recent.items()[1].id()),
            (ActivityKind::Trip, 5)
        );
    }

    #[test]
    fn test_recent_list_same_id_different_kind_both_kept() {
        let mut recent = RecentActivity::new();
        recent.record(trip_entry(5));
        recent.record(ride_entry(5));
        assert_eq!(recent.len(), 2);
    }

    #[test]
    fn test_seed_truncates_to_capacity() {
        let mut recent = RecentActivity::with_capacity(3);
        recent.seed((0..8).map(trip_entry).collect());
        assert_eq!(recent.len(), 3);
        assert_eq!(recent.items()[0].id(), 0);
    }

    #[test]
    fn test_record_after_seed_moves_existing_to_front() {
        let mut recent = RecentActivity::with_capacity(5);
        recent.seed(vec![trip_entry(1), trip_entry(2), trip_entry(3)]);
        recent.record(trip_entry(3));

        assert_eq!(recent.len(), 3);
        assert_eq!(recent.items()[0].id(), 3);
        assert_eq!(recent.items()[1].id(), 1);
    }
}
