use crate::error::ApiResult;
use crate::http_client::HttpClient;
use crate::models::{Event, EventCreate, EventUpdate};

/// Typed client for the campus event and giveaway endpoints.
#[derive(Clone)]
pub struct EventsClient {
    http: HttpClient,
}

impl EventsClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ApiResult<Vec<Event>> {
        self.http
            .get_json("/events/")
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch events: {}", e))
    }

    /// The current user's own events.
    pub async fn mine(&self, skip: u32, limit: u32) -> ApiResult<Vec<Event>> {
        self.http
            .get_json_query("/events/me", &[("skip", skip), ("limit", limit)])
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch my events: {}", e))
    }

    pub async fn get(&self, event_id: i64) -> ApiResult<Event> {
        self.http
            .get_json(&format!("/events/{}", event_id))
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch event {}: {}", event_id, e))
    }

    pub async fn create(&self, event: &EventCreate) -> ApiResult<Event> {
        self.http
            .post_json("/events/", event)
            .await
            .inspect_err(|e| tracing::error!("Event creation failed: {}", e))
    }

    pub async fn update(&self, event_id: i64, update: &EventUpdate) -> ApiResult<Event> {
        self.http
            .put_json(&format!("/events/{}", event_id), update)
            .await
            .inspect_err(|e| tracing::error!("Failed to update event {}: {}", event_id, e))
    }

    pub async fn delete(&self, event_id: i64) -> ApiResult<()> {
        self.http
            .delete(&format!("/events/{}", event_id))
            .await
            .inspect_err(|e| tracing::error!("Failed to delete event {}: {}", event_id, e))
    }
}
