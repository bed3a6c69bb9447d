use crate::error::ApiResult;
use crate::http_client::HttpClient;
use crate::models::{Trip, TripCreate};

/// Typed client for the group-travel trip endpoints.
#[derive(Clone)]
pub struct TripsClient {
    http: HttpClient,
}

impl TripsClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self, skip: u32, limit: u32) -> ApiResult<Vec<Trip>> {
        self.http
            .get_json_query("/trips/", &[("skip", skip), ("limit", limit)])
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch trips: {}", e))
    }

    pub async fn get(&self, trip_id: i64) -> ApiResult<Trip> {
        self.http
            .get_json(&format!("/trips/{}", trip_id))
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch trip {}: {}", trip_id, e))
    }

    pub async fn create(&self, trip: &TripCreate) -> ApiResult<Trip> {
        self.http
            .post_json("/trips/", trip)
            .await
            .inspect_err(|e| tracing::error!("Trip creation failed: {}", e))
    }
}
