use crate::error::ApiResult;
use crate::http_client::HttpClient;
use crate::models::{Ride, RideCreate, RideUpdate};

/// Typed client for the carpool endpoints.
#[derive(Clone)]
pub struct RidesClient {
    http: HttpClient,
}

impl RidesClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self, skip: u32, limit: u32) -> ApiResult<Vec<Ride>> {
        self.http
            .get_json_query("/rides/", &[("skip", skip), ("limit", limit)])
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch rides: {}", e))
    }

    /// The current user's own rides.
    pub async fn mine(&self, skip: u32, limit: u32) -> ApiResult<Vec<Ride>> {
        self.http
            .get_json_query("/rides/me", &[("skip", skip), ("limit", limit)])
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch my rides: {}", e))
    }

    pub async fn get(&self, ride_id: i64) -> ApiResult<Ride> {
        self.http
            .get_json(&format!("/rides/{}", ride_id))
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch ride {}: {}", ride_id, e))
    }

    pub async fn create(&self, ride: &RideCreate) -> ApiResult<Ride> {
        self.http
            .post_json("/rides/", ride)
            .await
            .inspect_err(|e| tracing::error!("Failed to create ride: {}", e))
    }

    pub async fn update(&self, ride_id: i64, update: &RideUpdate) -> ApiResult<Ride> {
        self.http
            .put_json(&format!("/rides/{}", ride_id), update)
            .await
            .inspect_err(|e| tracing::error!("Failed to update ride {}: {}", ride_id, e))
    }

    pub async fn delete(&self, ride_id: i64) -> ApiResult<()> {
        self.http
            .delete(&format!("/rides/{}", ride_id))
            .await
            .inspect_err(|e| tracing::error!("Failed to delete ride {}: {}", ride_id, e))
    }
}
