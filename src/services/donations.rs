use crate::error::ApiResult;
use crate::http_client::HttpClient;
use crate::models::{Donation, DonationCreate, DonationUpdate};

/// Typed client for the donation-drive endpoints.
#[derive(Clone)]
pub struct DonationsClient {
    http: HttpClient,
}

impl DonationsClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self, skip: u32, limit: u32) -> ApiResult<Vec<Donation>> {
        self.http
            .get_json_query("/donations/", &[("skip", skip), ("limit", limit)])
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch donations: {}", e))
    }

    /// The current user's own drives.
    pub async fn mine(&self, skip: u32, limit: u32) -> ApiResult<Vec<Donation>> {
        self.http
            .get_json_query("/donations/me", &[("skip", skip), ("limit", limit)])
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch my donations: {}", e))
    }

    pub async fn get(&self, donation_id: i64) -> ApiResult<Donation> {
        self.http
            .get_json(&format!("/donations/{}", donation_id))
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch donation {}: {}", donation_id, e))
    }

    pub async fn create(&self, donation: &DonationCreate) -> ApiResult<Donation> {
        self.http
            .post_json("/donations/", donation)
            .await
            .inspect_err(|e| tracing::error!("Failed to create donation: {}", e))
    }

    pub async fn update(&self, donation_id: i64, update: &DonationUpdate) -> ApiResult<Donation> {
        self.http
            .put_json(&format!("/donations/{}", donation_id), update)
            .await
            .inspect_err(|e| tracing::error!("Failed to update donation {}: {}", donation_id, e))
    }

    pub async fn delete(&self, donation_id: i64) -> ApiResult<()> {
        self.http
            .delete(&format!("/donations/{}", donation_id))
            .await
            .inspect_err(|e| tracing::error!("Failed to delete donation {}: {}", donation_id, e))
    }
}
