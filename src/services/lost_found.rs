use crate::error::ApiResult;
use crate::http_client::HttpClient;
use crate::models::{LostFoundItem, LostFoundItemCreate};

/// Typed client for the lost-and-found endpoints.
#[derive(Clone)]
pub struct LostFoundClient {
    http: HttpClient,
}

impl LostFoundClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ApiResult<Vec<LostFoundItem>> {
        self.http
            .get_json("/lost-found/")
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch lost and found items: {}", e))
    }

    /// The current user's own items.
    pub async fn mine(&self, skip: u32, limit: u32) -> ApiResult<Vec<LostFoundItem>> {
        self.http
            .get_json_query("/lost-found/me", &[("skip", skip), ("limit", limit)])
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch my lost and found items: {}", e))
    }

    pub async fn get(&self, item_id: i64) -> ApiResult<LostFoundItem> {
        self.http
            .get_json(&format!("/lost-found/{}", item_id))
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch lost and found item {}: {}", item_id, e))
    }

    pub async fn create(&self, item: &LostFoundItemCreate) -> ApiResult<LostFoundItem> {
        self.http
            .post_json("/lost-found/", item)
            .await
            .inspect_err(|e| tracing::error!("Lost and found creation failed: {}", e))
    }

    /// Mark an item as claimed. The backend flips the status to `CLAIMED` and
    /// returns the updated item.
    pub async fn claim(&self, item_id: i64) -> ApiResult<LostFoundItem> {
        self.http
            .patch_json(&format!("/lost-found/{}/claim", item_id))
            .await
            .inspect_err(|e| tracing::error!("Failed to claim item {}: {}", item_id, e))
    }
}
