use crate::error::ApiResult;
use crate::http_client::HttpClient;
use crate::models::{ActivityItem, ActivityKind, UserInteractionCreate, UserInteractionResponse};

/// Typed client for click recording and the recent-activity rail.
#[derive(Clone)]
pub struct InteractionsClient {
    http: HttpClient,
}

impl InteractionsClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn record_click(
        &self,
        item_id: i64,
        item_type: ActivityKind,
    ) -> ApiResult<UserInteractionResponse> {
        let body = UserInteractionCreate { item_id, item_type };
        self.http
            .post_json("/interactions/click", &body)
            .await
            .inspect_err(|e| tracing::error!("Failed to record interaction: {}", e))
    }

    /// Fire-and-forget click recording.
    ///
    /// Navigation must not wait on the interaction POST, so this spawns the
    /// request and swallows any failure after logging it. Nothing is reported
    /// back to the caller.
    pub fn record_click_detached(&self, item_id: i64, item_type: ActivityKind) {
        let client = self.clone();
        tokio::spawn(async move {
            if let Err(e) = client.record_click(item_id, item_type).await {
                tracing::warn!(
                    "Dropped {} click for item {}: {}",
                    item_type,
                    item_id,
                    e
                );
            }
        });
    }

    /// Most recently clicked items for the current user, deduplicated
    /// server-side by (kind, id) with the newest click winning.
    pub async fn recent_items(&self, limit: u32) -> ApiResult<Vec<ActivityItem>> {
        self.http
            .get_json_query("/interactions/user/recent-items", &[("limit", limit)])
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch recent activity items: {}", e))
    }
}
