use crate::error::ApiResult;
use crate::http_client::HttpClient;
use crate::models::DashboardCard;

/// Typed client for the server-side pre-merged activity feed.
#[derive(Clone)]
pub struct DashboardClient {
    http: HttpClient,
}

impl DashboardClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Latest posts across every category, already merged and sorted by the
    /// backend. The simpler alternative to assembling the feed client-side.
    pub async fn latest(&self, limit: u32) -> ApiResult<Vec<DashboardCard>> {
        self.http
            .get_json_query("/dashboard/latest", &[("limit", limit)])
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch latest posts: {}", e))
    }
}
