use crate::error::ApiResult;
use crate::http_client::HttpClient;
use crate::models::{User, UserCreate, UserProfile};

/// Typed client for signup and the profile endpoint.
#[derive(Clone)]
pub struct UsersClient {
    http: HttpClient,
}

impl UsersClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn create(&self, user: &UserCreate) -> ApiResult<User> {
        self.http
            .post_json("/users/", user)
            .await
            .inspect_err(|e| tracing::error!("User creation failed: {}", e))
    }

    /// The current user's profile: account info, per-kind listing counts and
    /// the most recent items of each kind.
    pub async fn profile(&self) -> ApiResult<UserProfile> {
        self.http
            .get_json("/users/me/profile/")
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch profile: {}", e))
    }
}
