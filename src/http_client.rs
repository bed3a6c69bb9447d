use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::session::SessionStore;

/// Fixed request timeout; the backend has no long-running endpoints.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared transport for all resource clients.
///
/// Cloning is cheap: clones share the inner connection pool and the session
/// store, so one login is visible to every client built from the same
/// transport.
#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
    session: SessionStore,
}

impl HttpClient {
    pub fn new(config: &Config, session: SessionStore) -> Self {
        Self {
            base_url: config.base_url.clone(),
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
            session,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build a request for `path`, attaching `Authorization: Bearer <token>`
    /// when the session holds a token.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.request(Method::GET, path).send().await?;
        Self::decode(response).await
    }

    pub async fn get_json_query<T, Q>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self.request(Method::GET, path).query(query).send().await?;
        Self::decode(response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.request(Method::POST, path).json(body).send().await?;
        Self::decode(response).await
    }

    /// POST an `application/x-www-form-urlencoded` body (the OAuth2 password
    /// login flow).
    pub async fn post_form<B, T>(&self, path: &str, form: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.request(Method::POST, path).form(form).send().await?;
        Self::decode(response).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.request(Method::PUT, path).json(body).send().await?;
        Self::decode(response).await
    }

    /// PATCH without a request body (the lost-and-found claim action).
    pub async fn patch_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.request(Method::PATCH, path).send().await?;
        Self::decode(response).await
    }

    /// DELETE; the backend answers 204 with an empty body on success.
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        let response = self.request(Method::DELETE, path).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Map non-2xx responses to `ApiError::Status`, pulling the message out of
    /// the backend's `{"detail": ...}` error body when present.
    async fn check_status(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str().map(String::from)))
            .unwrap_or(body);
        Err(ApiError::Status { status, message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with(session: SessionStore) -> HttpClient {
        HttpClient::new(&Config::new("http://localhost:8000"), session)
    }

    #[test]
    fn test_no_token_no_auth_header() {
        let client = client_with(SessionStore::new());
        let request = client.request(Method::GET, "/products/").build().unwrap();
        assert!(request.headers().get("authorization").is_none());
    }

    #[test]
    fn test_bearer_token_attached() {
        let client = client_with(SessionStore::with_token("abc"));
        let request = client.request(Method::GET, "/products/").build().unwrap();
        assert_eq!(request.headers()["authorization"], "Bearer abc");
    }

    #[test]
    fn test_token_set_after_construction_is_picked_up() {
        let session = SessionStore::new();
        let client = client_with(session.clone());
        session.set_token("later");
        let request = client.request(Method::GET, "/trips/").build().unwrap();
        assert_eq!(request.headers()["authorization"], "Bearer later");
    }

    #[test]
    fn test_delete_request_shape() {
        let client = client_with(SessionStore::new());
        let request = client
            .request(Method::DELETE, "/donations/7")
            .build()
            .unwrap();
        assert_eq!(request.method(), &Method::DELETE);
        assert_eq!(request.url().as_str(), "http://localhost:8000/donations/7");
    }
}
