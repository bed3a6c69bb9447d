use serde::Serialize;

use crate::error::ApiResult;
use crate::http_client::HttpClient;
use crate::models::Token;

#[derive(Serialize)]
struct LoginForm<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SocialLoginRequest<'a> {
    email: &'a str,
}

/// Typed client for the authentication endpoints.
#[derive(Clone)]
pub struct AuthClient {
    http: HttpClient,
}

impl AuthClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Password login. The backend speaks the OAuth2 password flow, so the
    /// form's `username` field carries the email address.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<Token> {
        let form = LoginForm {
            username: email,
            password,
        };
        self.http
            .post_form("/login", &form)
            .await
            .inspect_err(|e| tracing::error!("Login failed: {}", e))
    }

    /// Token for an account the external identity provider already vouched
    /// for; the backend only checks the account exists.
    pub async fn social_login(&self, email: &str) -> ApiResult<Token> {
        self.http
            .post_json("/authentication/login/social", &SocialLoginRequest { email })
            .await
            .inspect_err(|e| tracing::error!("Social login check failed: {}", e))
    }
}
