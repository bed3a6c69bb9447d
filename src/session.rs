use std::sync::{Arc, RwLock};

use crate::error::ApiResult;
use crate::models::User;
use crate::services::{AuthClient, UsersClient};

/// Shared bearer-token cell injected into the HTTP client.
///
/// Clones share the same cell, so a login through one handle is visible to
/// every client built from the same store.
#[derive(Clone, Default)]
pub struct SessionStore {
    token: Arc<RwLock<Option<String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        store.set_token(token);
        store
    }

    /// Current bearer token, if a user is logged in.
    pub fn token(&self) -> Option<String> {
        self.token.read().expect("session lock poisoned").clone()
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().expect("session lock poisoned") = Some(token.into());
    }

    pub fn clear(&self) {
        *self.token.write().expect("session lock poisoned") = None;
    }
}

/// Current-user state resolved from the stored token.
#[derive(Clone)]
pub struct Session {
    store: SessionStore,
    auth: AuthClient,
    users: UsersClient,
    user: Arc<RwLock<Option<User>>>,
}

impl Session {
    pub fn new(store: SessionStore, auth: AuthClient, users: UsersClient) -> Self {
        Self {
            store,
            auth,
            users,
            user: Arc::new(RwLock::new(None)),
        }
    }

    /// Resolve the current user from the stored token.
    ///
    /// Any failure (no token, rejected token, network) leaves the cached user
    /// unset; it is logged and never propagated.
    pub async fn resolve(&self) -> Option<User> {
        if self.store.token().is_none() {
            self.set_user(None);
            return None;
        }
        match self.users.profile().await {
            Ok(profile) => {
                self.set_user(Some(profile.user.clone()));
                Some(profile.user)
            }
            Err(e) => {
                tracing::debug!("Could not resolve current user: {}", e);
                self.set_user(None);
                None
            }
        }
    }

    pub fn user(&self) -> Option<User> {
        self.user.read().expect("session lock poisoned").clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    /// Whether `creator_id` refers to the current user. Listing pages use this
    /// to decide whether edit/delete actions are shown; the backend enforces
    /// ownership on its own.
    pub fn is_mine(&self, creator_id: i64) -> bool {
        self.user().map(|u| u.id == creator_id).unwrap_or(false)
    }

    /// Exchange credentials for a token, store it, and resolve the user.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<Option<User>> {
        let token = self.auth.login(email, password).await?;
        self.store.set_token(token.access_token);
        Ok(self.resolve().await)
    }

    /// Social-login variant: the identity provider already vouched for the
    /// email, the backend only checks the account exists.
    pub async fn login_social(&self, email: &str) -> ApiResult<Option<User>> {
        let token = self.auth.social_login(email).await?;
        self.store.set_token(token.access_token);
        Ok(self.resolve().await)
    }

    pub fn logout(&self) {
        self.store.clear();
        self.set_user(None);
    }

    fn set_user(&self, user: Option<User>) {
        *self.user.write().expect("session lock poisoned") = user;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_starts_empty() {
        let store = SessionStore::new();
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_set_and_clear_token() {
        let store = SessionStore::new();
        store.set_token("abc");
        assert_eq!(store.token().as_deref(), Some("abc"));
        store.clear();
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_clones_share_the_token_cell() {
        let store = SessionStore::new();
        let clone = store.clone();
        store.set_token("abc");
        assert_eq!(clone.token().as_deref(), Some("abc"));
    }
}
