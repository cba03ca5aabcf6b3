//! Auth-session state for the current client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds the access token once login succeeds and publishes
//! `is_authenticated` as a `watch` value. The current-user resolver
//! subscribes to that value; everything else reads it directly.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use jsonapi::{Code, User};
use tokio::sync::watch;

use super::current_user::{CurrentUser, UserSource};
use crate::error::ClientError;
use crate::net::api::ApiClient;

pub struct Session {
    api: ApiClient,
    token: RwLock<Option<String>>,
    authenticated: watch::Sender<bool>,
}

impl Session {
    /// New, unauthenticated session.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        let (authenticated, _) = watch::channel(false);
        Self { api, token: RwLock::new(None), authenticated }
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        *self.authenticated.borrow()
    }

    /// Observe `is_authenticated`. The receiver sees every transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.authenticated.subscribe()
    }

    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Log in with a username/password pair.
    ///
    /// On failure the session is left exactly as it was.
    ///
    /// # Errors
    ///
    /// [`ClientError::InvalidGrant`] for rejected credentials, or any
    /// transport error.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<(), ClientError> {
        let token = self.api.request_token(username, password).await.inspect_err(|e| {
            tracing::warn!(error = %e, username, "authentication failed");
        })?;
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token);
        self.set_authenticated(true);
        Ok(())
    }

    /// Drop the token and mark the session unauthenticated.
    pub fn invalidate(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
        self.set_authenticated(false);
    }

    /// Publish only real transitions so observers do not recompute on no-ops.
    fn set_authenticated(&self, value: bool) {
        let changed = self.authenticated.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        });
        if changed {
            tracing::debug!(authenticated = value, "session state changed");
        }
    }

    /// Fetch the protected code list with the session token.
    ///
    /// # Errors
    ///
    /// [`ClientError::NotAuthenticated`] without making a request when there
    /// is no token; [`ClientError::Unauthorized`] if the gateway rejects it.
    pub async fn codes(&self) -> Result<Vec<Code>, ClientError> {
        let token = self.access_token().ok_or(ClientError::NotAuthenticated)?;
        self.api.list_codes(&token).await
    }

    /// Derived current-user value bound to this session's state.
    #[must_use]
    pub fn current_user(self: &Arc<Self>) -> CurrentUser {
        CurrentUser::spawn(Arc::clone(self) as Arc<dyn UserSource>, self.subscribe())
    }
}

/// Users are queried with the session token attached when there is one.
#[async_trait]
impl UserSource for Session {
    async fn query_users(&self, email: &str) -> Result<Vec<User>, ClientError> {
        let token = self.access_token();
        self.api.query_users(Some(email), token.as_deref()).await
    }
}
