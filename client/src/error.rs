//! Client error types.
//!
//! ERROR HANDLING
//! ==============
//! Transport and protocol failures surface as [`ClientError`]. The resolver
//! folds them into [`ResolveError`], which is `Clone` so it can be published
//! through a `watch` channel alongside the resolved value.

/// Errors produced by [`crate::net::api::ApiClient`] and [`crate::state::session::Session`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The base URL could not be parsed or is not http(s).
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The HTTP request failed or the body could not be decoded.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// `POST /token` answered `400 invalid_grant`.
    #[error("invalid username or password")]
    InvalidGrant,

    /// A protected endpoint answered `401`.
    #[error("unauthorized")]
    Unauthorized,

    /// A protected call was attempted with no token in the session.
    #[error("session is not authenticated")]
    NotAuthenticated,

    /// Any status the endpoint does not define.
    #[error("unexpected status {status} from {path}")]
    UnexpectedStatus { status: u16, path: String },
}

/// Why the current user could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The user query failed; carries the underlying message.
    #[error("user lookup failed: {0}")]
    Fetch(String),

    /// The query succeeded but returned no users.
    #[error("no user matched the current-user filter")]
    NoMatch,
}

impl From<ClientError> for ResolveError {
    fn from(err: ClientError) -> Self {
        Self::Fetch(err.to_string())
    }
}
