//! Token issue and bearer validation.
//!
//! ARCHITECTURE
//! ============
//! There is exactly one accepted credential pair and one token. Issuing is a
//! pair of string comparisons and validation is one, so both stay pure and
//! the route layer only translates HTTP in and out.

use jsonapi::{ACCESS_TOKEN, LOGIN_PASSWORD, LOGIN_USERNAME};
use serde::Deserialize;

use crate::error::GatewayError;

const BEARER_PREFIX: &str = "Bearer ";

/// Form body of `POST /token`.
///
/// Both fields are optional so a body missing either one is a failed login
/// rather than a parse error. Unknown fields such as `grant_type` are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Exchange credentials for the access token.
///
/// # Errors
///
/// [`GatewayError::InvalidGrant`] on any mismatch or missing field.
pub fn issue_token(request: &TokenRequest) -> Result<&'static str, GatewayError> {
    let username_ok = request.username.as_deref() == Some(LOGIN_USERNAME);
    let password_ok = request.password.as_deref() == Some(LOGIN_PASSWORD);
    if username_ok && password_ok { Ok(ACCESS_TOKEN) } else { Err(GatewayError::InvalidGrant) }
}

/// Check a raw `Authorization` header value.
///
/// Only the exact string `Bearer <token>` passes: no case folding, no
/// whitespace trimming.
///
/// # Errors
///
/// [`GatewayError::Unauthorized`] for a missing header or any other value.
pub fn validate_authorization(header: Option<&str>) -> Result<(), GatewayError> {
    match header.and_then(|value| value.strip_prefix(BEARER_PREFIX)) {
        Some(token) if token == ACCESS_TOKEN => Ok(()),
        _ => Err(GatewayError::Unauthorized),
    }
}

#[cfg(test)]
#[path = "token_test.rs"]
mod tests;
