//! Gateway error kinds and their HTTP mapping.
//!
//! Only two failures exist and both end the request: a rejected login
//! (`400` with an OAuth-style JSON body) and a missing or wrong bearer
//! token (`401` with a plain-text body).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use jsonapi::ErrorResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// Username or password did not match. Which one is never reported.
    #[error("invalid_grant")]
    InvalidGrant,
    /// `Authorization` header absent or not exactly the expected bearer value.
    #[error("Unauthorized")]
    Unauthorized,
}

impl GatewayError {
    #[must_use]
    pub fn status(self) -> StatusCode {
        match self {
            Self::InvalidGrant => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidGrant => {
                (self.status(), Json(ErrorResponse { error: self.to_string() })).into_response()
            }
            Self::Unauthorized => (self.status(), "Unauthorized").into_response(),
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
