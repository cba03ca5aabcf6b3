//! Auth routes — token issue and the bearer-token extractor.

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, FromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::response::Json;
use jsonapi::TokenResponse;

use crate::error::GatewayError;
use crate::services::token::{self, TokenRequest};

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Proof that the request carried the access token.
/// Use as a handler parameter to require authentication.
#[derive(Debug, Clone, Copy)]
pub struct Bearer;

impl<S> FromRequestParts<S> for Bearer
where
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        token::validate_authorization(header).inspect_err(|_| {
            tracing::debug!(path = %parts.uri.path(), present = header.is_some(), "bearer rejected");
        })?;
        Ok(Self)
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /token` — exchange form-encoded credentials for the access token.
///
/// A body that is not a urlencoded form counts as empty credentials.
pub async fn issue_token(form: Result<Form<TokenRequest>, FormRejection>) -> Result<Json<TokenResponse>, GatewayError> {
    let request = match form {
        Ok(Form(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "token request body not parsed as form");
            TokenRequest::default()
        }
    };

    match token::issue_token(&request) {
        Ok(access_token) => {
            tracing::info!(username = request.username.as_deref().unwrap_or_default(), "token issued");
            Ok(Json(TokenResponse { access_token: access_token.to_owned() }))
        }
        Err(e) => {
            tracing::warn!(username = request.username.as_deref().unwrap_or_default(), "login rejected");
            Err(e)
        }
    }
}
