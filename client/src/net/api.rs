//! REST API helpers for communicating with the gateway.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ClientError>`. Statuses the gateway defines
//! (`400 invalid_grant`, `401`) map to dedicated variants; anything else is
//! `UnexpectedStatus` so callers never have to inspect raw responses.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use jsonapi::{Code, CodeAttributes, Document, TokenResponse, User, UserAttributes};
use reqwest::{StatusCode, Url};

use crate::error::ClientError;

const TOKEN_PATH: &str = "/token";
const CODES_PATH: &str = "/api/codes";
const USERS_PATH: &str = "/api/users";
const HEALTH_PATH: &str = "/healthz";

/// Thin typed wrapper over the gateway's HTTP surface. Holds no session
/// state; tokens are passed in per call.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// # Errors
    ///
    /// [`ClientError::InvalidBaseUrl`] when `base_url` is not an absolute
    /// http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Like [`ApiClient::new`] but reuses an existing `reqwest::Client`.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::new`].
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl(format!("{base_url}: scheme must be http or https")));
        }
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET /healthz`.
    ///
    /// # Errors
    ///
    /// Transport failure or any non-200 status.
    pub async fn health(&self) -> Result<(), ClientError> {
        let resp = self.http.get(self.endpoint(HEALTH_PATH)).send().await?;
        match resp.status() {
            StatusCode::OK => Ok(()),
            status => Err(unexpected(status, HEALTH_PATH)),
        }
    }

    /// `POST /token` with an OAuth2 password-grant form body.
    ///
    /// # Errors
    ///
    /// [`ClientError::InvalidGrant`] when the credentials are rejected.
    pub async fn request_token(&self, username: &str, password: &str) -> Result<String, ClientError> {
        let form = [("grant_type", "password"), ("username", username), ("password", password)];
        let resp = self.http.post(self.endpoint(TOKEN_PATH)).form(&form).send().await?;
        match resp.status() {
            StatusCode::OK => Ok(resp.json::<TokenResponse>().await?.access_token),
            StatusCode::BAD_REQUEST => Err(ClientError::InvalidGrant),
            status => Err(unexpected(status, TOKEN_PATH)),
        }
    }

    /// `GET /api/codes` with `Authorization: Bearer <token>`.
    ///
    /// # Errors
    ///
    /// [`ClientError::Unauthorized`] when the gateway rejects the token.
    pub async fn list_codes(&self, token: &str) -> Result<Vec<Code>, ClientError> {
        let resp = self.http.get(self.endpoint(CODES_PATH)).bearer_auth(token).send().await?;
        match resp.status() {
            StatusCode::OK => Ok(resp.json::<Document<CodeAttributes>>().await?.into_records()),
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
            status => Err(unexpected(status, CODES_PATH)),
        }
    }

    /// `GET /api/users`, optionally filtered by `email` and authorized.
    ///
    /// The filter is sent as a query parameter; the gateway is free to ignore
    /// it, so callers must not assume every returned record matches.
    ///
    /// # Errors
    ///
    /// Transport failure or any status other than 200 / 401.
    pub async fn query_users(&self, email: Option<&str>, token: Option<&str>) -> Result<Vec<User>, ClientError> {
        let mut req = self.http.get(self.endpoint(USERS_PATH));
        if let Some(email) = email {
            req = req.query(&[("email", email)]);
        }
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        let resp = req.send().await?;
        match resp.status() {
            StatusCode::OK => Ok(resp.json::<Document<UserAttributes>>().await?.into_records()),
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
            status => Err(unexpected(status, USERS_PATH)),
        }
    }
}

fn unexpected(status: StatusCode, path: &str) -> ClientError {
    ClientError::UnexpectedStatus { status: status.as_u16(), path: path.to_owned() }
}
