//! Shared JSON:API wire model for the gateway and its clients.
//!
//! This crate owns the `{ "data": [ { "type", "id", "attributes" } ] }`
//! envelope used by both `server` and `client`, the two record types that
//! travel inside it, and the fixed login contract both sides agree on.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

// =============================================================================
// LOGIN CONTRACT
// =============================================================================

/// The only username `POST /token` accepts.
pub const LOGIN_USERNAME: &str = "login";

/// The only password `POST /token` accepts.
pub const LOGIN_PASSWORD: &str = "password";

/// The process-wide access token. Never rotates, never expires.
pub const ACCESS_TOKEN: &str = "some bs";

/// Email the current-user lookup filters the user collection on.
pub const CURRENT_USER_EMAIL: &str = "test@example.com";

/// Exact `Authorization` header value protected routes require.
#[must_use]
pub fn bearer_header() -> String {
    format!("Bearer {ACCESS_TOKEN}")
}

// =============================================================================
// TOKEN ENDPOINT BODIES
// =============================================================================

/// Success body of `POST /token`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Error body of `POST /token`, e.g. `{"error":"invalid_grant"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// =============================================================================
// ENVELOPE
// =============================================================================

/// A single resource object inside a JSON:API document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource<A> {
    /// Collection name, serialized as `type`.
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub attributes: A,
}

/// Top-level JSON:API collection document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document<A> {
    pub data: Vec<Resource<A>>,
}

/// A flat record that maps onto a [`Resource`] of a fixed `type`.
pub trait ResourceObject: Sized {
    /// Value of the `type` member for this record kind.
    const TYPE: &'static str;

    type Attributes: Serialize + DeserializeOwned;

    fn into_resource(self) -> Resource<Self::Attributes>;

    fn from_resource(resource: Resource<Self::Attributes>) -> Self;
}

impl<A> Document<A> {
    /// Wrap records in a document, preserving their order.
    pub fn from_records<R, I>(records: I) -> Self
    where
        R: ResourceObject<Attributes = A>,
        I: IntoIterator<Item = R>,
    {
        Self { data: records.into_iter().map(ResourceObject::into_resource).collect() }
    }

    /// Unwrap the document back into flat records, preserving order.
    ///
    /// The `type` member is not checked.
    pub fn into_records<R>(self) -> Vec<R>
    where
        R: ResourceObject<Attributes = A>,
    {
        self.data.into_iter().map(R::from_resource).collect()
    }
}

// =============================================================================
// RECORDS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAttributes {
    pub email: String,
}

/// A user account as seen by clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
}

impl User {
    #[must_use]
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self { id: id.into(), email: email.into() }
    }
}

impl ResourceObject for User {
    const TYPE: &'static str = "users";
    type Attributes = UserAttributes;

    fn into_resource(self) -> Resource<UserAttributes> {
        Resource { kind: Self::TYPE.to_owned(), id: self.id, attributes: UserAttributes { email: self.email } }
    }

    fn from_resource(resource: Resource<UserAttributes>) -> Self {
        Self { id: resource.id, email: resource.attributes.email }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeAttributes {
    pub description: String,
}

/// A protected code entry. Only readable with the access token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Code {
    pub id: String,
    pub description: String,
}

impl Code {
    #[must_use]
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self { id: id.into(), description: description.into() }
    }
}

impl ResourceObject for Code {
    const TYPE: &'static str = "codes";
    type Attributes = CodeAttributes;

    fn into_resource(self) -> Resource<CodeAttributes> {
        Resource {
            kind: Self::TYPE.to_owned(),
            id: self.id,
            attributes: CodeAttributes { description: self.description },
        }
    }

    fn from_resource(resource: Resource<CodeAttributes>) -> Self {
        Self { id: resource.id, description: resource.attributes.description }
    }
}
