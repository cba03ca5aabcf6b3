//! Code collection route.

use axum::extract::State;
use axum::response::Json;
use jsonapi::{CodeAttributes, Document};

use super::auth::Bearer;
use crate::state::AppState;

/// `GET /api/codes` — every code, in catalog order. Requires the bearer token.
pub async fn list_codes(State(state): State<AppState>, _auth: Bearer) -> Json<Document<CodeAttributes>> {
    Json(Document::from_records(state.catalog.codes.iter().cloned()))
}
