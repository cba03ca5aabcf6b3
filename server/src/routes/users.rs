//! User collection route.

use axum::extract::State;
use axum::response::Json;
use jsonapi::{Document, UserAttributes};

use crate::state::AppState;

/// `GET /api/users` — every user, in catalog order.
///
/// Not behind [`super::auth::Bearer`], unlike `/api/codes`. Query parameters
/// such as `?email=` are accepted and ignored.
pub async fn list_users(State(state): State<AppState>) -> Json<Document<UserAttributes>> {
    Json(Document::from_records(state.catalog.users.iter().cloned()))
}
