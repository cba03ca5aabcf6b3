//! # client
//!
//! Client library for the token-gated API: a typed HTTP wrapper, a login
//! session that publishes its authenticated flag, and the derived
//! current-user value built on top of it.

pub mod error;
pub mod net;
pub mod state;

#[cfg(test)]
mod test_support;

pub use error::{ClientError, ResolveError};
pub use net::api::ApiClient;
pub use state::current_user::{CurrentUser, CurrentUserState, UserSource, resolve_current_user};
pub use state::session::Session;
