//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the record catalog: fixed, ordered collections that no handler ever
//! writes, so they sit behind a plain `Arc` with no lock.

use std::sync::Arc;

use jsonapi::{Code, User};

// =============================================================================
// CATALOG
// =============================================================================

const USERS: [(&str, &str); 3] = [
    ("1", "test@example.com"),
    ("2", "demo@example.com"),
    ("3", "lugatex@yahoo.com"),
];

const CODES: [(&str, &str); 2] = [
    ("1", "Bitcoin keeps hitting record highs"),
    ("2", "Jamie Dimon doesn\u{2019}t want to talk about it"),
];

/// Read-only record collections served by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub users: Vec<User>,
    pub codes: Vec<Code>,
}

impl Catalog {
    /// The built-in records, in serving order.
    #[must_use]
    pub fn fixtures() -> Self {
        Self {
            users: USERS.iter().map(|&(id, email)| User::new(id, email)).collect(),
            codes: CODES.iter().map(|&(id, text)| Code::new(id, text)).collect(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::fixtures()
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Clone is required by Axum; the catalog is shared, never copied.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog: Arc::new(catalog) }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
