//! Token-gated mock API.
//!
//! Serves a fixed set of JSON:API collections behind a one-token login:
//! `POST /token` hands out the token, `GET /api/codes` demands it, and
//! `GET /api/users` does not.

pub mod config;
pub mod error;
pub mod routes;
pub mod services;
pub mod state;
