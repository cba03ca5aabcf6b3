//! Networking modules for the gateway's HTTP surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls. Wire types live in the shared `jsonapi` crate
//! and are re-exported here for callers that only depend on `client`.

pub mod api;

pub use jsonapi::{Code, User};
