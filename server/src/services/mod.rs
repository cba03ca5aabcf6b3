//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the decision logic so route handlers can stay focused
//! on protocol translation and auth plumbing.

pub mod token;
