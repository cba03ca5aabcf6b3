//! Client-side application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns login state and the access token; `current_user` derives
//! the authenticated user record from it.

pub mod current_user;
pub mod session;
