//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input, delegate to the corresponding repository in
//! `callup_db`, and map errors via [`crate::error::AppError`].

pub mod auth;
pub mod call_ups;
pub mod catalog;
