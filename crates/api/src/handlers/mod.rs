//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers convert wire DTOs via [`crate::mapper`], delegate to the
//! service carried in [`crate::state::AppState`], and map errors via
//! [`crate::error::AppError`].

pub mod detail;
