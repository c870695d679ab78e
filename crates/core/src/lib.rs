//! Shared domain types and errors for the medrec workspace.

pub mod error;
pub mod types;
