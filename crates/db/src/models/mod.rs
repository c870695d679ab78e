//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - The write model persisted by inserts and full-overwrite updates
//! - The wire DTO where the entity crosses the HTTP boundary

pub mod detail;
pub mod patient;
