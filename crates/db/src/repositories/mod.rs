//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod detail_repo;
pub mod patient_repo;

pub use detail_repo::DetailRepo;
pub use patient_repo::PatientRepo;
