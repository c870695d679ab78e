//! Patient model.
//!
//! The patient lifecycle is owned elsewhere; this crate only needs the
//! row details reference and enough of a write model for setup code.

use medrec_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// A row from the `patients` table.
#[derive(Debug, Clone, FromRow)]
pub struct Patient {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Write model for inserting a patient.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePatient {
    pub name: String,
}
