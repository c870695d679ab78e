//! Repository for the `patients` table.
//!
//! Only the operations the detail flow needs: details are created under a
//! patient, so creation and lookup-by-id must exist here even though the
//! patient lifecycle itself is out of scope.

use sqlx::PgPool;

use medrec_core::types::DbId;

use crate::models::patient::{CreatePatient, Patient};

const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides the patient operations the detail flow depends on.
pub struct PatientRepo;

impl PatientRepo {
    /// Insert a new patient, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePatient) -> Result<Patient, sqlx::Error> {
        let query = format!(
            "INSERT INTO patients (name)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Patient>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a patient by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Patient>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM patients WHERE id = $1");
        sqlx::query_as::<_, Patient>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
