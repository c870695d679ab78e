//! Repository for the `details` table.

use sqlx::PgPool;

use medrec_core::types::DbId;

use crate::models::detail::{Detail, DetailData};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, patient_id, blood_type, rhesus_factor, bmi, created_at, updated_at";

/// Provides CRUD and equality-filter queries for details.
pub struct DetailRepo;

impl DetailRepo {
    /// Insert a new detail under the given patient, returning the created row.
    ///
    /// The id is assigned by the database; any id the caller had is ignored.
    pub async fn create(
        pool: &PgPool,
        patient_id: DbId,
        data: &DetailData,
    ) -> Result<Detail, sqlx::Error> {
        let query = format!(
            "INSERT INTO details (patient_id, blood_type, rhesus_factor, bmi)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Detail>(&query)
            .bind(patient_id)
            .bind(data.blood_type)
            .bind(&data.rhesus_factor)
            .bind(data.bmi)
            .fetch_one(pool)
            .await
    }

    /// Overwrite every mutable field of an existing detail.
    ///
    /// Returns `None` if no row with the given `id` exists. The patient
    /// association is immutable; only the record fields change.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        data: &DetailData,
    ) -> Result<Option<Detail>, sqlx::Error> {
        let query = format!(
            "UPDATE details SET
                blood_type = $2,
                rhesus_factor = $3,
                bmi = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Detail>(&query)
            .bind(id)
            .bind(data.blood_type)
            .bind(&data.rhesus_factor)
            .bind(data.bmi)
            .fetch_optional(pool)
            .await
    }

    /// Find a detail by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Detail>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM details WHERE id = $1");
        sqlx::query_as::<_, Detail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all details ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Detail>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM details ORDER BY id");
        sqlx::query_as::<_, Detail>(&query).fetch_all(pool).await
    }

    /// Delete a detail by ID, returning the removed row.
    ///
    /// Single statement, so the returned contents cannot be raced away by
    /// a concurrent delete. Returns `None` if no row existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Detail>, sqlx::Error> {
        let query = format!("DELETE FROM details WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Detail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List details whose blood type equals `blood_type`.
    pub async fn find_by_blood_type(
        pool: &PgPool,
        blood_type: i32,
    ) -> Result<Vec<Detail>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM details WHERE blood_type = $1 ORDER BY id");
        sqlx::query_as::<_, Detail>(&query)
            .bind(blood_type)
            .fetch_all(pool)
            .await
    }

    /// List details whose rhesus factor equals `rhesus_factor`.
    pub async fn find_by_rhesus_factor(
        pool: &PgPool,
        rhesus_factor: &str,
    ) -> Result<Vec<Detail>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM details WHERE rhesus_factor = $1 ORDER BY id");
        sqlx::query_as::<_, Detail>(&query)
            .bind(rhesus_factor)
            .fetch_all(pool)
            .await
    }

    /// List details whose BMI equals `bmi` exactly.
    pub async fn find_by_bmi(pool: &PgPool, bmi: f64) -> Result<Vec<Detail>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM details WHERE bmi = $1 ORDER BY id");
        sqlx::query_as::<_, Detail>(&query)
            .bind(bmi)
            .fetch_all(pool)
            .await
    }
}
