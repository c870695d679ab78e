//! Business-facing detail operations.
//!
//! [`DetailService`] sits between the HTTP handlers and the repositories:
//! it establishes existence preconditions (patient on create, detail on
//! update/fetch/delete) and delegates the storage work to [`DetailRepo`].
//! It holds its own pool handle and is wired into [`crate::state::AppState`]
//! at process startup.

use medrec_core::error::CoreError;
use medrec_core::types::DbId;
use medrec_db::models::detail::{Detail, DetailData};
use medrec_db::repositories::{DetailRepo, PatientRepo};
use medrec_db::DbPool;

use crate::error::{AppError, AppResult};

/// Detail operations over a shared connection pool.
#[derive(Clone)]
pub struct DetailService {
    pool: DbPool,
}

impl DetailService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create a detail under the given patient.
    ///
    /// Fails with NotFound if the patient does not exist; the store
    /// assigns the new detail's id.
    pub async fn create(&self, patient_id: DbId, data: &DetailData) -> AppResult<Detail> {
        PatientRepo::find_by_id(&self.pool, patient_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Patient",
                id: patient_id,
            }))?;

        let detail = DetailRepo::create(&self.pool, patient_id, data).await?;
        Ok(detail)
    }

    /// Overwrite an existing detail wholesale.
    ///
    /// Fails with NotFound if the id does not reference an existing row;
    /// there is no upsert.
    pub async fn update(&self, id: DbId, data: &DetailData) -> AppResult<Detail> {
        DetailRepo::update(&self.pool, id, data)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Detail",
                id,
            }))
    }

    /// Fetch a detail by id, failing with NotFound if absent.
    pub async fn fetch(&self, id: DbId) -> AppResult<Detail> {
        DetailRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Detail",
                id,
            }))
    }

    /// List all details, unfiltered and unpaged.
    pub async fn list_details(&self) -> AppResult<Vec<Detail>> {
        let details = DetailRepo::list(&self.pool).await?;
        Ok(details)
    }

    /// Delete a detail permanently, returning its last stored contents.
    ///
    /// The repository removes and returns the row in one statement, so a
    /// concurrent delete of the same id loses cleanly: it observes no row
    /// and gets NotFound.
    pub async fn delete(&self, id: DbId) -> AppResult<Detail> {
        DetailRepo::delete(&self.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Detail",
                id,
            }))
    }

    /// List details with the given blood type code. May be empty.
    pub async fn find_by_blood_type(&self, blood_type: i32) -> AppResult<Vec<Detail>> {
        let details = DetailRepo::find_by_blood_type(&self.pool, blood_type).await?;
        Ok(details)
    }

    /// List details with the given rhesus factor token. May be empty.
    pub async fn find_by_rhesus_factor(&self, rhesus_factor: &str) -> AppResult<Vec<Detail>> {
        let details = DetailRepo::find_by_rhesus_factor(&self.pool, rhesus_factor).await?;
        Ok(details)
    }

    /// List details with exactly the given BMI. May be empty.
    ///
    /// Not exposed over HTTP; kept for the persistence suite and callers
    /// inside the process.
    pub async fn find_by_bmi(&self, bmi: f64) -> AppResult<Vec<Detail>> {
        let details = DetailRepo::find_by_bmi(&self.pool, bmi).await?;
        Ok(details)
    }
}
