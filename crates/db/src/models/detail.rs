//! Detail models and the wire DTO.
//!
//! A detail is a blood-work record (blood type, rhesus factor, BMI)
//! belonging to exactly one patient. A patient may have any number of
//! details.

use medrec_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `details` table.
#[derive(Debug, Clone, FromRow)]
pub struct Detail {
    pub id: DbId,
    pub patient_id: DbId,
    pub blood_type: i32,
    pub rhesus_factor: String,
    pub bmi: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The field set persisted for a detail.
///
/// Used by both insert and update: an update overwrites every field with
/// the values given here, there is no partial patch.
#[derive(Debug, Clone)]
pub struct DetailData {
    pub blood_type: i32,
    pub rhesus_factor: String,
    pub bmi: f64,
}

/// Wire representation of a detail.
///
/// Field names follow the camelCase JSON contract. `id` is absent on
/// create input (the store assigns it) and required on update input;
/// `patientId` is populated on output from the row's association.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub blood_type: i32,
    pub rhesus_factor: String,
    pub bmi: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<DbId>,
}
