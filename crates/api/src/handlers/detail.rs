//! Handlers for the detail resource.
//!
//! Details are nested under patients:
//! `/patients/{patient_id}/details[/{id}]`, with a flat `/details`
//! listing and equality-filter lookups by blood type and rhesus factor.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use medrec_core::types::DbId;
use medrec_db::models::detail::DetailDto;

use crate::error::{AppError, AppResult};
use crate::mapper;
use crate::state::AppState;

/// POST /patients/{patient_id}/details
///
/// The patient association comes from the URL path; any id in the body is
/// ignored and the store assigns a fresh one.
pub async fn create(
    State(state): State<AppState>,
    Path(patient_id): Path<DbId>,
    Json(input): Json<DetailDto>,
) -> AppResult<(StatusCode, Json<DetailDto>)> {
    let data = mapper::to_data(&input);
    let detail = state.details.create(patient_id, &data).await?;
    Ok((StatusCode::CREATED, Json(mapper::to_dto(&detail))))
}

/// PUT /patients/{patient_id}/details
///
/// Whole-object overwrite of an existing detail. The body must carry the
/// id of the record to overwrite.
pub async fn update(
    State(state): State<AppState>,
    Path(_patient_id): Path<DbId>,
    Json(input): Json<DetailDto>,
) -> AppResult<Json<DetailDto>> {
    let id = input
        .id
        .ok_or_else(|| AppError::BadRequest("detail id is required for update".into()))?;
    let data = mapper::to_data(&input);
    let detail = state.details.update(id, &data).await?;
    Ok(Json(mapper::to_dto(&detail)))
}

/// GET /patients/{patient_id}/details/{id}
pub async fn fetch(
    State(state): State<AppState>,
    Path((_patient_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DetailDto>> {
    let detail = state.details.fetch(id).await?;
    Ok(Json(mapper::to_dto(&detail)))
}

/// GET /details
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<DetailDto>>> {
    let details = state.details.list_details().await?;
    Ok(Json(details.iter().map(mapper::to_dto).collect()))
}

/// DELETE /patients/{patient_id}/details/{id}
///
/// Returns the deleted record's contents with 200, per the wire contract.
pub async fn delete(
    State(state): State<AppState>,
    Path((_patient_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DetailDto>> {
    let detail = state.details.delete(id).await?;
    Ok(Json(mapper::to_dto(&detail)))
}

/// GET /patients/{patient_id}/details/bloodType/{blood_type}
pub async fn find_by_blood_type(
    State(state): State<AppState>,
    Path((_patient_id, blood_type)): Path<(DbId, i32)>,
) -> AppResult<Json<Vec<DetailDto>>> {
    let details = state.details.find_by_blood_type(blood_type).await?;
    Ok(Json(details.iter().map(mapper::to_dto).collect()))
}

/// GET /patients/{patient_id}/details/rh/{rhesus_factor}
pub async fn find_by_rhesus_factor(
    State(state): State<AppState>,
    Path((_patient_id, rhesus_factor)): Path<(DbId, String)>,
) -> AppResult<Json<Vec<DetailDto>>> {
    let details = state.details.find_by_rhesus_factor(&rhesus_factor).await?;
    Ok(Json(details.iter().map(mapper::to_dto).collect()))
}
