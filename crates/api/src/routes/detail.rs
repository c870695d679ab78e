//! Route definitions for the patient-scoped detail resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::detail;
use crate::state::AppState;

/// Routes mounted at `/patients/{patient_id}/details`.
///
/// The static `bloodType` and `rh` segments take precedence over the
/// `{id}` capture, so the filter lookups never shadow fetch-by-id.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(detail::create).put(detail::update))
        .route("/{id}", get(detail::fetch).delete(detail::delete))
        .route("/bloodType/{blood_type}", get(detail::find_by_blood_type))
        .route("/rh/{rhesus_factor}", get(detail::find_by_rhesus_factor))
}
