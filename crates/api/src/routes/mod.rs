pub mod detail;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application route tree (mounted at the root).
///
/// ```text
/// GET    /details                                          list all
///
/// POST   /patients/{patient_id}/details                    create
/// PUT    /patients/{patient_id}/details                    update (id in body)
/// GET    /patients/{patient_id}/details/{id}               fetch
/// DELETE /patients/{patient_id}/details/{id}               delete, returns record
/// GET    /patients/{patient_id}/details/bloodType/{code}   filter by blood type
/// GET    /patients/{patient_id}/details/rh/{factor}        filter by rhesus factor
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/details", get(handlers::detail::list))
        .nest("/patients/{patient_id}/details", detail::router())
}
