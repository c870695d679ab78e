use std::sync::Arc;

use crate::config::ServerConfig;
use crate::service::DetailService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: medrec_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Detail operations, wired to the pool at startup.
    pub details: DetailService,
}
