use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool -- the sole serialization point for all
    /// persisted state, injected once at process start.
    pub pool: appraisal_db::DbPool,
    /// Server configuration (operator credential, upload policy, expiry).
    pub config: Arc<ServerConfig>,
}
