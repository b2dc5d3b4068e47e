use std::sync::Arc;

use skilltrack_core::catalog::Catalog;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (the profile store and collaborators).
    pub pool: skilltrack_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The immutable skill catalog, loaded once at startup.
    pub catalog: Arc<Catalog>,
}
