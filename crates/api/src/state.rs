use std::sync::Arc;

use minaret_aladhan::AladhanClient;

use crate::auth::credentials::CredentialStore;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: minaret_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Immutable in-memory credential list.
    pub credentials: Arc<CredentialStore>,
    /// Client for the upstream prayer-times API.
    pub aladhan: Arc<AladhanClient>,
}
