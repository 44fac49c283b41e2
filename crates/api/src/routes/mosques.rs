//! Route definitions for the `/mosques` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::mosque;
use crate::state::AppState;

/// Routes mounted at `/mosques`.
///
/// ```text
/// GET   /             -> list
/// POST  /             -> create (requires auth)
/// GET   /nearby       -> nearby
/// GET   /search       -> search
/// GET   /{id}         -> get
/// PATCH /{id}/verify  -> verify (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(mosque::list).post(mosque::create))
        .route("/nearby", get(mosque::nearby))
        .route("/search", get(mosque::search))
        .route("/{id}", get(mosque::get))
        .route("/{id}/verify", patch(mosque::verify))
}
