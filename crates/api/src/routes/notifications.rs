//! Route definitions for the `/notifications` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::notification;
use crate::state::AppState;

/// Routes mounted at `/notifications` (all admin-only).
///
/// ```text
/// GET  /      -> list
/// POST /      -> create
/// GET  /{id}  -> get
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notification::list).post(notification::create))
        .route("/{id}", get(notification::get))
}
