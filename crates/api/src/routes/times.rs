//! Route definitions for the prayer-times proxy endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::times;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// GET /times       -> by_coordinates
/// GET /times/city  -> by_city
/// GET /hijri-date  -> hijri_date
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/times", get(times::by_coordinates))
        .route("/times/city", get(times::by_city))
        .route("/hijri-date", get(times::hijri_date))
}
