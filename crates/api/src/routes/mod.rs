pub mod auth;
pub mod health;
pub mod mosques;
pub mod notifications;
pub mod times;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (health is mounted separately).
///
/// Route hierarchy:
///
/// ```text
/// POST /login                      login (public)
///
/// GET  /times                      prayer times by coordinates (public)
/// GET  /times/city                 prayer times by city (public)
/// GET  /hijri-date                 Gregorian-to-Hijri conversion (public)
///
/// GET  /mosques                    list (public)
/// POST /mosques                    submit (requires auth)
/// GET  /mosques/nearby             proximity search (public)
/// GET  /mosques/search             full-text search (public)
/// GET  /mosques/{id}               fetch (public)
/// PATCH /mosques/{id}/verify       verify (admin only)
///
/// POST /notifications              create (admin only)
/// GET  /notifications              list (admin only)
/// GET  /notifications/{id}         fetch (admin only)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(times::router())
        .nest("/mosques", mosques::router())
        .nest("/notifications", notifications::router())
}
