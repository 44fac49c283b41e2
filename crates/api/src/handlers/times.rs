//! Handlers for the prayer-times and Hijri-date proxy endpoints.
//!
//! Each handler validates its required query parameters before any outbound
//! call, then relays the upstream response body verbatim. Upstream failures
//! surface as a generic 500; the cause is logged at the error boundary.

use axum::extract::{Query, State};
use axum::Json;
use minaret_aladhan::client::DEFAULT_METHOD;
use minaret_core::error::CoreError;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /times`.
#[derive(Debug, Deserialize)]
pub struct TimesQuery {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub method: Option<u8>,
}

/// Query parameters for `GET /times/city`.
#[derive(Debug, Deserialize)]
pub struct CityTimesQuery {
    pub city: Option<String>,
    pub country: Option<String>,
    pub method: Option<u8>,
}

/// Query parameters for `GET /hijri-date`.
#[derive(Debug, Deserialize)]
pub struct HijriDateQuery {
    pub date: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /times?latitude=&longitude=&method=
///
/// Prayer times for a coordinate pair. Both coordinates are required;
/// method defaults to 2 (ISNA).
pub async fn by_coordinates(
    State(state): State<AppState>,
    Query(params): Query<TimesQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let latitude = params.latitude.ok_or_else(|| {
        AppError::Core(CoreError::Validation("latitude is required".into()))
    })?;
    let longitude = params.longitude.ok_or_else(|| {
        AppError::Core(CoreError::Validation("longitude is required".into()))
    })?;
    let method = params.method.unwrap_or(DEFAULT_METHOD);

    let body = state.aladhan.timings(latitude, longitude, method).await?;
    Ok(Json(body))
}

/// GET /times/city?city=&country=&method=
///
/// Prayer times for a city. City is required; country defaults to empty.
pub async fn by_city(
    State(state): State<AppState>,
    Query(params): Query<CityTimesQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let city = params
        .city
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::Core(CoreError::Validation("city is required".into())))?;
    let country = params.country.as_deref().unwrap_or("");
    let method = params.method.unwrap_or(DEFAULT_METHOD);

    let body = state.aladhan.timings_by_city(city, country, method).await?;
    Ok(Json(body))
}

/// GET /hijri-date?date=
///
/// Convert a Gregorian date to Hijri. When `date` is absent, today's local
/// date is rendered as `D-M-YYYY` before forwarding, so the request never
/// fails for a missing date.
pub async fn hijri_date(
    State(state): State<AppState>,
    Query(params): Query<HijriDateQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let date = match params.date {
        Some(d) if !d.trim().is_empty() => d,
        _ => today_d_m_yyyy(),
    };

    let body = state.aladhan.gregorian_to_hijri(&date).await?;
    Ok(Json(body))
}

/// Today's local date in unpadded `D-M-YYYY` form.
fn today_d_m_yyyy() -> String {
    chrono::Local::now().format("%-d-%-m-%Y").to_string()
}
