//! Handlers for the `/mosques` resource.
//!
//! Creation requires authentication; verification is admin-only. All record
//! validation happens here, before any row is constructed, via the domain
//! validators in `minaret_core::mosque`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use minaret_core::error::CoreError;
use minaret_core::mosque::{validate_address, validate_name, GeoPoint};
use minaret_core::types::DbId;
use serde::Deserialize;

use minaret_db::models::mosque::{CreateMosque, Mosque, MosqueWithDistance};
use minaret_db::repositories::MosqueRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum page size for mosque listing and searches.
const MAX_LIMIT: i64 = 100;

/// Default page size for mosque listing and searches.
const DEFAULT_LIMIT: i64 = 50;

/// Default proximity-search radius in metres.
const DEFAULT_RADIUS_M: f64 = 5_000.0;

/// Maximum proximity-search radius in metres.
const MAX_RADIUS_M: f64 = 100_000.0;

// ---------------------------------------------------------------------------
// Request / query types
// ---------------------------------------------------------------------------

/// Optional contact details for a mosque.
#[derive(Debug, Default, Deserialize)]
pub struct ContactInfo {
    pub phone: Option<String>,
    pub website: Option<String>,
}

/// Request body for `POST /mosques`.
#[derive(Debug, Deserialize)]
pub struct CreateMosqueRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub location: GeoPoint,
    #[serde(default)]
    pub contact: ContactInfo,
}

/// Query parameters for `GET /mosques`.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub verified: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters for `GET /mosques/nearby`.
#[derive(Debug, Deserialize)]
pub struct NearbyQuery {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Radius in metres. Defaults to 5 km, capped at 100 km.
    pub radius: Option<f64>,
    pub limit: Option<i64>,
}

/// Query parameters for `GET /mosques/search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub limit: Option<i64>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /mosques
///
/// Submit a new mosque. Requires authentication; the submitter is recorded
/// as `added_by` and the record starts unverified.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateMosqueRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Mosque>>)> {
    validate_name(&input.name)?;
    validate_address(&input.address)?;
    input.location.validate()?;

    let create = CreateMosque {
        name: input.name.trim().to_string(),
        address: input.address.trim().to_string(),
        longitude: input.location.longitude(),
        latitude: input.location.latitude(),
        contact_phone: input.contact.phone,
        contact_website: input.contact.website,
        added_by: auth.user_id,
    };

    let mosque = MosqueRepo::create(&state.pool, &create).await?;

    tracing::info!(mosque_id = mosque.id, added_by = auth.user_id, "Mosque submitted");

    Ok((StatusCode::CREATED, Json(DataResponse { data: mosque })))
}

/// GET /mosques
///
/// List mosques, optionally filtered by verified status.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> AppResult<Json<DataResponse<Vec<Mosque>>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = params.offset.unwrap_or(0).max(0);

    let mosques = MosqueRepo::list(&state.pool, params.verified, limit, offset).await?;
    Ok(Json(DataResponse { data: mosques }))
}

/// GET /mosques/nearby?latitude=&longitude=&radius=
///
/// Mosques within a radius of a point, nearest first.
pub async fn nearby(
    State(state): State<AppState>,
    Query(params): Query<NearbyQuery>,
) -> AppResult<Json<DataResponse<Vec<MosqueWithDistance>>>> {
    let latitude = params.latitude.ok_or_else(|| {
        AppError::Core(CoreError::Validation("latitude is required".into()))
    })?;
    let longitude = params.longitude.ok_or_else(|| {
        AppError::Core(CoreError::Validation("longitude is required".into()))
    })?;

    // Reuse the coordinate-range rules from record validation.
    GeoPoint {
        kind: "Point".to_string(),
        coordinates: vec![longitude, latitude],
    }
    .validate()?;

    let radius = params.radius.unwrap_or(DEFAULT_RADIUS_M);
    if !radius.is_finite() || radius <= 0.0 || radius > MAX_RADIUS_M {
        return Err(AppError::Core(CoreError::Validation(format!(
            "radius must be between 0 and {MAX_RADIUS_M} metres"
        ))));
    }
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    let mosques = MosqueRepo::find_nearby(&state.pool, latitude, longitude, radius, limit).await?;
    Ok(Json(DataResponse { data: mosques }))
}

/// GET /mosques/search?q=
///
/// Full-text search over mosque name and address.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<DataResponse<Vec<Mosque>>>> {
    let text = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::Core(CoreError::Validation("q is required".into())))?;
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    let mosques = MosqueRepo::search(&state.pool, text, limit).await?;
    Ok(Json(DataResponse { data: mosques }))
}

/// GET /mosques/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Mosque>>> {
    let mosque = MosqueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Mosque",
            id,
        }))?;
    Ok(Json(DataResponse { data: mosque }))
}

/// PATCH /mosques/{id}/verify
///
/// Mark a mosque as verified. Admin only.
pub async fn verify(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Mosque>>> {
    auth.require_admin()?;

    let mosque = MosqueRepo::set_verified(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Mosque",
            id,
        }))?;

    tracing::info!(mosque_id = id, verified_by = auth.user_id, "Mosque verified");

    Ok(Json(DataResponse { data: mosque }))
}
