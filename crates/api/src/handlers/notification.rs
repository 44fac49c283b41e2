//! Handlers for the `/notifications` resource.
//!
//! All endpoints are admin-only. Kind and audience values are validated
//! against the domain enums before insertion; the schema CHECK constraints
//! are a backstop, not the primary validation.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use minaret_core::error::CoreError;
use minaret_core::notification::{
    validate_audience_targets, validate_message, validate_title, NotificationKind, TargetAudience,
};
use minaret_core::types::{DbId, Timestamp};
use serde::Deserialize;

use minaret_db::models::notification::{CreateNotification, Notification, NotificationFilter};
use minaret_db::repositories::NotificationRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum page size for notification listing.
const MAX_LIMIT: i64 = 100;

/// Default page size for notification listing.
const DEFAULT_LIMIT: i64 = 50;

// ---------------------------------------------------------------------------
// Request / query types
// ---------------------------------------------------------------------------

/// Request body for `POST /notifications`.
#[derive(Debug, Deserialize)]
pub struct CreateNotificationRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    /// Notification kind; wire name matches the stored document field.
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    #[serde(default = "default_audience")]
    pub target_audience: String,
    #[serde(default)]
    pub target_users: Vec<DbId>,
    /// Defaults to the creation instant when absent.
    pub scheduled_for: Option<Timestamp>,
}

fn default_kind() -> String {
    minaret_core::notification::KIND_GENERAL.to_string()
}

fn default_audience() -> String {
    minaret_core::notification::AUDIENCE_ALL.to_string()
}

/// Query parameters for `GET /notifications`.
#[derive(Debug, Deserialize)]
pub struct NotificationQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub target_audience: Option<String>,
    pub sent: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /notifications
///
/// Create a notification. Admin only. `sent` starts false; the background
/// dispatcher performs the delivery transition.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateNotificationRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Notification>>)> {
    auth.require_admin()?;

    validate_title(&input.title)?;
    validate_message(&input.message)?;
    let kind = NotificationKind::from_str(&input.kind)?;
    let audience = TargetAudience::from_str(&input.target_audience)?;
    validate_audience_targets(audience, &input.target_users)?;

    let create = CreateNotification {
        title: input.title,
        message: input.message,
        kind: kind.as_str().to_string(),
        target_audience: audience.as_str().to_string(),
        target_users: input.target_users,
        scheduled_for: input.scheduled_for,
        created_by: auth.user_id,
    };

    let notification = NotificationRepo::create(&state.pool, &create).await?;

    tracing::info!(
        notification_id = notification.id,
        kind = %notification.kind,
        created_by = auth.user_id,
        "Notification created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: notification })))
}

/// GET /notifications
///
/// List notifications with optional kind/audience/sent filters. Admin only.
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<NotificationQuery>,
) -> AppResult<Json<DataResponse<Vec<Notification>>>> {
    auth.require_admin()?;

    // Validate filter values against the enums so typos surface as 400s
    // rather than silently empty result sets.
    if let Some(kind) = &params.kind {
        NotificationKind::from_str(kind)?;
    }
    if let Some(audience) = &params.target_audience {
        TargetAudience::from_str(audience)?;
    }

    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = params.offset.unwrap_or(0).max(0);

    let filter = NotificationFilter {
        kind: params.kind,
        target_audience: params.target_audience,
        sent: params.sent,
    };

    let notifications = NotificationRepo::list(&state.pool, &filter, limit, offset).await?;
    Ok(Json(DataResponse { data: notifications }))
}

/// GET /notifications/{id}
pub async fn get(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Notification>>> {
    auth.require_admin()?;

    let notification = NotificationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Notification",
            id,
        }))?;
    Ok(Json(DataResponse { data: notification }))
}
