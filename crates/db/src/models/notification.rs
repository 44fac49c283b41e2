//! Notification entity models and DTOs.

use minaret_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `notifications` table.
///
/// `sent_at` is non-null exactly when `sent` is true; the pairing is enforced
/// by a table CHECK constraint and the single-update transition in
/// [`NotificationRepo::mark_sent`](crate::repositories::NotificationRepo::mark_sent).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub title: String,
    pub message: String,
    /// Wire name is `type`, matching the public API field.
    #[serde(rename = "type")]
    pub kind: String,
    pub target_audience: String,
    pub target_users: Vec<DbId>,
    pub scheduled_for: Timestamp,
    pub sent: bool,
    pub sent_at: Option<Timestamp>,
    pub created_by: DbId,
    pub created_at: Timestamp,
}

/// Input for inserting a notification. Kind and audience strings are expected
/// to be validated against the domain enums by the caller.
#[derive(Debug, Clone)]
pub struct CreateNotification {
    pub title: String,
    pub message: String,
    pub kind: String,
    pub target_audience: String,
    pub target_users: Vec<DbId>,
    /// Defaults to the insertion instant when `None`.
    pub scheduled_for: Option<Timestamp>,
    pub created_by: DbId,
}

/// Filters for listing notifications.
#[derive(Debug, Clone, Default)]
pub struct NotificationFilter {
    pub kind: Option<String>,
    pub target_audience: Option<String>,
    pub sent: Option<bool>,
}
