//! Repository for the `notifications` table.

use minaret_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::notification::{CreateNotification, Notification, NotificationFilter};

/// Column list for notification queries.
const NOTIFICATION_COLUMNS: &str = "id, title, message, kind, target_audience, \
    target_users, scheduled_for, sent, sent_at, created_by, created_at";

/// Provides CRUD and delivery-state operations for notifications.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Insert a new notification, returning the created row.
    ///
    /// `scheduled_for` falls back to the insertion instant when absent.
    pub async fn create(
        pool: &PgPool,
        input: &CreateNotification,
    ) -> Result<Notification, sqlx::Error> {
        let query = format!(
            "INSERT INTO notifications
                (title, message, kind, target_audience, target_users, scheduled_for, created_by)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, NOW()), $7)
             RETURNING {NOTIFICATION_COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(&input.title)
            .bind(&input.message)
            .bind(&input.kind)
            .bind(&input.target_audience)
            .bind(&input.target_users)
            .bind(input.scheduled_for)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a notification by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Notification>, sqlx::Error> {
        let query = format!("SELECT {NOTIFICATION_COLUMNS} FROM notifications WHERE id = $1");
        sqlx::query_as::<_, Notification>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List notifications with optional filters, most recently scheduled first.
    pub async fn list(
        pool: &PgPool,
        filter: &NotificationFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let query = format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications
             WHERE ($1::text IS NULL OR kind = $1)
               AND ($2::text IS NULL OR target_audience = $2)
               AND ($3::boolean IS NULL OR sent = $3)
             ORDER BY scheduled_for DESC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(&filter.kind)
            .bind(&filter.target_audience)
            .bind(filter.sent)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List undelivered notifications whose scheduled time has passed,
    /// oldest first.
    pub async fn list_due(
        pool: &PgPool,
        now: Timestamp,
        limit: i64,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let query = format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications
             WHERE sent = FALSE AND scheduled_for <= $1
             ORDER BY scheduled_for ASC
             LIMIT $2"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(now)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Transition a notification to sent, setting `sent_at` in the same
    /// atomic update. Returns `None` if the notification does not exist or
    /// was already sent, so the transition happens at most once.
    pub async fn mark_sent(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Notification>, sqlx::Error> {
        let query = format!(
            "UPDATE notifications
             SET sent = TRUE, sent_at = NOW()
             WHERE id = $1 AND sent = FALSE
             RETURNING {NOTIFICATION_COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
