//! Scheduled notification dispatcher.
//!
//! [`NotificationDispatcher`] runs as a background task, periodically
//! selecting notifications where `sent = false` and `scheduled_for <= now`
//! and transitioning each one to sent. The transition is a single guarded
//! UPDATE in the repository, so a notification is dispatched at most once
//! even if two dispatchers race. Transport fan-out (push, email) attaches
//! here once a delivery channel exists; dispatch currently records the
//! delivery and logs it.

use std::time::Duration;

use chrono::Utc;
use tokio_util::sync::CancellationToken;

use minaret_db::repositories::NotificationRepo;
use minaret_db::DbPool;

/// How often the dispatcher polls for due notifications.
const DISPATCH_INTERVAL: Duration = Duration::from_secs(60);

/// Maximum notifications processed per poll.
const DISPATCH_BATCH_SIZE: i64 = 100;

/// Background service that delivers scheduled notifications.
pub struct NotificationDispatcher {
    pool: DbPool,
}

impl NotificationDispatcher {
    /// Create a new dispatcher with the given database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Run the dispatch loop.
    ///
    /// Polls every minute for due notifications. The loop exits gracefully
    /// when the provided [`CancellationToken`] is cancelled.
    pub async fn run(&self, cancel: CancellationToken) {
        let mut interval = tokio::time::interval(DISPATCH_INTERVAL);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Notification dispatcher cancelled");
                    break;
                }
                _ = interval.tick() => {
                    if let Err(e) = self.dispatch_due().await {
                        tracing::error!(error = %e, "Failed to dispatch notifications");
                    }
                }
            }
        }
    }

    /// Select all due notifications and dispatch each one.
    pub async fn dispatch_due(&self) -> Result<usize, sqlx::Error> {
        let due = NotificationRepo::list_due(&self.pool, Utc::now(), DISPATCH_BATCH_SIZE).await?;

        let mut dispatched = 0;
        for notification in &due {
            // None means another dispatcher won the transition; skip quietly.
            if let Some(sent) = NotificationRepo::mark_sent(&self.pool, notification.id).await? {
                tracing::info!(
                    notification_id = sent.id,
                    kind = %sent.kind,
                    audience = %sent.target_audience,
                    "Notification dispatched"
                );
                dispatched += 1;
            }
        }

        if dispatched > 0 {
            tracing::info!(count = dispatched, "Processed notification dispatches");
        }

        Ok(dispatched)
    }
}
