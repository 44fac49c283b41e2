//! Notification domain constants, enums, and validators.
//!
//! Notification kind and target audience are closed string enums stored as
//! TEXT; the delivery state transition itself lives in the repository layer
//! as a single atomic update.

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Kind constants
// ---------------------------------------------------------------------------

/// General announcement.
pub const KIND_GENERAL: &str = "general";
/// Reminder ahead of a prayer time.
pub const KIND_PRAYER_REMINDER: &str = "prayer_reminder";
/// Community event announcement.
pub const KIND_EVENT: &str = "event";
/// System/operational message.
pub const KIND_SYSTEM: &str = "system";

/// All valid notification kinds.
pub const VALID_KINDS: &[&str] = &[KIND_GENERAL, KIND_PRAYER_REMINDER, KIND_EVENT, KIND_SYSTEM];

// ---------------------------------------------------------------------------
// Audience constants
// ---------------------------------------------------------------------------

/// Every user of the platform.
pub const AUDIENCE_ALL: &str = "all";
/// All registered users.
pub const AUDIENCE_USERS: &str = "users";
/// An explicit list of user ids.
pub const AUDIENCE_SPECIFIC: &str = "specific";

/// All valid target audiences.
pub const VALID_AUDIENCES: &[&str] = &[AUDIENCE_ALL, AUDIENCE_USERS, AUDIENCE_SPECIFIC];

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length for a notification title.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum length for a notification message body.
pub const MAX_MESSAGE_LEN: usize = 5_000;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Notification kind enum with string conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    General,
    PrayerReminder,
    Event,
    System,
}

impl NotificationKind {
    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => KIND_GENERAL,
            Self::PrayerReminder => KIND_PRAYER_REMINDER,
            Self::Event => KIND_EVENT,
            Self::System => KIND_SYSTEM,
        }
    }

    /// Parse from a string, returning an error for unknown kinds.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            KIND_GENERAL => Ok(Self::General),
            KIND_PRAYER_REMINDER => Ok(Self::PrayerReminder),
            KIND_EVENT => Ok(Self::Event),
            KIND_SYSTEM => Ok(Self::System),
            other => Err(CoreError::Validation(format!(
                "Unknown notification type: '{other}'. Valid types: {}",
                VALID_KINDS.join(", ")
            ))),
        }
    }
}

/// Target audience enum with string conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetAudience {
    All,
    Users,
    Specific,
}

impl TargetAudience {
    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => AUDIENCE_ALL,
            Self::Users => AUDIENCE_USERS,
            Self::Specific => AUDIENCE_SPECIFIC,
        }
    }

    /// Parse from a string, returning an error for unknown audiences.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            AUDIENCE_ALL => Ok(Self::All),
            AUDIENCE_USERS => Ok(Self::Users),
            AUDIENCE_SPECIFIC => Ok(Self::Specific),
            other => Err(CoreError::Validation(format!(
                "Unknown target audience: '{other}'. Valid audiences: {}",
                VALID_AUDIENCES.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that a notification title is non-empty and within length limits.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Notification title must not be empty".to_string(),
        ));
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Notification title exceeds maximum length of {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate that a notification message is non-empty and within length limits.
pub fn validate_message(message: &str) -> Result<(), CoreError> {
    if message.trim().is_empty() {
        return Err(CoreError::Validation(
            "Notification message must not be empty".to_string(),
        ));
    }
    if message.len() > MAX_MESSAGE_LEN {
        return Err(CoreError::Validation(format!(
            "Notification message exceeds maximum length of {MAX_MESSAGE_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate the audience/target-users pairing.
///
/// A `specific` audience requires at least one target user id; for the other
/// audiences the list is ignored and must be empty.
pub fn validate_audience_targets(
    audience: TargetAudience,
    target_users: &[DbId],
) -> Result<(), CoreError> {
    match audience {
        TargetAudience::Specific if target_users.is_empty() => Err(CoreError::Validation(
            "target_users must not be empty when target_audience is 'specific'".to_string(),
        )),
        TargetAudience::All | TargetAudience::Users if !target_users.is_empty() => {
            Err(CoreError::Validation(format!(
                "target_users is only allowed when target_audience is '{AUDIENCE_SPECIFIC}'"
            )))
        }
        _ => Ok(()),
    }
}
