//! Notification system error types.

use thiserror::Error;

/// Errors that can occur in the notification system.
///
/// None of these ever reach the user; the dispatcher logs and drops them.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// Failed to send a notification.
    #[error("failed to send notification: {0}")]
    SendFailed(String),

    /// Notification permission was denied.
    #[error("notification permission denied")]
    PermissionDenied,
}

impl NotificationError {
    /// Returns true if this error is related to permissions.
    #[must_use]
    pub fn is_permission_error(&self) -> bool {
        matches!(self, Self::PermissionDenied)
    }
}
