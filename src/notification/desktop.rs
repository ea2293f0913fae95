//! Desktop notifications via `notify-rust`.

use notify_rust::Notification;

use super::{NotificationError, NotificationSender, NotificationType, Permission, TITLE};

/// Application name reported to the notification daemon.
const APP_NAME: &str = "pomodoro-tui";

/// Sends notifications through the platform notification service.
///
/// The platform backends used here have no permission prompt, so the
/// permission is fixed at construction: granted when enabled, denied
/// when the user turned notifications off.
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    enabled: bool,
}

impl DesktopNotifier {
    /// Creates a notifier. A disabled notifier reports `Denied`.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl NotificationSender for DesktopNotifier {
    fn permission(&self) -> Permission {
        if self.enabled {
            Permission::Granted
        } else {
            Permission::Denied
        }
    }

    fn request_permission(&self) -> Permission {
        self.permission()
    }

    fn send(&self, kind: NotificationType) -> Result<(), NotificationError> {
        if !self.enabled {
            return Err(NotificationError::PermissionDenied);
        }

        Notification::new()
            .appname(APP_NAME)
            .summary(TITLE)
            .body(kind.body())
            .show()
            .map(|_| ())
            .map_err(|e| NotificationError::SendFailed(e.to_string()))
    }
}
