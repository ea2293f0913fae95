//! Desktop notifications for interval transitions.
//!
//! This module provides:
//!
//! - A [`NotificationSender`] trait over the platform notification service
//! - A `notify-rust` backed implementation ([`DesktopNotifier`])
//! - The [`Notifier`] dispatcher, which checks permission once at startup and
//!   sends best-effort notifications off the UI thread
//! - A mock sender for tests
//!
//! Notifications never affect the timer. Missing permission suppresses them
//! and send failures are logged and dropped.

mod desktop;
pub mod error;

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;

pub use self::desktop::DesktopNotifier;
pub use self::error::NotificationError;

use crate::timer::TimerEvent;

/// Title used for every notification.
pub const TITLE: &str = "Pomodoro Timer";

// ============================================================================
// NotificationType
// ============================================================================

/// Types of notifications that can be sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Work interval completed.
    WorkComplete,
    /// Break interval completed.
    BreakComplete,
}

impl NotificationType {
    /// Returns the notification body text.
    pub fn body(&self) -> &'static str {
        match self {
            NotificationType::WorkComplete => "Work time is over! Time for a break.",
            NotificationType::BreakComplete => "Break time is over! Back to work.",
        }
    }

    /// Maps a timer event to the notification it should raise, if any.
    pub fn from_event(event: &TimerEvent) -> Option<Self> {
        match event {
            TimerEvent::WorkCompleted { .. } => Some(NotificationType::WorkComplete),
            TimerEvent::BreakCompleted => Some(NotificationType::BreakComplete),
            _ => None,
        }
    }
}

// ============================================================================
// Permission
// ============================================================================

/// Notification permission state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Permission {
    /// The user has not decided yet.
    #[default]
    NotDetermined,
    /// Notifications may be shown.
    Granted,
    /// Notifications must not be shown.
    Denied,
}

// ============================================================================
// NotificationSender
// ============================================================================

/// Platform notification service.
///
/// Implementations may block; [`Notifier`] calls `send` on the blocking pool.
pub trait NotificationSender: Send + Sync {
    /// Returns the current permission state.
    fn permission(&self) -> Permission;

    /// Asks the user for permission and returns the outcome.
    fn request_permission(&self) -> Permission;

    /// Shows a notification.
    fn send(&self, kind: NotificationType) -> Result<(), NotificationError>;
}

// ============================================================================
// Notifier
// ============================================================================

/// Best-effort notification dispatcher.
pub struct Notifier {
    sender: Arc<dyn NotificationSender>,
    permission: Permission,
}

impl Notifier {
    /// Creates a dispatcher, querying permission and requesting it if the
    /// user has not decided yet.
    pub fn init(sender: Arc<dyn NotificationSender>) -> Self {
        let mut permission = sender.permission();
        if permission == Permission::NotDetermined {
            permission = sender.request_permission();
            tracing::debug!(?permission, "notification permission requested");
        }

        Self { sender, permission }
    }

    /// Returns the permission resolved at startup.
    pub fn permission(&self) -> Permission {
        self.permission
    }

    /// Sends the notification for a timer event, if it maps to one.
    ///
    /// Returns the handle of the dispatch task, or `None` when nothing was
    /// sent. Must be called from within a tokio runtime.
    pub fn handle_event(&self, event: &TimerEvent) -> Option<JoinHandle<()>> {
        let kind = NotificationType::from_event(event)?;
        self.notify(kind)
    }

    /// Sends a notification on the blocking pool. Failures are logged only.
    pub fn notify(&self, kind: NotificationType) -> Option<JoinHandle<()>> {
        if self.permission != Permission::Granted {
            tracing::debug!(?kind, "notification suppressed without permission");
            return None;
        }

        let sender = Arc::clone(&self.sender);
        Some(tokio::task::spawn_blocking(move || {
            if let Err(e) = sender.send(kind) {
                tracing::debug!(error = %e, ?kind, "notification not delivered");
            }
        }))
    }
}

// ============================================================================
// MockNotificationSender
// ============================================================================

/// Recording notification sender for tests.
#[derive(Debug)]
pub struct MockNotificationSender {
    notifications: Mutex<Vec<NotificationType>>,
    permission: Mutex<Permission>,
    request_outcome: Mutex<Permission>,
    request_calls: AtomicUsize,
    should_fail: AtomicBool,
}

impl Default for MockNotificationSender {
    fn default() -> Self {
        Self::new()
    }
}

impl MockNotificationSender {
    /// Creates a mock with permission already granted.
    #[must_use]
    pub fn new() -> Self {
        Self::with_permission(Permission::Granted)
    }

    /// Creates a mock with the given starting permission. A permission
    /// request is granted unless changed with [`Self::set_request_outcome`].
    #[must_use]
    pub fn with_permission(permission: Permission) -> Self {
        Self {
            notifications: Mutex::new(Vec::new()),
            permission: Mutex::new(permission),
            request_outcome: Mutex::new(Permission::Granted),
            request_calls: AtomicUsize::new(0),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn set_request_outcome(&self, outcome: Permission) {
        *self.request_outcome.lock().unwrap() = outcome;
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    #[must_use]
    pub fn get_notifications(&self) -> Vec<NotificationType> {
        self.notifications.lock().unwrap().clone()
    }

    #[must_use]
    pub fn request_count(&self) -> usize {
        self.request_calls.load(Ordering::SeqCst)
    }
}

impl NotificationSender for MockNotificationSender {
    fn permission(&self) -> Permission {
        *self.permission.lock().unwrap()
    }

    fn request_permission(&self) -> Permission {
        self.request_calls.fetch_add(1, Ordering::SeqCst);
        let outcome = *self.request_outcome.lock().unwrap();
        *self.permission.lock().unwrap() = outcome;
        outcome
    }

    fn send(&self, kind: NotificationType) -> Result<(), NotificationError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(NotificationError::SendFailed("Mock failure".to_string()));
        }
        self.notifications.lock().unwrap().push(kind);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_bodies() {
        assert_eq!(
            NotificationType::WorkComplete.body(),
            "Work time is over! Time for a break."
        );
        assert_eq!(
            NotificationType::BreakComplete.body(),
            "Break time is over! Back to work."
        );
    }

    #[test]
    fn test_from_event() {
        assert_eq!(
            NotificationType::from_event(&TimerEvent::WorkCompleted { pomodoro_count: 1 }),
            Some(NotificationType::WorkComplete)
        );
        assert_eq!(
            NotificationType::from_event(&TimerEvent::BreakCompleted),
            Some(NotificationType::BreakComplete)
        );
        assert_eq!(
            NotificationType::from_event(&TimerEvent::Tick {
                remaining_seconds: 3
            }),
            None
        );
    }

    mod permission_tests {
        use super::*;

        #[test]
        fn test_granted_is_not_requested() {
            let mock = Arc::new(MockNotificationSender::new());
            let notifier = Notifier::init(mock.clone());
            assert_eq!(notifier.permission(), Permission::Granted);
            assert_eq!(mock.request_count(), 0);
        }

        #[test]
        fn test_denied_is_not_requested() {
            let mock = Arc::new(MockNotificationSender::with_permission(Permission::Denied));
            let notifier = Notifier::init(mock.clone());
            assert_eq!(notifier.permission(), Permission::Denied);
            assert_eq!(mock.request_count(), 0);
        }

        #[test]
        fn test_undetermined_is_requested_once() {
            let mock = Arc::new(MockNotificationSender::with_permission(
                Permission::NotDetermined,
            ));
            mock.set_request_outcome(Permission::Denied);

            let notifier = Notifier::init(mock.clone());

            assert_eq!(mock.request_count(), 1);
            assert_eq!(notifier.permission(), Permission::Denied);
        }
    }

    mod dispatch_tests {
        use super::*;

        #[tokio::test]
        async fn test_transition_events_are_sent() {
            let mock = Arc::new(MockNotificationSender::new());
            let notifier = Notifier::init(mock.clone());

            notifier
                .handle_event(&TimerEvent::WorkCompleted { pomodoro_count: 1 })
                .expect("dispatched")
                .await
                .unwrap();
            notifier
                .handle_event(&TimerEvent::BreakCompleted)
                .expect("dispatched")
                .await
                .unwrap();

            assert_eq!(
                mock.get_notifications(),
                vec![
                    NotificationType::WorkComplete,
                    NotificationType::BreakComplete
                ]
            );
        }

        #[tokio::test]
        async fn test_other_events_are_ignored() {
            let mock = Arc::new(MockNotificationSender::new());
            let notifier = Notifier::init(mock.clone());

            assert!(notifier.handle_event(&TimerEvent::Started).is_none());
            assert!(mock.get_notifications().is_empty());
        }

        #[tokio::test]
        async fn test_denied_permission_suppresses() {
            let mock = Arc::new(MockNotificationSender::with_permission(Permission::Denied));
            let notifier = Notifier::init(mock.clone());

            assert!(notifier.notify(NotificationType::WorkComplete).is_none());
            assert!(mock.get_notifications().is_empty());
        }

        #[tokio::test]
        async fn test_send_failure_is_swallowed() {
            let mock = Arc::new(MockNotificationSender::new());
            mock.set_should_fail(true);
            let notifier = Notifier::init(mock.clone());

            let handle = notifier.notify(NotificationType::BreakComplete).unwrap();
            assert!(handle.await.is_ok());
            assert!(mock.get_notifications().is_empty());
        }
    }
}
