//! Pomodoro Timer Library
//!
//! This library provides the core functionality for the terminal Pomodoro timer.
//! It includes:
//! - Countdown engine with work/break transitions and a one-second ticker
//! - Settings validation and the settings dialog draft
//! - Application state holder and event loop
//! - Terminal rendering with light and dark themes
//! - Best-effort desktop notifications
//! - CLI parsing and startup configuration

pub mod app;
pub mod cli;
pub mod config;
pub mod notification;
pub mod settings;
pub mod timer;
pub mod types;
pub mod ui;

// Re-export commonly used types for convenience
pub use app::{Action, App};
pub use config::{AppConfig, ConfigError};
pub use notification::{
    DesktopNotifier, MockNotificationSender, NotificationError, NotificationSender,
    NotificationType, Notifier, Permission,
};
pub use settings::{SettingsDraft, SettingsError, SettingsField, SettingsStore};
pub use timer::{TickSignal, Ticker, TimerEngine, TimerEvent};
pub use types::{Durations, Theme, TimerMode, TimerState};
