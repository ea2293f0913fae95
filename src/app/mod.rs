//! Application state holder.
//!
//! [`App`] is the single owner of the timer, the settings, the dialog draft
//! and the theme. Views read it through accessors and every mutation goes
//! through one of its operations, usually via [`App::dispatch`].

mod action;
pub mod runner;

pub use action::Action;

use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::settings::{SettingsDraft, SettingsError, SettingsStore};
use crate::timer::{TimerEngine, TimerEvent};
use crate::types::{Durations, Theme, TimerState};

// ============================================================================
// App
// ============================================================================

/// Owns all application state.
pub struct App {
    engine: TimerEngine,
    settings: SettingsStore,
    dialog: Option<SettingsDraft>,
    theme: Theme,
    should_quit: bool,
}

impl App {
    /// Creates the application state from startup configuration.
    pub fn new(config: &AppConfig, event_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        let durations = config.durations();
        Self {
            engine: TimerEngine::new(durations, event_tx),
            settings: SettingsStore::new(durations),
            dialog: None,
            theme: config.theme,
            should_quit: false,
        }
    }

    /// Applies a user action.
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(%action, "action");

        match action {
            Action::ToggleRunning => self.toggle_running(),
            Action::Reset => self.reset_timer(),
            Action::ResetPomodoroCount => self.reset_pomodoro_count(),
            Action::OpenSettings => self.open_settings(),
            Action::SaveSettings => {
                if let Err(e) = self.save_settings() {
                    tracing::debug!(error = %e, "settings rejected");
                }
            }
            Action::CancelSettings => self.cancel_settings(),
            Action::SettingsInput(c) => {
                if let Some(draft) = self.dialog.as_mut() {
                    draft.push_char(c);
                }
            }
            Action::SettingsBackspace => {
                if let Some(draft) = self.dialog.as_mut() {
                    draft.pop_char();
                }
            }
            Action::SettingsNextField => {
                if let Some(draft) = self.dialog.as_mut() {
                    draft.focus_next();
                }
            }
            Action::ToggleTheme => self.toggle_theme(),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Advances the countdown by one second.
    pub fn tick(&mut self) {
        self.engine.tick();
    }

    /// Starts or stops the countdown.
    pub fn toggle_running(&mut self) {
        self.engine.toggle();
    }

    /// Stops the countdown and returns to a full work interval.
    pub fn reset_timer(&mut self) {
        self.engine.reset();
    }

    /// Clears the completed pomodoro count.
    pub fn reset_pomodoro_count(&mut self) {
        self.engine.reset_pomodoro_count();
    }

    /// Opens the settings dialog seeded with the committed durations.
    pub fn open_settings(&mut self) {
        self.dialog = Some(SettingsDraft::seeded(self.settings.durations()));
    }

    /// Closes the settings dialog without validating or applying edits.
    pub fn cancel_settings(&mut self) {
        self.dialog = None;
    }

    /// Validates and applies the settings dialog.
    ///
    /// On success the durations are committed, the countdown reloads with the
    /// new work length, the pomodoro count is cleared and the dialog closes.
    /// On failure the error is shown in the dialog and nothing changes.
    /// Without an open dialog this is a no-op.
    pub fn save_settings(&mut self) -> Result<(), SettingsError> {
        let Some(draft) = self.dialog.as_mut() else {
            return Ok(());
        };

        let (work, brk) = draft.values();
        match self.settings.apply(work, brk) {
            Ok(durations) => {
                self.apply_committed(durations);
                self.dialog = None;
                Ok(())
            }
            Err(e) => {
                draft.set_error(e.clone());
                Err(e)
            }
        }
    }

    fn apply_committed(&mut self, durations: Durations) {
        self.engine.apply_durations(durations);
        self.engine.reset_pomodoro_count();
        tracing::info!(
            work_minutes = durations.work_minutes,
            break_minutes = durations.break_minutes,
            "settings applied"
        );
    }

    /// Switches between light and dark theme.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Returns the timer state.
    pub fn timer(&self) -> &TimerState {
        self.engine.state()
    }

    /// Returns true if the countdown is advancing.
    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    /// Returns the committed durations.
    pub fn durations(&self) -> Durations {
        self.settings.durations()
    }

    /// Returns the open settings dialog, if any.
    pub fn settings_dialog(&self) -> Option<&SettingsDraft> {
        self.dialog.as_ref()
    }

    /// Returns the active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

// ============================================================================
// Tests
// ============================================================================
