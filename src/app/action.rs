//! User actions and their key bindings.
//!
//! Every control on screen maps to exactly one [`Action`]; the runner turns
//! key presses into actions and hands them to [`super::App::dispatch`].

use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

// ============================================================================
// Action
// ============================================================================

/// Operations the user can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Start or stop the countdown
    ToggleRunning,
    /// Return to a stopped, full work interval
    Reset,
    /// Clear the completed pomodoro count
    ResetPomodoroCount,
    /// Open the settings dialog
    OpenSettings,
    /// Validate and apply the settings dialog
    SaveSettings,
    /// Close the settings dialog discarding edits
    CancelSettings,
    /// Type a character into the focused settings field
    SettingsInput(char),
    /// Delete the last character of the focused settings field
    SettingsBackspace,
    /// Move focus to the other settings field
    SettingsNextField,
    /// Switch between light and dark theme
    ToggleTheme,
    /// Leave the application
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::ToggleRunning => write!(f, "toggle_running"),
            Action::Reset => write!(f, "reset"),
            Action::ResetPomodoroCount => write!(f, "reset_pomodoro_count"),
            Action::OpenSettings => write!(f, "open_settings"),
            Action::SaveSettings => write!(f, "save_settings"),
            Action::CancelSettings => write!(f, "cancel_settings"),
            Action::SettingsInput(c) => write!(f, "settings_input({c})"),
            Action::SettingsBackspace => write!(f, "settings_backspace"),
            Action::SettingsNextField => write!(f, "settings_next_field"),
            Action::ToggleTheme => write!(f, "toggle_theme"),
            Action::Quit => write!(f, "quit"),
        }
    }
}

impl Action {
    /// Maps a key press to an action.
    ///
    /// While the settings dialog is open, keys edit the dialog instead of
    /// controlling the timer. `Ctrl-C` always quits.
    pub fn from_key(key: KeyEvent, settings_open: bool) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Action::Quit),
                _ => None,
            };
        }

        if settings_open {
            return match key.code {
                KeyCode::Enter => Some(Action::SaveSettings),
                KeyCode::Esc => Some(Action::CancelSettings),
                KeyCode::Backspace => Some(Action::SettingsBackspace),
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                    Some(Action::SettingsNextField)
                }
                KeyCode::Char(c) => Some(Action::SettingsInput(c)),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(' ') | KeyCode::Char('s') => Some(Action::ToggleRunning),
            KeyCode::Char('r') => Some(Action::Reset),
            KeyCode::Char('c') => Some(Action::ResetPomodoroCount),
            KeyCode::Char('o') | KeyCode::Char(',') => Some(Action::OpenSettings),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
