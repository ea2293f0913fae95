//! Display utilities for the Pomodoro Timer CLI.
//!
//! Output printed outside the full-screen UI:
//! - Session summary after quitting
//! - Effective configuration
//! - Error messages

use anyhow::{Context, Result};

use crate::config::AppConfig;
use crate::types::TimerState;
use crate::ui::format_clock;

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Shows a short summary of the session after the UI closes.
    pub fn show_summary(state: &TimerState) {
        println!("{}", Self::summary(state));
    }

    /// Shows the effective configuration as TOML.
    pub fn show_config(config: &AppConfig) -> Result<()> {
        let text = toml::to_string_pretty(config).context("failed to serialize config")?;
        print!("{text}");
        Ok(())
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("error: {message}");
    }

    fn summary(state: &TimerState) -> String {
        let noun = if state.pomodoro_count == 1 {
            "pomodoro"
        } else {
            "pomodoros"
        };
        format!(
            "Completed {} {noun} ({} stopped at {})",
            state.pomodoro_count,
            state.mode.label(),
            format_clock(state.remaining_seconds)
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
