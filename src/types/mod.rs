//! Core data types for the Pomodoro Timer.
//!
//! This module defines the data structures used for:
//! - Timer mode (work / break)
//! - Interval durations
//! - Timer state snapshot
//! - Presentation theme

use serde::{Deserialize, Serialize};

/// Smallest accepted interval length in minutes.
pub const MIN_MINUTES: u32 = 1;

/// Largest accepted interval length in minutes.
pub const MAX_MINUTES: u32 = 120;

// ============================================================================
// TimerMode
// ============================================================================

/// The interval currently being counted down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerMode {
    /// Focus period
    #[default]
    Work,
    /// Rest period following a work interval
    Break,
}

impl TimerMode {
    /// Returns the heading shown above the clock.
    pub fn label(&self) -> &'static str {
        match self {
            TimerMode::Work => "Work Time",
            TimerMode::Break => "Break Time",
        }
    }

    /// Returns the mode that follows this one when the countdown expires.
    pub fn next(&self) -> Self {
        match self {
            TimerMode::Work => TimerMode::Break,
            TimerMode::Break => TimerMode::Work,
        }
    }
}

// ============================================================================
// Durations
// ============================================================================

/// Committed interval lengths in minutes.
///
/// Values are always within `MIN_MINUTES..=MAX_MINUTES` once they reach the
/// timer; see [`crate::settings::SettingsStore::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    /// Work duration in minutes (1-120)
    pub work_minutes: u32,
    /// Break duration in minutes (1-120)
    pub break_minutes: u32,
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            work_minutes: 25,
            break_minutes: 5,
        }
    }
}

impl Durations {
    /// Creates a new pair of durations.
    pub fn new(work_minutes: u32, break_minutes: u32) -> Self {
        Self {
            work_minutes,
            break_minutes,
        }
    }

    /// Work interval length in seconds.
    pub fn work_seconds(&self) -> u32 {
        self.work_minutes * 60
    }

    /// Break interval length in seconds.
    pub fn break_seconds(&self) -> u32 {
        self.break_minutes * 60
    }

    /// Length in seconds of the given mode's interval.
    pub fn seconds_for(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Work => self.work_seconds(),
            TimerMode::Break => self.break_seconds(),
        }
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// Snapshot of the countdown and session counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    /// Current interval
    pub mode: TimerMode,
    /// Remaining seconds in the current interval
    pub remaining_seconds: u32,
    /// Whether the countdown is advancing
    pub is_running: bool,
    /// Number of completed work intervals
    pub pomodoro_count: u32,
    /// Interval lengths the countdown resets to
    pub durations: Durations,
}

impl TimerState {
    /// Creates a stopped state at the start of a work interval.
    pub fn new(durations: Durations) -> Self {
        Self {
            mode: TimerMode::Work,
            remaining_seconds: durations.work_seconds(),
            is_running: false,
            pomodoro_count: 0,
            durations,
        }
    }

    /// Decrements the countdown by one second.
    ///
    /// Returns true if the countdown is at zero afterwards.
    pub fn tick(&mut self) -> bool {
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        }
        self.remaining_seconds == 0
    }

    /// Switches to the next mode and reloads the countdown for it.
    ///
    /// A finished work interval counts as one pomodoro.
    pub fn advance_mode(&mut self) {
        if self.mode == TimerMode::Work {
            self.pomodoro_count += 1;
        }
        self.mode = self.mode.next();
        self.remaining_seconds = self.durations.seconds_for(self.mode);
    }

    /// Returns to a stopped work interval with a full countdown.
    pub fn reset(&mut self) {
        self.is_running = false;
        self.mode = TimerMode::Work;
        self.remaining_seconds = self.durations.work_seconds();
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(Durations::default())
    }
}

// ============================================================================
// Theme
// ============================================================================

/// Color scheme preference. Affects rendering only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background, dark text
    #[default]
    Light,
    /// Dark background, light text
    Dark,
}

impl Theme {
    /// Returns the other theme.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
