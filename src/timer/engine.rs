//! Countdown engine for the Pomodoro Timer.
//!
//! This module provides the core timer functionality:
//! - Countdown driven by externally delivered ticks
//! - Work → Break → Work mode transitions
//! - Completed pomodoro counting
//! - Event firing for notifications and logging

use tokio::sync::mpsc;

use crate::types::{Durations, TimerMode, TimerState};

// ============================================================================
// TimerEvent
// ============================================================================

/// Timer events for notifications and external integrations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// Countdown started
    Started,
    /// Countdown stopped
    Stopped,
    /// One second elapsed
    Tick {
        /// Remaining seconds after the decrement
        remaining_seconds: u32,
    },
    /// Work interval finished, break begins
    WorkCompleted {
        /// Total pomodoro count
        pomodoro_count: u32,
    },
    /// Break interval finished, work begins
    BreakCompleted,
    /// Timer returned to a stopped work interval
    Reset,
    /// New durations were applied
    DurationsApplied {
        /// Work duration in minutes
        work_minutes: u32,
        /// Break duration in minutes
        break_minutes: u32,
    },
    /// Completed pomodoro count cleared
    PomodoroCountReset,
}

// ============================================================================
// TimerEngine
// ============================================================================

/// Countdown engine that owns the timer state and emits events.
pub struct TimerEngine {
    /// Current timer state
    state: TimerState,
    /// Event sender channel
    event_tx: mpsc::UnboundedSender<TimerEvent>,
}

impl TimerEngine {
    /// Creates a new engine in a stopped work interval.
    pub fn new(durations: Durations, event_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        Self {
            state: TimerState::new(durations),
            event_tx,
        }
    }

    /// Advances the countdown by one second.
    ///
    /// Does nothing while stopped. When the countdown reaches zero the
    /// mode transition fires within the same call.
    pub fn tick(&mut self) {
        if !self.state.is_running {
            return;
        }

        let completed = self.state.tick();

        self.emit(TimerEvent::Tick {
            remaining_seconds: self.state.remaining_seconds,
        });

        if completed {
            self.handle_timer_complete();
        }
    }

    /// Handles countdown expiry (mode transitions).
    fn handle_timer_complete(&mut self) {
        let finished = self.state.mode;
        self.state.advance_mode();

        match finished {
            TimerMode::Work => {
                tracing::info!(
                    pomodoro_count = self.state.pomodoro_count,
                    "work interval complete"
                );
                self.emit(TimerEvent::WorkCompleted {
                    pomodoro_count: self.state.pomodoro_count,
                });
            }
            TimerMode::Break => {
                tracing::info!("break interval complete");
                self.emit(TimerEvent::BreakCompleted);
            }
        }
    }

    /// Starts the countdown. Starting a running timer is a no-op.
    pub fn start(&mut self) {
        if self.state.is_running {
            return;
        }
        self.state.is_running = true;
        self.emit(TimerEvent::Started);
    }

    /// Stops the countdown. Stopping a stopped timer is a no-op.
    pub fn stop(&mut self) {
        if !self.state.is_running {
            return;
        }
        self.state.is_running = false;
        self.emit(TimerEvent::Stopped);
    }

    /// Flips between running and stopped.
    pub fn toggle(&mut self) {
        if self.state.is_running {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Stops the timer and returns to a full work interval.
    pub fn reset(&mut self) {
        self.state.reset();
        self.emit(TimerEvent::Reset);
    }

    /// Replaces the durations and reloads the countdown with the work length.
    ///
    /// The mode and running flag are left as they are, so a break in progress
    /// continues with the work length until the next transition.
    pub fn apply_durations(&mut self, durations: Durations) {
        self.state.durations = durations;
        self.state.remaining_seconds = durations.work_seconds();
        self.emit(TimerEvent::DurationsApplied {
            work_minutes: durations.work_minutes,
            break_minutes: durations.break_minutes,
        });
    }

    /// Clears the completed pomodoro count.
    pub fn reset_pomodoro_count(&mut self) {
        self.state.pomodoro_count = 0;
        self.emit(TimerEvent::PomodoroCountReset);
    }

    /// Returns a reference to the current timer state.
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Returns true if the countdown is advancing.
    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    /// Returns a mutable reference to the timer state (for testing).
    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut TimerState {
        &mut self.state
    }

    fn emit(&self, event: TimerEvent) {
        if self.event_tx.send(event).is_err() {
            tracing::debug!("timer event receiver dropped");
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
