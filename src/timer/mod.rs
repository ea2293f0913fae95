//! Timer module for the Pomodoro Timer.
//!
//! - `engine`: countdown state machine with mode transitions
//! - `ticker`: armable one-second tick source

pub mod engine;
pub mod ticker;

pub use engine::{TimerEngine, TimerEvent};
pub use ticker::{TickSignal, Ticker, TICK_PERIOD};
