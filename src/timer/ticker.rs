//! One-second tick source for the countdown.
//!
//! The ticker owns a single interval task that is armed only while the
//! timer runs. Each arming gets a new generation; signals carrying an older
//! generation are rejected, so nothing sent before a disarm is ever applied.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};

/// Default tick period.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A tick delivered by the ticker task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSignal {
    generation: u64,
}

/// Armable periodic scheduler.
pub struct Ticker {
    period: Duration,
    tick_tx: mpsc::UnboundedSender<TickSignal>,
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Creates a disarmed ticker with the default one-second period.
    pub fn new(tick_tx: mpsc::UnboundedSender<TickSignal>) -> Self {
        Self::with_period(TICK_PERIOD, tick_tx)
    }

    /// Creates a disarmed ticker with a custom period.
    pub fn with_period(period: Duration, tick_tx: mpsc::UnboundedSender<TickSignal>) -> Self {
        Self {
            period,
            tick_tx,
            generation: 0,
            handle: None,
        }
    }

    /// Starts delivering ticks. No-op if already armed.
    ///
    /// Must be called from within a tokio runtime.
    pub fn arm(&mut self) {
        if self.handle.is_some() {
            return;
        }

        self.generation += 1;
        let signal = TickSignal {
            generation: self.generation,
        };
        let tx = self.tick_tx.clone();
        let period = self.period;

        self.handle = Some(tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // First tick completes immediately.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                if tx.send(signal).is_err() {
                    break;
                }
            }
        }));

        tracing::debug!(generation = self.generation, "ticker armed");
    }

    /// Stops delivering ticks. No-op if already disarmed.
    pub fn disarm(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        handle.abort();
        self.generation += 1;
        tracing::debug!("ticker disarmed");
    }

    /// Arms or disarms to match the timer's running flag.
    pub fn sync(&mut self, running: bool) {
        if running {
            self.arm();
        } else {
            self.disarm();
        }
    }

    /// Returns true while ticks are being delivered.
    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    /// Returns true if the signal came from the current arming.
    pub fn accepts(&self, signal: &TickSignal) -> bool {
        self.is_armed() && signal.generation == self.generation
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.disarm();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{sleep, timeout};

    const FAST: Duration = Duration::from_millis(20);

    fn create_ticker() -> (Ticker, mpsc::UnboundedReceiver<TickSignal>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Ticker::with_period(FAST, tx), rx)
    }

    #[test]
    fn test_new_uses_one_second_period() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let ticker = Ticker::new(tx);
        assert_eq!(ticker.period, TICK_PERIOD);
        assert_eq!(ticker.period, Duration::from_secs(1));
        assert!(!ticker.is_armed());
    }

    #[tokio::test]
    async fn test_armed_ticker_delivers_signals() {
        let (mut ticker, mut rx) = create_ticker();
        ticker.arm();
        assert!(ticker.is_armed());

        let signal = timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("tick within timeout")
            .expect("channel open");
        assert!(ticker.accepts(&signal));
    }

    #[tokio::test]
    async fn test_disarmed_ticker_is_silent() {
        let (ticker, mut rx) = create_ticker();
        assert!(!ticker.is_armed());

        sleep(FAST * 5).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_disarm_rejects_stale_signals() {
        let (mut ticker, mut rx) = create_ticker();
        ticker.arm();

        let signal = timeout(Duration::from_secs(2), rx.recv())
            .await
            .unwrap()
            .unwrap();
        ticker.disarm();

        assert!(!ticker.accepts(&signal));
        // Drain anything that was queued before the abort.
        while rx.try_recv().is_ok() {}

        sleep(FAST * 5).await;
        assert!(rx.try_recv().is_err(), "no ticks after disarm");
    }

    #[tokio::test]
    async fn test_rearm_starts_new_generation() {
        let (mut ticker, mut rx) = create_ticker();
        ticker.arm();
        let old = timeout(Duration::from_secs(2), rx.recv())
            .await
            .unwrap()
            .unwrap();
        ticker.disarm();
        while rx.try_recv().is_ok() {}

        ticker.arm();
        let new = timeout(Duration::from_secs(2), rx.recv())
            .await
            .unwrap()
            .unwrap();

        assert!(!ticker.accepts(&old));
        assert!(ticker.accepts(&new));
    }

    #[tokio::test]
    async fn test_arm_and_disarm_are_idempotent() {
        let (mut ticker, _rx) = create_ticker();
        ticker.arm();
        let generation = ticker.generation;
        ticker.arm();
        assert_eq!(ticker.generation, generation);

        ticker.disarm();
        let generation = ticker.generation;
        ticker.disarm();
        assert_eq!(ticker.generation, generation);
    }

    #[tokio::test]
    async fn test_sync_follows_running_flag() {
        let (mut ticker, _rx) = create_ticker();
        ticker.sync(true);
        assert!(ticker.is_armed());
        ticker.sync(false);
        assert!(!ticker.is_armed());
    }

    #[tokio::test]
    async fn test_drop_stops_ticks() {
        let (mut ticker, mut rx) = create_ticker();
        ticker.arm();
        let _ = timeout(Duration::from_secs(2), rx.recv()).await;
        drop(ticker);
        while rx.try_recv().is_ok() {}

        sleep(FAST * 5).await;
        assert!(rx.try_recv().is_err());
    }
}
