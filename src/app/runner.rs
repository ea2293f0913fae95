//! Terminal setup and the main event loop.
//!
//! Key presses, tick signals and timer events are all handled on one task,
//! so every state change happens one at a time.

use std::io::{self, IsTerminal, Stdout};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use crossterm::event::{Event, EventStream};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures::{Stream, StreamExt};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use tokio::sync::mpsc;

use super::{Action, App};
use crate::config::AppConfig;
use crate::notification::{NotificationSender, Notifier};
use crate::timer::{Ticker, TimerEvent};
use crate::types::TimerState;
use crate::ui;

/// Runs the timer in the current terminal until the user quits.
///
/// Returns the timer state at exit.
pub async fn run(config: AppConfig, sender: Arc<dyn NotificationSender>) -> Result<TimerState> {
    if !io::stdout().is_terminal() {
        bail!("pomodoro-tui requires a terminal (TTY) to run");
    }

    let notifier = Notifier::init(sender);
    tracing::info!(permission = ?notifier.permission(), "notifications initialized");

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let app = App::new(&config, event_tx);

    let mut terminal = setup_terminal()?;
    let result = run_loop(
        &mut terminal,
        app,
        &notifier,
        event_rx,
        EventStream::new(),
    )
    .await;
    restore_terminal(&mut terminal)?;

    result.map(|app| app.timer().clone())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("failed to enable raw mode")?;
    undo_on_error(init_screen(), || {
        // The setup error is the one reported.
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })
}

fn init_screen() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(stdout)).context("failed to create terminal")?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

/// Runs `undo` when `result` is an error, then passes `result` through.
fn undo_on_error<T>(result: Result<T>, undo: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Drives the app from terminal input and the ticker until quit or until
/// the input stream ends. Returns the final state.
pub async fn run_loop<B, S>(
    terminal: &mut Terminal<B>,
    mut app: App,
    notifier: &Notifier,
    mut timer_rx: mpsc::UnboundedReceiver<TimerEvent>,
    mut input: S,
) -> Result<App>
where
    B: Backend,
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();
    let mut ticker = Ticker::new(tick_tx);

    loop {
        terminal
            .draw(|f| ui::render(f, &app))
            .context("failed to draw")?;

        tokio::select! {
            maybe_event = input.next() => match maybe_event {
                Some(Ok(Event::Key(key))) => {
                    if let Some(action) = Action::from_key(key, app.settings_dialog().is_some()) {
                        app.dispatch(action);
                    }
                }
                // Resize and other events only need a redraw.
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e).context("failed to read terminal event"),
                None => break,
            },
            Some(signal) = tick_rx.recv() => {
                if ticker.accepts(&signal) {
                    app.tick();
                }
            }
        }

        ticker.sync(app.is_running());

        while let Ok(event) = timer_rx.try_recv() {
            tracing::trace!(?event, "timer event");
            // Sends are detached; nothing waits on them.
            notifier.handle_event(&event);
        }

        if app.should_quit() {
            break;
        }
    }

    ticker.disarm();
    Ok(app)
}

// ============================================================================
// Tests
// ============================================================================
