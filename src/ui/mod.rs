//! Terminal rendering.
//!
//! - `timer`: clock, mode label, pomodoro count and controls
//! - `settings`: the settings dialog drawn over the timer
//! - `palette`: light and dark colors
//!
//! Views only read [`App`]; they never change it.

mod palette;
mod settings;
mod timer;

pub use palette::Palette;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::app::App;

/// Draws the whole screen.
pub fn render(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme());
    let area = frame.size();

    frame.render_widget(Block::default().style(palette.base()), area);
    timer::render(frame, area, app, &palette);

    if let Some(draft) = app.settings_dialog() {
        settings::render(frame, area, draft, &palette);
    }
}

/// Formats seconds as `MM:SS`, each part padded to at least two digits.
pub fn format_clock(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Returns a rectangle of the given size centered in `area`, clamped to it.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width - width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1])[1]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Action;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tokio::sync::mpsc;

    /// Renders the app into an in-memory terminal and returns its text.
    fn render_to_string(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    fn create_app() -> App {
        let (tx, _rx) = mpsc::unbounded_channel();
        App::new(&AppConfig::default(), tx)
    }

    mod format_clock_tests {
        use super::*;

        #[test]
        fn test_zero() {
            assert_eq!(format_clock(0), "00:00");
        }

        #[test]
        fn test_seconds_only() {
            assert_eq!(format_clock(45), "00:45");
        }

        #[test]
        fn test_default_work() {
            assert_eq!(format_clock(1500), "25:00");
        }

        #[test]
        fn test_mixed() {
            assert_eq!(format_clock(61), "01:01");
            assert_eq!(format_clock(599), "09:59");
        }

        #[test]
        fn test_over_one_hundred_minutes() {
            assert_eq!(format_clock(7200), "120:00");
        }
    }

    mod layout_tests {
        use super::*;

        #[test]
        fn test_centered_rect() {
            let area = Rect::new(0, 0, 80, 24);
            let rect = centered_rect(40, 10, area);
            assert_eq!(rect, Rect::new(20, 7, 40, 10));
        }

        #[test]
        fn test_centered_rect_clamps() {
            let area = Rect::new(0, 0, 20, 5);
            let rect = centered_rect(40, 10, area);
            assert_eq!(rect.width, 20);
            assert_eq!(rect.height, 5);
        }
    }

    mod render_tests {
        use super::*;

        #[test]
        fn test_renders_initial_timer() {
            let app = create_app();
            let screen = render_to_string(&app, 80, 24);

            assert!(screen.contains("Work Time"));
            assert!(screen.contains("25:00"));
            assert!(screen.contains("Completed Pomodoros: 0"));
            assert!(screen.contains("Start"));
            assert!(!screen.contains("Work Time (minutes):"));
        }

        #[test]
        fn test_running_label_shows_stop() {
            let mut app = create_app();
            app.dispatch(Action::ToggleRunning);
            app.tick();

            let screen = render_to_string(&app, 80, 24);
            assert!(screen.contains("Stop"));
            assert!(screen.contains("24:59"));
        }

        #[test]
        fn test_renders_break_mode() {
            let mut app = create_app();
            app.dispatch(Action::ToggleRunning);
            for _ in 0..1500 {
                app.tick();
            }

            let screen = render_to_string(&app, 80, 24);
            assert!(screen.contains("Break Time"));
            assert!(screen.contains("05:00"));
            assert!(screen.contains("Completed Pomodoros: 1"));
        }

        #[test]
        fn test_renders_settings_dialog_with_error() {
            let mut app = create_app();
            app.dispatch(Action::OpenSettings);
            app.dispatch(Action::SettingsInput('9'));

            let screen = render_to_string(&app, 80, 24);
            assert!(screen.contains("Work Time (minutes):"));
            assert!(screen.contains("Break Time (minutes):"));
            assert!(screen.contains("259"));
            assert!(screen.contains("Time cannot exceed 120 minutes"));
        }

        #[test]
        fn test_dark_theme_renders() {
            let mut app = create_app();
            app.dispatch(Action::ToggleTheme);

            let screen = render_to_string(&app, 80, 24);
            assert!(screen.contains("Light theme"));
        }

        #[test]
        fn test_tiny_terminal_does_not_panic() {
            let mut app = create_app();
            app.dispatch(Action::OpenSettings);
            let _ = render_to_string(&app, 10, 3);
        }
    }
}
