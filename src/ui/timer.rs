//! Timer view: mode label, clock, pomodoro count and controls.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use super::{centered_rect, format_clock, Palette};
use crate::app::App;
use crate::types::{Theme, TimerMode};

const PANEL_WIDTH: u16 = 44;
const PANEL_HEIGHT: u16 = 10;

pub(super) fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let panel = centered_rect(PANEL_WIDTH, PANEL_HEIGHT, chunks[0]);
    let block = Block::default()
        .title(" Pomodoro Timer ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border())
        .style(palette.panel());

    let timer = app.timer();
    let label_style = match timer.mode {
        TimerMode::Work => Style::new().fg(palette.text).add_modifier(Modifier::BOLD),
        TimerMode::Break => palette.emphasis(),
    };
    let toggle_label = if app.is_running() { "Stop" } else { "Start" };

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(timer.mode.label(), label_style)),
        Line::default(),
        Line::from(Span::styled(
            format_clock(timer.remaining_seconds),
            Style::new().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::raw(format!("Completed Pomodoros: {}", timer.pomodoro_count)),
            Span::styled("  [c] ↺", palette.hint()),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("[Space] ", palette.hint()),
            Span::raw(toggle_label),
            Span::styled("   [r] ", palette.hint()),
            Span::raw("Reset"),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        panel,
    );

    let theme_hint = match app.theme() {
        Theme::Light => "Dark theme",
        Theme::Dark => "Light theme",
    };
    let footer = Line::from(vec![
        Span::styled("[o] ", palette.hint()),
        Span::raw("Settings"),
        Span::styled("   [t] ", palette.hint()),
        Span::raw(theme_hint),
        Span::styled("   [q] ", palette.hint()),
        Span::raw("Quit"),
    ]);
    frame.render_widget(
        Paragraph::new(footer)
            .alignment(Alignment::Center)
            .style(palette.base()),
        chunks[1],
    );
}
