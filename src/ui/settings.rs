//! Settings dialog.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::{centered_rect, Palette};
use crate::settings::{SettingsDraft, SettingsField};

const DIALOG_WIDTH: u16 = 46;
const DIALOG_HEIGHT: u16 = 13;

pub(super) fn render(frame: &mut Frame, area: Rect, draft: &SettingsDraft, palette: &Palette) {
    let dialog = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
    let block = Block::default()
        .title(" Settings ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(palette.border())
        .style(palette.panel());

    let mut lines = vec![Line::default()];
    for field in [SettingsField::Work, SettingsField::Break] {
        lines.push(Line::from(Span::styled(
            field.label(),
            Style::new().add_modifier(Modifier::BOLD),
        )));
        lines.push(input_line(draft, field, palette));
        lines.push(Line::default());
    }

    match draft.error() {
        Some(error) => lines.push(Line::from(Span::styled(
            error.to_string(),
            palette.error_text(),
        ))),
        None => lines.push(Line::default()),
    }
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("[Enter] ", palette.hint()),
        Span::raw("Save"),
        Span::styled("   [Esc] ", palette.hint()),
        Span::raw("Cancel"),
        Span::styled("   [Tab] ", palette.hint()),
        Span::raw("Next"),
    ]));

    frame.render_widget(Clear, dialog);
    frame.render_widget(Paragraph::new(lines).block(block), dialog);
}

fn input_line<'a>(draft: &'a SettingsDraft, field: SettingsField, palette: &Palette) -> Line<'a> {
    let focused = draft.focused() == field;
    let marker = if focused { "> " } else { "  " };
    let style = if focused {
        palette.emphasis().add_modifier(Modifier::UNDERLINED)
    } else {
        Style::new().fg(palette.text)
    };

    Line::from(vec![
        Span::styled(marker, palette.emphasis()),
        Span::styled(format!("{:<6}", draft.input(field)), style),
    ])
}
