//! Light and dark color palettes.

use ratatui::style::{Color, Modifier, Style};

use crate::types::Theme;

/// Colors used by the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub primary: Color,
    pub muted: Color,
    pub error: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(236, 239, 243),
        surface: Color::Rgb(250, 250, 250),
        text: Color::Rgb(44, 62, 80),
        primary: Color::Rgb(74, 144, 226),
        muted: Color::Rgb(127, 140, 141),
        error: Color::Rgb(231, 76, 60),
    };

    pub const DARK: Palette = Palette {
        background: Color::Rgb(26, 37, 51),
        surface: Color::Rgb(44, 62, 80),
        text: Color::Rgb(245, 247, 250),
        primary: Color::Rgb(74, 144, 226),
        muted: Color::Rgb(149, 165, 166),
        error: Color::Rgb(231, 76, 60),
    };

    /// Returns the palette for a theme.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::LIGHT,
            Theme::Dark => Self::DARK,
        }
    }

    pub fn base(&self) -> Style {
        Style::new().fg(self.text).bg(self.background)
    }

    pub fn panel(&self) -> Style {
        Style::new().fg(self.text).bg(self.surface)
    }

    pub fn border(&self) -> Style {
        Style::new().fg(self.primary)
    }

    pub fn hint(&self) -> Style {
        Style::new().fg(self.muted)
    }

    pub fn emphasis(&self) -> Style {
        Style::new().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn error_text(&self) -> Style {
        Style::new().fg(self.error)
    }
}
