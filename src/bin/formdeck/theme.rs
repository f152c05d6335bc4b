//! Shell color palette and glyph set so every pane styles consistently.

use clap::ValueEnum;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Theme {
    /// Green accent matching the stock dashboard.
    Meadow,
    /// Muted blue-grey accent.
    Slate,
    /// Monochrome, for terminals with reduced palettes.
    Mono,
}

impl Theme {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "meadow" => Some(Theme::Meadow),
            "slate" => Some(Theme::Slate),
            "mono" => Some(Theme::Mono),
            _ => None,
        }
    }

    pub(crate) fn palette(self) -> Palette {
        match self {
            Theme::Meadow => Palette {
                accent: Color::Rgb(9, 146, 80),
                accent_strong: Color::Rgb(8, 116, 67),
                text: Color::Rgb(65, 70, 81),
                dim: Color::Rgb(113, 118, 128),
                error: Color::Rgb(217, 45, 32),
                border: Color::Rgb(233, 234, 235),
                badge: Color::Rgb(250, 250, 250),
            },
            Theme::Slate => Palette {
                accent: Color::Rgb(84, 105, 212),
                accent_strong: Color::Rgb(64, 81, 181),
                text: Color::Rgb(70, 74, 84),
                dim: Color::Rgb(120, 124, 134),
                error: Color::Rgb(200, 60, 60),
                border: Color::Rgb(220, 222, 228),
                badge: Color::Rgb(244, 244, 248),
            },
            Theme::Mono => Palette {
                accent: Color::White,
                accent_strong: Color::Gray,
                text: Color::Gray,
                dim: Color::DarkGray,
                error: Color::White,
                border: Color::DarkGray,
                badge: Color::Black,
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Palette {
    pub accent: Color,
    pub accent_strong: Color,
    pub text: Color,
    pub dim: Color,
    pub error: Color,
    pub border: Color,
    pub badge: Color,
}

/// Glyphs with an ASCII fallback for terminals without wide unicode fonts.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GlyphSet {
    pub check: &'static str,
    pub arrow_down: &'static str,
    pub marker: &'static str,
    pub bullet: &'static str,
    pub required: &'static str,
    pub help: &'static str,
}

impl GlyphSet {
    pub(crate) fn unicode() -> Self {
        Self {
            check: "✓",
            arrow_down: "▾",
            marker: "›",
            bullet: "•",
            required: "*",
            help: "?",
        }
    }

    pub(crate) fn ascii() -> Self {
        Self {
            check: "v",
            arrow_down: "v",
            marker: ">",
            bullet: "*",
            required: "*",
            help: "?",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_names_parse_case_insensitively() {
        assert_eq!(Theme::from_name("Meadow"), Some(Theme::Meadow));
        assert_eq!(Theme::from_name(" SLATE "), Some(Theme::Slate));
        assert_eq!(Theme::from_name("neon"), None);
    }
}
