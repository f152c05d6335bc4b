//! Shell rendering: sidebar, header, settings content, and the notice modal.

mod form_view;
mod header;
mod notice;
mod sidebar;

use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::screen::ScreenState;
use crate::theme::{GlyphSet, Palette};

pub(crate) fn draw(frame: &mut Frame, screen: &ScreenState, palette: &Palette, glyphs: &GlyphSet) {
    let area = frame.area();
    let sidebar_width = if screen.sidebar_open { 24 } else { 0 };
    let [sidebar_area, main_area] =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(20)]).areas(area);
    if screen.sidebar_open {
        sidebar::draw(frame, sidebar_area, screen, palette, glyphs);
    }

    let [header_area, content_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(5)]).areas(main_area);
    header::draw(frame, header_area, screen, palette);
    form_view::draw(frame, content_area, screen, palette, glyphs);

    if let Some(notice) = screen.controller.notice() {
        notice::draw(frame, area, &notice.text, palette);
    }
}

#[must_use]
pub(crate) fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Clip to a display width without splitting a wide character.
#[must_use]
pub(crate) fn truncate_display(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_display_width_not_char_count() {
        assert_eq!(truncate_display("abcdef", 3), "abc");
        assert_eq!(truncate_display("日本語", 4), "日本");
        assert_eq!(truncate_display("abc", 0), "");
    }
}
