//! Blocking notice modal, dismissed with Enter or Esc.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::theme::Palette;

pub(crate) fn draw(frame: &mut Frame, area: Rect, text: &str, palette: &Palette) {
    let width = (text.len() as u16 + 6).clamp(24, area.width.saturating_sub(4).max(24));
    let popup = centered(area, width, 5);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::styled(text.to_string(), Style::default().fg(palette.text)),
        Line::default(),
        Line::styled(
            "[ OK ]",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
    ];
    let block = Block::bordered()
        .title(" Upload ")
        .border_style(Style::default().fg(palette.error));
    frame.render_widget(Paragraph::new(lines).centered().block(block), popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
