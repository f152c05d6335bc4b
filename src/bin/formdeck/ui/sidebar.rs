//! Dashboard sidebar: page list, support footer, and the storage gauge.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::screen::ScreenState;
use crate::theme::{GlyphSet, Palette};

pub(crate) fn draw(
    frame: &mut Frame,
    area: Rect,
    screen: &ScreenState,
    palette: &Palette,
    glyphs: &GlyphSet,
) {
    let catalog = screen.controller.catalog();
    let mut lines: Vec<Line> = Vec::new();

    for page in &catalog.menu_pages {
        lines.push(page_line(
            &page.label,
            page.id == screen.current_page,
            palette,
            glyphs,
        ));
    }
    lines.push(Line::default());
    for page in &catalog.footer_pages {
        lines.push(page_line(
            &page.label,
            page.id == screen.current_page,
            palette,
            glyphs,
        ));
    }
    lines.push(Line::default());
    lines.push(Line::styled("Storage", Style::default().fg(palette.dim)));
    lines.push(storage_gauge(area.width, palette));

    let block = Block::bordered()
        .title(" FormDeck ")
        .border_style(Style::default().fg(palette.border));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn page_line<'a>(
    label: &'a str,
    current: bool,
    palette: &Palette,
    glyphs: &GlyphSet,
) -> Line<'a> {
    let style = if current {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.text)
    };
    Line::from(vec![
        Span::styled(format!(" {} ", glyphs.bullet), Style::default().fg(palette.dim)),
        Span::styled(label, style),
    ])
}

/// Fixed 75% usage bar matching the stock shell's storage widget.
fn storage_gauge(width: u16, palette: &Palette) -> Line<'static> {
    let track = usize::from(width.saturating_sub(10)).max(4);
    let filled = track * 3 / 4;
    let mut bar = String::with_capacity(track);
    for index in 0..track {
        bar.push(if index < filled { '=' } else { '-' });
    }
    Line::from(vec![
        Span::styled(format!(" [{bar}]"), Style::default().fg(palette.accent)),
        Span::styled(" 75%", Style::default().fg(palette.dim)),
    ])
}
