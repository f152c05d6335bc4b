//! Header bar: current page title and the search box.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::screen::{Focus, ScreenState};
use crate::theme::Palette;
use crate::ui::truncate_display;

pub(crate) fn draw(frame: &mut Frame, area: Rect, screen: &ScreenState, palette: &Palette) {
    let catalog = screen.controller.catalog();
    let title = catalog
        .menu_pages
        .iter()
        .chain(catalog.footer_pages.iter())
        .find(|page| page.id == screen.current_page)
        .map_or(screen.current_page.as_str(), |page| page.label.as_str());

    let search_focused = screen.focus == Focus::Search;
    let search_style = if search_focused {
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.dim)
    };
    let query = truncate_display(&screen.search_query, 24);
    let search_text = if query.is_empty() && !search_focused {
        "Search (Ctrl+F)".to_string()
    } else if search_focused {
        format!("Search: {query}_")
    } else {
        format!("Search: {query}")
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {title} "),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(search_text, search_style),
    ]);
    let block = Block::bordered().border_style(Style::default().fg(palette.border));
    frame.render_widget(Paragraph::new(line).block(block), area);
}
