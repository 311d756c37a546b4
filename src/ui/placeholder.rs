use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tabs::Tab;

/// Draws a stub panel for tabs that have no backing systems yet
pub fn draw_placeholder_panel(frame: &mut Frame, area: Rect, tab: Tab) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", tab.title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Under construction...",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
