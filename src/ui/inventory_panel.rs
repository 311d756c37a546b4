use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::game_state::GameState;
use crate::items::{InventoryItem, Rarity};

const CARDS_PER_ROW: usize = 3;
const CARD_HEIGHT: u16 = 5;

/// Draws the inventory tab as a grid of item cards
pub fn draw_inventory_panel(frame: &mut Frame, area: Rect, state: &GameState) {
    let block = Block::default().borders(Borders::ALL).title(" Inventory ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = state.inventory.chunks(CARDS_PER_ROW);

    let mut constraints: Vec<Constraint> = rows
        .clone()
        .map(|_| Constraint::Length(CARD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let row_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (row_index, row_items) in rows.enumerate() {
        let card_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(34),
                Constraint::Percentage(33),
            ])
            .split(row_chunks[row_index]);

        for (card_index, item) in row_items.iter().enumerate() {
            draw_item_card(frame, card_chunks[card_index], item);
        }
    }
}

fn draw_item_card(frame: &mut Frame, area: Rect, item: &InventoryItem) {
    let color = rarity_color(item.rarity);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(vec![
            Span::raw(format!("{} ", item.icon)),
            Span::styled(item.name, Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::styled(format!("[{}]", item.rarity.name()), Style::default().fg(color)),
            Span::raw(" "),
            Span::styled(item.kind.name(), Style::default().fg(Color::DarkGray)),
        ]),
    ];

    if item.equipped {
        lines.push(Line::from(Span::styled(
            "Equipped",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let card = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(card, inner);
}

/// Display color for each rarity tier.
fn rarity_color(rarity: Rarity) -> Color {
    match rarity {
        Rarity::Common => Color::Gray,
        Rarity::Rare => Color::Blue,
        Rarity::Epic => Color::Magenta,
        Rarity::Legendary => Color::Yellow,
    }
}
