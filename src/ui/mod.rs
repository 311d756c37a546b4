//! Terminal rendering: layout shell, tab bar, and panel dispatch.

mod battle_panel;
mod character_panel;
mod inventory_panel;
mod placeholder;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::game_state::GameState;
use crate::tabs::Tab;

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, state: &GameState) {
    let size = frame.size();

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(12), // Character panel
            Constraint::Length(3),  // Tab bar
            Constraint::Min(0),     // Active tab content
            Constraint::Length(3),  // Footer
        ])
        .split(size);

    character_panel::draw_character_panel(frame, v_chunks[0], state);
    draw_tab_bar(frame, v_chunks[1], state);

    match state.active_tab {
        Tab::Battle => battle_panel::draw_battle_panel(frame, v_chunks[2], state),
        Tab::Inventory => inventory_panel::draw_inventory_panel(frame, v_chunks[2], state),
        Tab::Guilds | Tab::Dungeons | Tab::Trade => {
            placeholder::draw_placeholder_panel(frame, v_chunks[2], state.active_tab)
        }
    }

    draw_footer(frame, v_chunks[3], state);
}

/// Draws the tab selector with key hints
fn draw_tab_bar(frame: &mut Frame, area: Rect, state: &GameState) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|tab| Line::from(format!("[{}] {}", tab.key_hint(), tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .select(state.active_tab.index())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Draws the footer with controls and play time
fn draw_footer(frame: &mut Frame, area: Rect, state: &GameState) {
    let footer_text = vec![Line::from(vec![
        Span::styled("[Tab]", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" Switch  "),
        Span::styled("[A]", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" Attack  "),
        Span::styled("[F]", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" Fireball  "),
        Span::styled("[I]", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" Ice Strike  "),
        Span::styled("[Q]", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" Quit"),
        Span::raw("  |  "),
        Span::styled(
            format!("Play Time: {}s", state.play_time_seconds),
            Style::default().fg(Color::Green),
        ),
    ])];

    let footer = Paragraph::new(footer_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(footer, area);
}
