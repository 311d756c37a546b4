use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::game_state::GameState;

/// Draws the character summary: header, resource gauges, XP and stat cards
pub fn draw_character_panel(frame: &mut Frame, area: Rect, state: &GameState) {
    let panel_block = Block::default().borders(Borders::ALL).title(" Character ");

    let inner = panel_block.inner(area);
    frame.render_widget(panel_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name, level badge, gold
            Constraint::Length(3), // HP + Mana gauges
            Constraint::Length(3), // XP gauge
            Constraint::Length(3), // Attack / Defense cards
        ])
        .split(inner);

    draw_header(frame, chunks[0], state);
    draw_resource_gauges(frame, chunks[1], state);
    draw_exp_gauge(frame, chunks[2], state);
    draw_stat_cards(frame, chunks[3], state);
}

fn draw_header(frame: &mut Frame, area: Rect, state: &GameState) {
    let character = &state.character;

    let header_text = vec![Line::from(vec![
        Span::styled(
            character.name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            format!("[Lv {}]", character.level),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("🪙 {}", character.gold),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    let header = Paragraph::new(header_text).alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn draw_resource_gauges(frame: &mut Frame, area: Rect, state: &GameState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let character = &state.character;

    // HP color shifts as the bar drains
    let hp_ratio = ratio(character.hp, character.max_hp);
    let hp_color = if hp_ratio > 0.66 {
        Color::Green
    } else if hp_ratio > 0.33 {
        Color::Yellow
    } else {
        Color::Red
    };

    let hp_gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("HP"))
        .gauge_style(Style::default().fg(hp_color).add_modifier(Modifier::BOLD))
        .label(format!("{}/{}", character.hp, character.max_hp))
        .ratio(hp_ratio);
    frame.render_widget(hp_gauge, chunks[0]);

    let mana_gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Mana"))
        .gauge_style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
        .label(format!("{}/{}", character.mana, character.max_mana))
        .ratio(ratio(character.mana, character.max_mana));
    frame.render_widget(mana_gauge, chunks[1]);
}

fn draw_exp_gauge(frame: &mut Frame, area: Rect, state: &GameState) {
    let character = &state.character;

    // Exp keeps growing past the threshold (there is no level-up), so the
    // ratio must stay clamped for the gauge.
    let exp_gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("XP"))
        .gauge_style(Style::default().fg(Color::Cyan))
        .label(format!("{}/{}", character.exp, character.max_exp))
        .ratio(ratio(character.exp, character.max_exp));
    frame.render_widget(exp_gauge, area);
}

fn draw_stat_cards(frame: &mut Frame, area: Rect, state: &GameState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_stat_card(
        frame,
        chunks[0],
        "Attack",
        state.character.attack,
        Color::Red,
    );
    draw_stat_card(
        frame,
        chunks[1],
        "Defense",
        state.character.defense,
        Color::Blue,
    );
}

fn draw_stat_card(frame: &mut Frame, area: Rect, title: &str, value: u32, color: Color) {
    let text = vec![Line::from(Span::styled(
        format!("{}", value),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];

    let card = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .alignment(Alignment::Center);

    frame.render_widget(card, area);
}

/// Gauge-safe ratio, clamped to [0, 1].
fn ratio(value: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (value as f64 / max as f64).clamp(0.0, 1.0)
}
