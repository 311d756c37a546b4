use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::battle::types::{LogSource, Skill};
use crate::game_state::GameState;

/// Draws the battle tab: enemy card, action hints and the battle log
pub fn draw_battle_panel(frame: &mut Frame, area: Rect, state: &GameState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Enemy card
            Constraint::Length(4), // Actions
            Constraint::Min(0),    // Battle log
        ])
        .split(area);

    draw_enemy_card(frame, chunks[0], state);
    draw_actions(frame, chunks[1], state);
    draw_battle_log(frame, chunks[2], state);
}

fn draw_enemy_card(frame: &mut Frame, area: Rect, state: &GameState) {
    let enemy = &state.battle.enemy;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Enemy ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name + level badge
            Constraint::Length(1), // HP gauge
            Constraint::Length(1), // Status line
        ])
        .split(inner);

    let name_line = vec![Line::from(vec![
        Span::styled(
            enemy.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            format!("[Lv {}]", enemy.level),
            Style::default().fg(Color::Red),
        ),
    ])];
    frame.render_widget(Paragraph::new(name_line), chunks[0]);

    let hp_ratio = if enemy.max_hp == 0 {
        0.0
    } else {
        (enemy.hp as f64 / enemy.max_hp as f64).clamp(0.0, 1.0)
    };
    let hp_gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .label(format!("{}/{}", enemy.hp, enemy.max_hp))
        .ratio(hp_ratio);
    frame.render_widget(hp_gauge, chunks[1]);

    let status = if !enemy.is_alive() {
        Span::styled(
            "Defeated!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else if state.battle.is_locked() {
        Span::styled(
            "Exchanging blows...",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::raw("")
    };
    frame.render_widget(Paragraph::new(vec![Line::from(status)]), chunks[2]);
}

fn draw_actions(frame: &mut Frame, area: Rect, state: &GameState) {
    let block = Block::default().borders(Borders::ALL).title(" Actions ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let enemy_alive = state.battle.enemy.is_alive();
    let unlocked = !state.battle.is_locked();

    let attack_enabled = unlocked && enemy_alive;
    let mut spans = vec![
        action_span("[A] Attack", attack_enabled),
        Span::raw("   "),
    ];

    for skill in Skill::all() {
        let enabled =
            unlocked && enemy_alive && state.character.mana >= skill.mana_cost();
        spans.push(action_span(
            &format!(
                "[{}] {} ({} MP)",
                skill.key_hint(),
                skill.name(),
                skill.mana_cost()
            ),
            enabled,
        ));
        spans.push(Span::raw("   "));
    }

    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(spans)])
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

fn action_span(label: &str, enabled: bool) -> Span<'static> {
    let style = if enabled {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Span::styled(label.to_string(), style)
}

fn draw_battle_log(frame: &mut Frame, area: Rect, state: &GameState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Battle Log ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    if state.battle.log.is_empty() {
        lines.push(Line::from(Span::styled(
            "Start the battle!",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        // Entries are stored newest first; render top-down as-is
        for entry in state.battle.log.iter().take(inner.height as usize) {
            let color = match entry.source {
                LogSource::Player => Color::Green,
                LogSource::Enemy => Color::Red,
                LogSource::Reward => Color::Yellow,
            };
            lines.push(Line::from(Span::styled(
                entry.message.clone(),
                Style::default().fg(color),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
