//! Input handling for the game screen.
//!
//! Keys route to the tab router or, while the battle tab is active, to the
//! battle resolver. Guarded actions (lock in flight, dead enemy, missing
//! mana) fall through silently inside the resolver.

use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;

use crate::battle::logic;
use crate::battle::types::Skill;
use crate::game_state::GameState;
use crate::tabs::Tab;

/// Result of handling a game input event.
pub enum InputResult {
    /// Continue the game loop normally.
    Continue,
    /// Player asked to quit.
    Quit,
}

pub fn handle_key(state: &mut GameState, key: KeyEvent, rng: &mut impl Rng) -> InputResult {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return InputResult::Quit,
        KeyCode::Tab => state.active_tab = state.active_tab.next(),
        KeyCode::BackTab => state.active_tab = state.active_tab.prev(),
        KeyCode::Char(ch @ '1'..='5') => {
            if let Some(tab) = Tab::from_digit(ch) {
                state.active_tab = tab;
            }
        }
        KeyCode::Char(ch) if state.active_tab == Tab::Battle => match ch {
            'a' | 'A' => {
                logic::player_attack(state, rng);
            }
            'f' | 'F' => {
                logic::cast_skill(state, Skill::Fireball, rng);
            }
            'i' | 'I' => {
                logic::cast_skill(state, Skill::IceStrike, rng);
            }
            _ => {}
        },
        _ => {}
    }
    InputResult::Continue
}
