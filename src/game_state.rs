use crate::battle::types::{BattleState, Character, Enemy};
use crate::items::{starting_inventory, InventoryItem};
use crate::tabs::Tab;

/// Main game state for one session. Everything is created here with fixed
/// starting values and lives only as long as the process; nothing is
/// persisted.
#[derive(Debug, Clone)]
pub struct GameState {
    pub character: Character,
    pub battle: BattleState,
    pub inventory: Vec<InventoryItem>,
    pub active_tab: Tab,
    pub play_time_seconds: u64,
}

impl GameState {
    pub fn new() -> Self {
        let character = Character {
            name: "Hero".to_string(),
            level: 5,
            hp: 120,
            max_hp: 150,
            mana: 80,
            max_mana: 100,
            exp: 350,
            max_exp: 500,
            gold: 1250,
            attack: 45,
            defense: 30,
        };

        // The session opener: a wolf already softened up by 20 damage.
        let enemy = Enemy {
            name: "Dark Wolf".to_string(),
            level: 4,
            hp: 80,
            max_hp: 100,
            attack: 25,
        };

        Self {
            character,
            battle: BattleState::new(enemy),
            inventory: starting_inventory(),
            active_tab: Tab::Battle,
            play_time_seconds: 0,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
