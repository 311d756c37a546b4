use std::collections::VecDeque;

use crate::constants::*;

/// Player-side stats. Mutated only by the battle resolver.
#[derive(Debug, Clone)]
pub struct Character {
    pub name: String,
    pub level: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub mana: u32,
    pub max_mana: u32,
    pub exp: u32,
    pub max_exp: u32,
    pub gold: u32,
    pub attack: u32,
    pub defense: u32,
}

impl Character {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Deducts `cost` mana. Returns false and deducts nothing when short.
    pub fn spend_mana(&mut self, cost: u32) -> bool {
        if self.mana < cost {
            return false;
        }
        self.mana -= cost;
        true
    }
}

/// The single active opponent. Replaced wholesale, never respawned.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub name: String,
    pub level: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub attack: u32,
}

impl Enemy {
    pub fn new(name: String, level: u32, max_hp: u32, attack: u32) -> Self {
        Self {
            name,
            level,
            hp: max_hp,
            max_hp,
            attack,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }
}

/// Castable skills with fixed mana costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skill {
    Fireball,
    IceStrike,
}

impl Skill {
    pub fn all() -> [Skill; 2] {
        [Skill::Fireball, Skill::IceStrike]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Skill::Fireball => "Fireball",
            Skill::IceStrike => "Ice Strike",
        }
    }

    pub fn mana_cost(&self) -> u32 {
        match self {
            Skill::Fireball => FIREBALL_MANA_COST,
            Skill::IceStrike => ICE_STRIKE_MANA_COST,
        }
    }

    /// Key that casts this skill on the battle tab.
    pub fn key_hint(&self) -> char {
        match self {
            Skill::Fireball => 'F',
            Skill::IceStrike => 'I',
        }
    }
}

/// Who produced a battle log line. Used only for display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSource {
    Player,
    Enemy,
    Reward,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub message: String,
    pub source: LogSource,
}

/// What a scheduled resolution does once its delay elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingKind {
    /// Enemy answer to a basic attack, or the victory bookkeeping if the
    /// blow was lethal.
    CounterAttack,
    /// Lock window after a skill cast. Resolves to nothing.
    Cooldown,
}

#[derive(Debug, Clone)]
pub struct PendingAction {
    pub kind: PendingKind,
    pub remaining: f64,
}

/// Battle-side state: the active enemy, the capped log, and the scheduled
/// resolution that doubles as the action lock.
#[derive(Debug, Clone)]
pub struct BattleState {
    pub enemy: Enemy,
    /// Newest entry at the front, capped at `BATTLE_LOG_CAPACITY`.
    pub log: VecDeque<LogEntry>,
    /// While set, attack and skill input is ignored.
    pub pending: Option<PendingAction>,
}

impl BattleState {
    pub fn new(enemy: Enemy) -> Self {
        Self {
            enemy,
            log: VecDeque::with_capacity(BATTLE_LOG_CAPACITY),
            pending: None,
        }
    }

    /// True while a resolution is in flight.
    pub fn is_locked(&self) -> bool {
        self.pending.is_some()
    }

    pub fn schedule(&mut self, kind: PendingKind) {
        self.pending = Some(PendingAction {
            kind,
            remaining: RESOLUTION_DELAY_SECONDS,
        });
    }

    pub fn add_log_entry(&mut self, message: String, source: LogSource) {
        self.log.push_front(LogEntry { message, source });
        self.log.truncate(BATTLE_LOG_CAPACITY);
    }

    /// Swaps in a new enemy wholesale. Any scheduled resolution is dropped
    /// so it cannot land on the new encounter.
    pub fn replace_enemy(&mut self, enemy: Enemy) {
        self.enemy = enemy;
        self.pending = None;
    }
}
