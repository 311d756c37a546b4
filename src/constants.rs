// Game timing constants
pub const TICK_INTERVAL_MS: u64 = 100;
pub const INPUT_POLL_MS: u64 = 50;

// Battle resolution constants
//
// A basic attack schedules the enemy counter-attack after this delay; a
// skill cast holds the action lock for the same window without a counter.
pub const RESOLUTION_DELAY_SECONDS: f64 = 0.6;

// Damage roll bounds (half-open: roll is in 0..MAX)
pub const ATTACK_ROLL_MAX: u32 = 20;
pub const SKILL_ROLL_MAX: u32 = 30;
pub const COUNTER_ROLL_MAX: u32 = 10;

pub const SKILL_ATTACK_MULTIPLIER: f64 = 1.5;

// Counter-attacks always deal at least this much damage
pub const COUNTER_DAMAGE_FLOOR: u32 = 1;

// Victory rewards
pub const VICTORY_EXP: u32 = 50;
pub const VICTORY_GOLD: u32 = 100;

// Battle log keeps only the most recent entries
pub const BATTLE_LOG_CAPACITY: usize = 5;

// Skill mana costs
pub const FIREBALL_MANA_COST: u32 = 20;
pub const ICE_STRIKE_MANA_COST: u32 = 30;
