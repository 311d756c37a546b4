//! Battle resolution: player actions, the delayed counter-attack, and
//! victory bookkeeping.
//!
//! Every operation takes the RNG as a parameter so tests can drive the
//! damage rolls with a seeded generator. Guard failures (action in flight,
//! dead enemy, not enough mana) are silent no-ops that return no events.

use rand::Rng;

use crate::constants::*;
use crate::game_state::GameState;

use super::types::{LogSource, PendingKind, Skill};

/// Events produced by battle resolution, in occurrence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    PlayerHit { damage: u32 },
    SkillCast { skill: Skill, damage: u32 },
    EnemyHit { damage: u32 },
    Victory { exp: u32, gold: u32 },
}

/// Basic attack: rolls damage, applies it to the enemy and schedules the
/// counter-attack resolution.
pub fn player_attack(state: &mut GameState, rng: &mut impl Rng) -> Vec<BattleEvent> {
    let mut events = Vec::new();
    if state.battle.is_locked() || !state.battle.enemy.is_alive() {
        return events;
    }

    let damage = rng.gen_range(0..ATTACK_ROLL_MAX) + state.character.attack;
    state.battle.enemy.take_damage(damage);
    state
        .battle
        .add_log_entry(format!("You strike for {} damage!", damage), LogSource::Player);
    state.battle.schedule(PendingKind::CounterAttack);

    events.push(BattleEvent::PlayerHit { damage });
    events
}

/// Skill cast: deducts mana up front, rolls boosted damage and holds the
/// action lock for the resolution window.
///
/// Skills never draw a counter-attack and never grant kill rewards; only
/// the basic attack path resolves those.
pub fn cast_skill(state: &mut GameState, skill: Skill, rng: &mut impl Rng) -> Vec<BattleEvent> {
    let mut events = Vec::new();
    if state.battle.is_locked() || !state.battle.enemy.is_alive() {
        return events;
    }
    if !state.character.spend_mana(skill.mana_cost()) {
        return events;
    }

    let damage = rng.gen_range(0..SKILL_ROLL_MAX)
        + (state.character.attack as f64 * SKILL_ATTACK_MULTIPLIER) as u32;
    state.battle.enemy.take_damage(damage);
    state
        .battle
        .add_log_entry(format!("{}: {} damage!", skill.name(), damage), LogSource::Player);
    state.battle.schedule(PendingKind::Cooldown);

    events.push(BattleEvent::SkillCast { skill, damage });
    events
}

/// Advances the scheduled resolution by `delta_seconds` and resolves it once
/// the full delay has elapsed.
///
/// A counter-attack against a living enemy damages the character (floored at
/// `COUNTER_DAMAGE_FLOOR`); against a dead one it pays out the victory
/// reward instead. The pending action is consumed before resolving, so the
/// reward can only be granted once per attack.
pub fn tick(state: &mut GameState, delta_seconds: f64, rng: &mut impl Rng) -> Vec<BattleEvent> {
    let mut events = Vec::new();

    let Some(mut pending) = state.battle.pending.take() else {
        return events;
    };
    pending.remaining -= delta_seconds;
    if pending.remaining > 0.0 {
        state.battle.pending = Some(pending);
        return events;
    }

    match pending.kind {
        PendingKind::Cooldown => {}
        PendingKind::CounterAttack => {
            if state.battle.enemy.is_alive() {
                let damage = (rng.gen_range(0..COUNTER_ROLL_MAX) + state.battle.enemy.attack)
                    .saturating_sub(state.character.defense)
                    .max(COUNTER_DAMAGE_FLOOR);
                state.character.take_damage(damage);
                let message =
                    format!("{} hits you for {} damage!", state.battle.enemy.name, damage);
                state.battle.add_log_entry(message, LogSource::Enemy);
                events.push(BattleEvent::EnemyHit { damage });
            } else {
                state.character.exp += VICTORY_EXP;
                state.character.gold += VICTORY_GOLD;
                state.battle.add_log_entry(
                    format!("Victory! +{} XP, +{} gold", VICTORY_EXP, VICTORY_GOLD),
                    LogSource::Reward,
                );
                events.push(BattleEvent::Victory {
                    exp: VICTORY_EXP,
                    gold: VICTORY_GOLD,
                });
            }
        }
    }

    events
}
