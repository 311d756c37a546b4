//! Integration test: battle flow
//!
//! Drives the public battle API the way the main loop does: player actions
//! followed by repeated ticks, with a seeded RNG for deterministic rolls.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use embervale::battle::logic::{cast_skill, player_attack, tick, BattleEvent};
use embervale::battle::types::{Enemy, Skill};
use embervale::constants::{
    BATTLE_LOG_CAPACITY, ICE_STRIKE_MANA_COST, RESOLUTION_DELAY_SECONDS, TICK_INTERVAL_MS,
    VICTORY_EXP, VICTORY_GOLD,
};
use embervale::game_state::GameState;
use embervale::tabs::Tab;

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Simulate game ticks at the main loop's cadence (100ms of game time each)
fn simulate_ticks(state: &mut GameState, rng: &mut ChaCha8Rng, count: u32) -> Vec<BattleEvent> {
    let delta_time = TICK_INTERVAL_MS as f64 / 1000.0;
    let mut all_events = Vec::new();
    for _ in 0..count {
        all_events.extend(tick(state, delta_time, rng));
    }
    all_events
}

/// Ticks long enough to clear any pending resolution
fn settle(state: &mut GameState, rng: &mut ChaCha8Rng) -> Vec<BattleEvent> {
    let ticks = (RESOLUTION_DELAY_SECONDS * 1000.0 / TICK_INTERVAL_MS as f64).ceil() as u32 + 1;
    simulate_ticks(state, rng, ticks)
}

// =============================================================================
// Attack → counter-attack exchange
// =============================================================================

#[test]
fn test_attack_then_counter_exchange() {
    let mut state = GameState::new();
    let mut rng = rng(1);

    let enemy_hp_before = state.battle.enemy.hp;
    let player_hp_before = state.character.hp;

    let events = player_attack(&mut state, &mut rng);
    assert!(matches!(events.as_slice(), [BattleEvent::PlayerHit { .. }]));
    assert!(state.battle.enemy.hp < enemy_hp_before);
    assert!(state.battle.is_locked());

    let events = settle(&mut state, &mut rng);
    assert!(!state.battle.is_locked());

    if state.battle.enemy.is_alive() {
        // Counter landed: at least 1 damage to the player
        assert!(matches!(events.as_slice(), [BattleEvent::EnemyHit { .. }]));
        assert!(state.character.hp < player_hp_before);
        assert!(player_hp_before - state.character.hp >= 1);
    } else {
        assert!(matches!(events.as_slice(), [BattleEvent::Victory { .. }]));
    }

    // Both log lines present, newest first
    assert_eq!(state.battle.log.len(), 2);
    assert!(state.battle.log[1].message.starts_with("You strike"));
}

#[test]
fn test_input_during_resolution_window_is_ignored() {
    let mut state = GameState::new();
    let mut rng = rng(2);
    state.battle.enemy.hp = 1000;
    state.battle.enemy.max_hp = 1000;

    player_attack(&mut state, &mut rng);
    let hp_snapshot = state.battle.enemy.hp;
    let mana_snapshot = state.character.mana;

    // Mash buttons mid-window: nothing changes
    simulate_ticks(&mut state, &mut rng, 3);
    assert!(player_attack(&mut state, &mut rng).is_empty());
    assert!(cast_skill(&mut state, Skill::Fireball, &mut rng).is_empty());
    assert_eq!(state.battle.enemy.hp, hp_snapshot);
    assert_eq!(state.character.mana, mana_snapshot);

    // After the window closes the attack goes through again
    settle(&mut state, &mut rng);
    assert!(!player_attack(&mut state, &mut rng).is_empty());
}

// =============================================================================
// Victory bookkeeping
// =============================================================================

#[test]
fn test_grind_to_victory_rewards_once() {
    let mut state = GameState::new();
    let mut rng = rng(3);

    let exp_before = state.character.exp;
    let gold_before = state.character.gold;

    // Keep attacking until the wolf goes down (80 hp, min roll 45: two hits)
    let mut rounds = 0;
    while state.battle.enemy.is_alive() {
        player_attack(&mut state, &mut rng);
        settle(&mut state, &mut rng);
        rounds += 1;
        assert!(rounds <= 2, "Wolf should fall within two attacks");
    }

    assert_eq!(state.character.exp, exp_before + VICTORY_EXP);
    assert_eq!(state.character.gold, gold_before + VICTORY_GOLD);
    assert!(state.battle.log[0].message.starts_with("Victory!"));

    // Dead enemy: every further action and tick is inert
    assert!(player_attack(&mut state, &mut rng).is_empty());
    assert!(cast_skill(&mut state, Skill::Fireball, &mut rng).is_empty());
    simulate_ticks(&mut state, &mut rng, 50);
    assert_eq!(state.character.exp, exp_before + VICTORY_EXP);
    assert_eq!(state.character.gold, gold_before + VICTORY_GOLD);
}

// =============================================================================
// Skill path
// =============================================================================

#[test]
fn test_ice_strike_mana_accounting() {
    let mut state = GameState::new();
    let mut rng = rng(4);
    state.battle.enemy.hp = 1000;
    state.battle.enemy.max_hp = 1000;

    // 80 mana: one Ice Strike leaves 50
    cast_skill(&mut state, Skill::IceStrike, &mut rng);
    assert_eq!(state.character.mana, 80 - ICE_STRIKE_MANA_COST);

    settle(&mut state, &mut rng);
    cast_skill(&mut state, Skill::IceStrike, &mut rng);
    assert_eq!(state.character.mana, 20);

    // 20 mana is below the cost: guarded off, mana untouched
    settle(&mut state, &mut rng);
    assert!(cast_skill(&mut state, Skill::IceStrike, &mut rng).is_empty());
    assert_eq!(state.character.mana, 20);
}

#[test]
fn test_skill_window_has_no_counter_attack() {
    let mut state = GameState::new();
    let mut rng = rng(5);
    state.battle.enemy.hp = 1000;
    state.battle.enemy.max_hp = 1000;

    let player_hp_before = state.character.hp;
    cast_skill(&mut state, Skill::Fireball, &mut rng);
    let events = settle(&mut state, &mut rng);

    assert!(events.is_empty());
    assert_eq!(state.character.hp, player_hp_before);
    assert!(!state.battle.is_locked());
}

// =============================================================================
// Session invariants
// =============================================================================

#[test]
fn test_session_invariants_hold_over_random_play() {
    let mut state = GameState::new();
    let mut rng = rng(6);
    state.battle.enemy.hp = 100_000;
    state.battle.enemy.max_hp = 100_000;

    let mut last_exp = state.character.exp;
    let mut last_gold = state.character.gold;

    for round in 0..200 {
        match round % 3 {
            0 => {
                player_attack(&mut state, &mut rng);
            }
            1 => {
                cast_skill(&mut state, Skill::Fireball, &mut rng);
            }
            _ => {
                cast_skill(&mut state, Skill::IceStrike, &mut rng);
            }
        }
        simulate_ticks(&mut state, &mut rng, (round % 9) + 1);

        let character = &state.character;
        assert!(character.hp <= character.max_hp);
        assert!(character.mana <= character.max_mana);
        assert!(state.battle.enemy.hp <= state.battle.enemy.max_hp);
        assert!(state.battle.log.len() <= BATTLE_LOG_CAPACITY);

        // Exp and gold never decrease within a session
        assert!(character.exp >= last_exp);
        assert!(character.gold >= last_gold);
        last_exp = character.exp;
        last_gold = character.gold;
    }
}

#[test]
fn test_log_keeps_only_recent_entries() {
    let mut state = GameState::new();
    let mut rng = rng(7);
    state.battle.enemy.hp = 100_000;
    state.battle.enemy.max_hp = 100_000;

    for _ in 0..10 {
        player_attack(&mut state, &mut rng);
        settle(&mut state, &mut rng);
    }

    assert_eq!(state.battle.log.len(), BATTLE_LOG_CAPACITY);
    // Newest entry is the most recent counter-attack
    assert!(state.battle.log[0].message.contains("hits you"));
}

// =============================================================================
// Enemy replacement
// =============================================================================

#[test]
fn test_replacing_enemy_drops_stale_resolution() {
    let mut state = GameState::new();
    let mut rng = rng(8);

    player_attack(&mut state, &mut rng);
    assert!(state.battle.is_locked());

    state
        .battle
        .replace_enemy(Enemy::new("Bone Golem".to_string(), 7, 160, 40));

    let player_hp_before = state.character.hp;
    let events = settle(&mut state, &mut rng);

    assert!(events.is_empty());
    assert_eq!(state.character.hp, player_hp_before);
    assert_eq!(state.battle.enemy.hp, 160);
    assert!(!state.battle.is_locked());

    // The new encounter plays normally
    let events = player_attack(&mut state, &mut rng);
    assert!(matches!(events.as_slice(), [BattleEvent::PlayerHit { .. }]));
}

// =============================================================================
// Tab router
// =============================================================================

#[test]
fn test_tab_router_is_pure_ui_state() {
    let mut state = GameState::new();
    let snapshot_hp = state.character.hp;
    let snapshot_enemy_hp = state.battle.enemy.hp;

    state.active_tab = state.active_tab.next();
    state.active_tab = state.active_tab.next();
    assert_eq!(state.active_tab, Tab::Guilds);
    state.active_tab = state.active_tab.prev();
    assert_eq!(state.active_tab, Tab::Inventory);

    // Switching tabs touches nothing else
    assert_eq!(state.character.hp, snapshot_hp);
    assert_eq!(state.battle.enemy.hp, snapshot_enemy_hp);
    assert!(state.battle.log.is_empty());
}
