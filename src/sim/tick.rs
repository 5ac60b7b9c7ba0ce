//! Fixed-step simulation tick
//!
//! One call advances the session by exactly one frame. Update order is
//! bullets, player, enemies, boss: a bullet fired this frame is already
//! visible to enemy collision, and a boss spawns right after the enemy pass
//! that crossed the score threshold.

use super::boss::Boss;
use super::player::PlayerInput;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub player: PlayerInput,
}

impl From<PlayerInput> for TickInput {
    fn from(player: PlayerInput) -> Self {
        Self { player }
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    if state.phase == GamePhase::GameOver {
        return;
    }

    state.frame += 1;
    let lives_before = state.player.lives;

    state.bullets.update();
    state.player.update(&input.player, &mut state.bullets);

    let gained = state
        .swarm
        .update(&mut state.player, &mut state.bullets, &mut state.rng);
    for _ in 0..gained / ENEMY_SCORE {
        state.events.push(GameEvent::EnemyDestroyed { score: ENEMY_SCORE });
    }
    state.score += gained;

    if state.boss.is_none() && state.score != 0 && state.score % BOSS_SCORE_THRESHOLD == 0 {
        let boss = Boss::spawn(&mut state.rng);
        log::info!("Boss (variant {}) spawned at score {}", boss.variant, state.score);
        state.events.push(GameEvent::BossSpawned {
            variant: boss.variant,
        });
        state.boss = Some(boss);
    }

    if let Some(boss) = state.boss.as_mut() {
        boss.update(&mut state.player, &mut state.bullets);
        if !boss.is_live() {
            state.score += BOSS_BONUS;
            state.boss = None;
            log::info!("Boss defeated, score {}", state.score);
            state.events.push(GameEvent::BossDefeated { bonus: BOSS_BONUS });
        }
    }

    if state.player.lives < lives_before {
        state.events.push(GameEvent::PlayerHit {
            lives_left: state.player.lives,
        });
    }

    if state.player.death_finished() {
        state.phase = GamePhase::GameOver;
        log::info!("Game over after {} frames, final score {}", state.frame, state.score);
        state.events.push(GameEvent::GameOver { score: state.score });
    }
}
