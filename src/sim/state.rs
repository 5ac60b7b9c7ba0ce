//! Game session state
//!
//! Everything a frame needs lives here: entities, score, phase and the
//! seeded RNG. Cloning a `GameState` forks the run deterministically.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::boss::Boss;
use super::bullets::BulletPool;
use super::enemy::EnemySwarm;
use super::player::Player;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    /// Death animation finished; the session is frozen
    GameOver,
}

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    EnemyDestroyed { score: u64 },
    PlayerHit { lives_left: i32 },
    BossSpawned { variant: usize },
    BossDefeated { bonus: u64 },
    GameOver { score: u64 },
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Frames simulated so far
    pub frame: u64,
    /// Only ever increases
    pub score: u64,
    pub phase: GamePhase,
    pub player: Player,
    pub swarm: EnemySwarm,
    pub bullets: BulletPool,
    /// Present from spawn until the boss is `Dead`
    pub boss: Option<Boss>,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let swarm = EnemySwarm::new(&mut rng);
        Self {
            seed,
            frame: 0,
            score: 0,
            phase: GamePhase::Playing,
            player: Player::new(),
            swarm,
            bullets: BulletPool::new(),
            boss: None,
            events: Vec::new(),
            rng,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
