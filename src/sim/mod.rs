//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - Stable iteration order
//! - No rendering or platform dependencies

pub mod boss;
pub mod bullets;
pub mod cadence;
pub mod collision;
pub mod enemy;
pub mod motion;
pub mod player;
pub mod state;
pub mod tick;

pub use boss::{BURST_DIRECTIONS, Boss, BossBullet, BossPhase};
pub use bullets::{Bullet, BulletPool};
pub use cadence::Cadence;
pub use collision::{Hitbox, grid_samples};
pub use enemy::{Enemy, EnemySwarm};
pub use motion::{MotionProfile, boss_sinus, linear, sinus_down, sinus_side};
pub use player::{Key, Player, PlayerInput};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
