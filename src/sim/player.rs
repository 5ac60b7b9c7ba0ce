//! The player ship
//!
//! Owns position, lives, invulnerability frames and the death animation
//! counter. Damage is applied by whoever collides with the ship through
//! [`Player::take_hit`].

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::bullets::BulletPool;
use super::cadence::Cadence;
use super::collision::Hitbox;
use crate::consts::*;
use crate::render::PLAYER_BULLET_TILE;

/// Physical keys the substrate reports as held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    A,
    D,
    W,
    S,
    Shift,
    Space,
    Z,
}

/// Logical inputs for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Halves movement speed
    pub slow: bool,
    pub fire: bool,
}

impl PlayerInput {
    /// Collapse both key sets (arrows and WASD) into logical inputs
    pub fn from_keys(held: &[Key]) -> Self {
        let any = |keys: &[Key]| keys.iter().any(|k| held.contains(k));
        Self {
            left: any(&[Key::Left, Key::A]),
            right: any(&[Key::Right, Key::D]),
            up: any(&[Key::Up, Key::W]),
            down: any(&[Key::Down, Key::S]),
            slow: any(&[Key::Shift]),
            fire: any(&[Key::Space, Key::Z]),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: IVec2,
    /// Game ends when this drops below 1
    pub lives: i32,
    /// Ticks of invulnerability left
    pub iframes: u32,
    /// Ticks spent in the death animation
    pub death_frame: u32,
    fire_gate: Cadence,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: IVec2::new(PLAYER_START_X, PLAYER_START_Y),
            lives: PLAYER_LIVES,
            iframes: 0,
            death_frame: 0,
            fire_gate: Cadence::immediate(FIRE_PERIOD),
        }
    }
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_alive(&self) -> bool {
        self.lives >= 1
    }

    pub fn is_vulnerable(&self) -> bool {
        self.iframes == 0
    }

    /// Death animation has played out; the session is over
    pub fn death_finished(&self) -> bool {
        self.death_frame >= DEATH_FRAMES_TERMINAL
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::inset_entity(self.pos)
    }

    /// Apply one point of damage unless invulnerable or already dead.
    /// Returns whether a life was lost.
    pub fn take_hit(&mut self) -> bool {
        if !self.is_alive() || !self.is_vulnerable() {
            return false;
        }
        self.lives -= 1;
        self.iframes = IFRAMES_ON_HIT;
        log::debug!("Player hit, {} lives left", self.lives);
        true
    }

    /// Advance one frame: tick timers, move, and fire into `bullets`
    pub fn update(&mut self, input: &PlayerInput, bullets: &mut BulletPool) {
        if !self.is_alive() {
            self.death_frame = (self.death_frame + 1).min(DEATH_FRAMES_TERMINAL);
            return;
        }

        self.iframes = self.iframes.saturating_sub(1);

        let speed = if input.slow {
            PLAYER_SLOW_SPEED
        } else {
            PLAYER_SPEED
        };

        if input.left {
            self.pos.x = (self.pos.x - speed).max(0);
        }
        if input.right {
            self.pos.x = (self.pos.x + speed).min(ENTITY_MAX);
        }
        if input.up {
            self.pos.y = (self.pos.y - speed).max(PLAYFIELD_TOP);
        }
        if input.down {
            self.pos.y = (self.pos.y + speed).min(ENTITY_MAX);
        }

        // Gate advances every live frame, held fire or not
        let fire_ready = self.fire_gate.tick();
        if input.fire && fire_ready {
            bullets.add(self.pos, PLAYER_BULLET_TILE);
        }
    }
}
