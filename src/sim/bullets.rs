//! Player bullet pool
//!
//! Bullets are identified by their position: adding a bullet where one
//! already sits replaces it. Storage is a plain vector so iteration order is
//! stable, but no outcome depends on that order.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::grid_samples;
use crate::consts::{BULLET_SPAWN_OFFSET, BULLET_SPEED, PLAYFIELD_TOP};
use crate::render::Tile;

/// A player projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: IVec2,
    /// Presentation only
    pub tile: Tile,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulletPool {
    bullets: Vec<Bullet>,
}

impl BulletPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a bullet fired by a body whose top-left is `origin`
    pub fn add(&mut self, origin: IVec2, tile: Tile) {
        let pos = origin + IVec2::new(BULLET_SPAWN_OFFSET, 0);
        let bullet = Bullet { pos, tile };
        match self.bullets.iter_mut().find(|b| b.pos == pos) {
            Some(existing) => *existing = bullet,
            None => self.bullets.push(bullet),
        }
    }

    /// Probe the grid samples of `origin`/`extent` and consume the first
    /// bullet found. At most one bullet is removed per call.
    pub fn query_and_consume(&mut self, origin: IVec2, extent: IVec2) -> bool {
        for sample in grid_samples(origin, extent) {
            if let Some(index) = self.bullets.iter().position(|b| b.pos == sample) {
                self.bullets.swap_remove(index);
                return true;
            }
        }
        false
    }

    /// Move every bullet up and drop the ones that left the playfield
    pub fn update(&mut self) {
        for bullet in &mut self.bullets {
            bullet.pos.y -= BULLET_SPEED;
        }
        self.bullets.retain(|b| b.pos.y > PLAYFIELD_TOP);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bullet> {
        self.bullets.iter()
    }

    pub fn len(&self) -> usize {
        self.bullets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bullets.is_empty()
    }

    pub fn contains(&self, pos: IVec2) -> bool {
        self.bullets.iter().any(|b| b.pos == pos)
    }
}
