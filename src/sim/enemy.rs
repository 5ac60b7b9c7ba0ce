//! Enemies and the swarm that spawns them

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bullets::BulletPool;
use super::cadence::Cadence;
use super::collision::Hitbox;
use super::motion::MotionProfile;
use super::player::Player;
use crate::consts::*;
use crate::render::ENEMY_TILES;

/// Offset of an enemy's bullet probe from its top-left corner
const BULLET_PROBE_OFFSET: i32 = 5;
/// Width and height (pixels) of an enemy's bullet probe
const BULLET_PROBE_EXTENT: i32 = 6;

/// A single hostile unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: IVec2,
    pub vel: IVec2,
    pub motion: MotionProfile,
    /// Oscillation centre for sinusoidal profiles, unused by `Linear`
    pub anchor: i32,
    pub lives: i32,
    /// Index into `ENEMY_TILES`
    pub texture: usize,
}

impl Enemy {
    /// Roll a fresh enemy: texture, motion profile, then profile-specific
    /// spawn point, velocity and anchor.
    pub fn spawn<R: Rng>(rng: &mut R) -> Self {
        let texture = rng.random_range(0..ENEMY_TILES.len());
        let motion = MotionProfile::ALL[rng.random_range(0..MotionProfile::ALL.len())];

        let (pos, anchor) = match motion {
            MotionProfile::Linear => {
                let pos = if rng.random_bool(0.5) {
                    IVec2::new(rng.random_range(0..=ENTITY_MAX), 56)
                } else {
                    IVec2::new(0, rng.random_range(56..=112))
                };
                (pos, 0)
            }
            MotionProfile::SinusSide => {
                let anchor = rng.random_range(92..=184);
                (IVec2::new(anchor, 0), anchor)
            }
            MotionProfile::SinusDown => {
                let anchor = rng.random_range(56..=184);
                (IVec2::new(0, anchor), anchor)
            }
        };
        let vel = IVec2::new(rng.random_range(1..=2), rng.random_range(1..=2));

        Self {
            pos,
            vel,
            motion,
            anchor,
            lives: ENEMY_LIVES,
            texture,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.lives <= 0
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::inset_entity(self.pos)
    }

    /// Bounce, move, then resolve contact with the player and player bullets
    pub fn update(&mut self, player: &mut Player, bullets: &mut BulletPool) {
        if self.pos.x > ENTITY_MAX || self.pos.x < 0 {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y > ENTITY_MAX || self.pos.y < PLAYFIELD_TOP {
            self.vel.y = -self.vel.y;
        }

        self.pos = self.motion.apply(self.pos, self.vel, self.anchor);

        if self.hitbox().overlaps(&player.hitbox()) {
            player.take_hit();
        }

        let probe = self.pos + IVec2::splat(BULLET_PROBE_OFFSET);
        if bullets.query_and_consume(probe, IVec2::splat(BULLET_PROBE_EXTENT)) {
            self.lives -= 1;
        }
    }
}

/// Every live enemy plus the spawn timer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemySwarm {
    pub enemies: Vec<Enemy>,
    spawn: Cadence,
}

impl EnemySwarm {
    /// Starting population of `INITIAL_ENEMIES`
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let enemies = (0..INITIAL_ENEMIES).map(|_| Enemy::spawn(rng)).collect();
        Self::with_enemies(enemies)
    }

    pub fn with_enemies(enemies: Vec<Enemy>) -> Self {
        Self {
            enemies,
            spawn: Cadence::new(ENEMY_SPAWN_PERIOD),
        }
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Advance every enemy, drop the destroyed ones and maybe spawn a new
    /// one. Returns the score earned this frame.
    pub fn update<R: Rng>(
        &mut self,
        player: &mut Player,
        bullets: &mut BulletPool,
        rng: &mut R,
    ) -> u64 {
        for enemy in &mut self.enemies {
            enemy.update(player, bullets);
        }

        let before = self.enemies.len();
        self.enemies.retain(|e| !e.is_destroyed());
        let destroyed = (before - self.enemies.len()) as u64;
        if destroyed > 0 {
            log::debug!("{} enemies destroyed", destroyed);
        }

        if self.spawn.tick() {
            self.enemies.push(Enemy::spawn(rng));
        }

        destroyed * ENEMY_SCORE
    }
}
