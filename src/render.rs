//! Presentation hooks
//!
//! The simulation never draws. Each entity can describe what it looks like
//! this frame as a [`Sprite`]: a playfield position plus a tile in the
//! sprite sheet. An external blitter turns those into pixels.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{BOSS_START_X, BOSS_START_Y, BULLET_SIZE, DEATH_FRAME_TICKS, ENTITY_SIZE};
use crate::sim::{Boss, BossBullet, BossPhase, Bullet, Enemy, GameState, Player};

/// Top-left corner of a tile in the sprite sheet
pub type Tile = (u8, u8);

pub const PLAYER_TILE: Tile = (0, 8);
pub const PLAYER_BULLET_TILE: Tile = (40, 72);
/// HUD life marker
pub const LIFE_TILE: Tile = (0, 136);

pub const ENEMY_TILES: [Tile; 8] = [
    (0, 40),
    (0, 56),
    (16, 40),
    (16, 56),
    (32, 40),
    (32, 56),
    (48, 40),
    (48, 56),
];

pub const BOSS_TILES: [Tile; 4] = [(0, 24), (16, 24), (32, 24), (48, 24)];
/// Bullet tile per boss variant
pub const BOSS_BULLET_TILES: [Tile; 4] = [(8, 88), (16, 88), (24, 88), (32, 88)];

pub const DEATH_ANIMATION: [Tile; 7] = [
    (0, 104),
    (16, 104),
    (32, 104),
    (48, 104),
    (64, 104),
    (0, 120),
    (16, 120),
];

pub const BOSS_ANIMATION: [Tile; 7] = [
    (32, 120),
    (48, 120),
    (0, 136),
    (16, 136),
    (32, 136),
    (48, 136),
    (64, 136),
];

/// One blit request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    pub pos: IVec2,
    pub tile: Tile,
    /// Square edge length in pixels
    pub size: i32,
    /// Draw upside down
    pub flip_y: bool,
}

impl Sprite {
    pub fn entity(pos: IVec2, tile: Tile) -> Self {
        Self {
            pos,
            tile,
            size: ENTITY_SIZE,
            flip_y: false,
        }
    }

    pub fn bullet(pos: IVec2, tile: Tile) -> Self {
        Self {
            pos,
            tile,
            size: BULLET_SIZE,
            flip_y: false,
        }
    }
}

impl Bullet {
    pub fn sprite(&self) -> Sprite {
        Sprite::bullet(self.pos, self.tile)
    }
}

impl Player {
    /// Ship, death animation tile, or nothing on an invulnerability blink
    pub fn sprite(&self) -> Option<Sprite> {
        if !self.is_alive() {
            let frame = (self.death_frame / DEATH_FRAME_TICKS) as usize;
            let tile = DEATH_ANIMATION[frame.min(DEATH_ANIMATION.len() - 1)];
            return Some(Sprite::entity(self.pos, tile));
        }
        if self.iframes > 0 && self.iframes % 4 < 2 {
            return None;
        }
        Some(Sprite::entity(self.pos, PLAYER_TILE))
    }

    /// HUD row of remaining lives
    pub fn life_sprites(&self) -> impl Iterator<Item = Sprite> {
        (0..self.lives.max(0)).map(|n| Sprite::entity(IVec2::new(n * 8, 0), LIFE_TILE))
    }
}

impl Enemy {
    pub fn sprite(&self) -> Sprite {
        Sprite::entity(self.pos, ENEMY_TILES[self.texture])
    }
}

impl BossBullet {
    pub fn sprite(&self, variant: usize) -> Sprite {
        Sprite::bullet(self.pos, BOSS_BULLET_TILES[variant])
    }
}

impl Boss {
    /// Intro tile at the spawn point, then the flipped boss tile. Nothing
    /// is shown on a hit frame or once the body is gone.
    pub fn sprite(&self) -> Option<Sprite> {
        match self.phase {
            BossPhase::Intro { frame } => Some(Sprite::entity(
                IVec2::new(BOSS_START_X, BOSS_START_Y),
                BOSS_ANIMATION[frame],
            )),
            BossPhase::Combat if !self.hit => Some(Sprite {
                flip_y: true,
                ..Sprite::entity(self.pos, BOSS_TILES[self.variant])
            }),
            _ => None,
        }
    }

    pub fn bullet_sprites(&self) -> impl Iterator<Item = Sprite> + '_ {
        self.bullets.iter().map(|b| b.sprite(self.variant))
    }
}

/// Everything the substrate needs to draw one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub frame: u64,
    pub score: u64,
    pub lives: i32,
    pub game_over: bool,
    /// Back to front
    pub sprites: Vec<Sprite>,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let mut sprites = Vec::new();
        if !state.is_over() {
            sprites.extend(state.bullets.iter().map(Bullet::sprite));
            sprites.extend(state.swarm.enemies.iter().map(Enemy::sprite));
            sprites.extend(state.player.life_sprites());
            sprites.extend(state.player.sprite());
            if let Some(boss) = &state.boss {
                sprites.extend(boss.bullet_sprites());
                sprites.extend(boss.sprite());
            }
        }
        Self {
            frame: state.frame,
            score: state.score,
            lives: state.player.lives,
            game_over: state.is_over(),
            sprites,
        }
    }

    /// Text the substrate shows on the game-over screen
    pub fn banner(&self) -> Option<String> {
        self.game_over
            .then(|| format!("Game Over\nScore: {}", self.score))
    }
}
