//! Boss and boss bullets
//!
//! The boss runs a small state machine:
//! `Intro` (spawn animation, no gameplay) -> `Combat` -> `Dying` (no more
//! bursts, waiting for its bullet spread to clear) -> `Dead`.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bullets::BulletPool;
use super::cadence::Cadence;
use super::collision::Hitbox;
use super::motion::boss_sinus;
use super::player::Player;
use crate::consts::*;
use crate::render::BOSS_TILES;

/// The 8 compass directions of a burst, in emission order
pub const BURST_DIRECTIONS: [IVec2; 8] = [
    IVec2::new(-1, -1),
    IVec2::new(-1, 0),
    IVec2::new(-1, 1),
    IVec2::new(0, -1),
    IVec2::new(0, 1),
    IVec2::new(1, -1),
    IVec2::new(1, 0),
    IVec2::new(1, 1),
];

/// A straight-line boss projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossBullet {
    pub pos: IVec2,
    pub vel: IVec2,
    pub alive: bool,
}

impl BossBullet {
    pub fn new(pos: IVec2, vel: IVec2) -> Self {
        Self {
            pos,
            vel,
            alive: true,
        }
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::bullet(self.pos)
    }

    /// Move, hurt the player on contact, and expire once out of bounds.
    /// Hitting the player does not consume the bullet.
    pub fn update(&mut self, player: &mut Player) {
        self.pos += self.vel;

        if self.hitbox().overlaps(&player.hitbox()) {
            player.take_hit();
        }

        let IVec2 { x, y } = self.pos;
        if x > BOSS_BULLET_MAX
            || x < BOSS_BULLET_MIN_X
            || y > BOSS_BULLET_MAX
            || y < BOSS_BULLET_MIN_Y
        {
            self.alive = false;
        }
    }
}

/// Boss lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossPhase {
    /// Spawn animation is playing; `frame` indexes the intro tiles
    Intro { frame: usize },
    Combat,
    /// Out of lives; the hidden body still moves and collides until the
    /// outstanding bullets leave the field
    Dying,
    Dead,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub pos: IVec2,
    /// Horizontal patrol speed; vertical position comes from the patrol wave
    pub dx: i32,
    /// Dies once this drops below zero
    pub lives: i32,
    pub phase: BossPhase,
    /// Took a bullet this frame (presentation skips one draw)
    pub hit: bool,
    /// Index into `BOSS_TILES` / `BOSS_BULLET_TILES`
    pub variant: usize,
    pub bullets: Vec<BossBullet>,
    burst: Cadence,
    intro: Cadence,
}

impl Boss {
    pub fn spawn<R: Rng>(rng: &mut R) -> Self {
        Self::new(rng.random_range(0..BOSS_TILES.len()))
    }

    pub fn new(variant: usize) -> Self {
        Self {
            pos: IVec2::new(BOSS_START_X, BOSS_START_Y),
            dx: BOSS_SPEED,
            lives: BOSS_LIVES,
            phase: BossPhase::Intro { frame: 0 },
            hit: false,
            variant,
            bullets: Vec::new(),
            burst: Cadence::immediate(BOSS_BURST_PERIOD),
            intro: Cadence::new(BOSS_ANIMATION_PERIOD),
        }
    }

    /// False only once the boss is `Dead`
    pub fn is_live(&self) -> bool {
        self.phase != BossPhase::Dead
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::inset_entity(self.pos)
    }

    pub fn update(&mut self, player: &mut Player, bullets: &mut BulletPool) {
        match self.phase {
            BossPhase::Intro { frame } => self.advance_intro(frame),
            BossPhase::Combat | BossPhase::Dying => self.fight(player, bullets),
            BossPhase::Dead => {}
        }
    }

    fn advance_intro(&mut self, frame: usize) {
        if !self.intro.tick() {
            return;
        }
        let frame = frame + 1;
        self.phase = if frame >= BOSS_INTRO_FRAMES {
            log::debug!("Boss intro finished");
            BossPhase::Combat
        } else {
            BossPhase::Intro { frame }
        };
    }

    /// Body logic keeps running while `Dying`; only bursts stop
    fn fight(&mut self, player: &mut Player, bullets: &mut BulletPool) {
        self.hit = false;

        if self.pos.x > ENTITY_MAX || self.pos.x < 0 {
            self.dx = -self.dx;
        }

        if self.hitbox().overlaps(&player.hitbox()) {
            player.take_hit();
        }

        if bullets.query_and_consume(self.pos, IVec2::splat(ENTITY_SIZE)) {
            self.lives -= 1;
            self.hit = true;
        }

        self.pos = boss_sinus(self.pos.x, self.dx);

        self.update_bullets(player);

        if self.lives < 0 {
            if self.phase == BossPhase::Combat {
                log::debug!("Boss out of lives, {} bullets outstanding", self.bullets.len());
                self.phase = BossPhase::Dying;
            }
            self.settle_death();
            return;
        }

        if self.burst.tick() {
            self.emit_burst();
        }
    }

    fn update_bullets(&mut self, player: &mut Player) {
        for bullet in &mut self.bullets {
            bullet.update(player);
        }
        self.bullets.retain(|b| b.alive);
    }

    fn settle_death(&mut self) {
        if self.bullets.is_empty() {
            self.phase = BossPhase::Dead;
        }
    }

    /// Ring of 8 bullets from just inside the boss's top-left corner
    fn emit_burst(&mut self) {
        let origin = self.pos + IVec2::splat(BOSS_BULLET_ORIGIN);
        self.bullets
            .extend(BURST_DIRECTIONS.iter().map(|&dir| BossBullet::new(origin, dir)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PLAYER_BULLET_TILE;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn bystander() -> Player {
        let mut player = Player::new();
        player.pos = IVec2::new(0, ENTITY_MAX);
        player
    }

    fn in_combat() -> Boss {
        let mut boss = Boss::new(0);
        boss.phase = BossPhase::Combat;
        boss
    }

    fn finish_intro(boss: &mut Boss, player: &mut Player, bullets: &mut BulletPool) -> u32 {
        let mut ticks = 0;
        while matches!(boss.phase, BossPhase::Intro { .. }) {
            boss.update(player, bullets);
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn test_spawn_variant_in_range() {
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..50 {
            let boss = Boss::spawn(&mut rng);
            assert!(boss.variant < BOSS_TILES.len());
            assert_eq!(boss.lives, BOSS_LIVES);
            assert_eq!(boss.phase, BossPhase::Intro { frame: 0 });
        }
    }

    #[test]
    fn test_intro_lasts_seven_frames_of_six_ticks() {
        let mut boss = Boss::new(2);
        let mut player = Player::new();
        let mut bullets = BulletPool::new();
        // Bullets sitting on the boss are ignored during the intro
        bullets.add(boss.pos - IVec2::new(BULLET_SPAWN_OFFSET, 0), PLAYER_BULLET_TILE);

        for _ in 0..BOSS_ANIMATION_PERIOD {
            boss.update(&mut player, &mut bullets);
        }
        assert_eq!(boss.phase, BossPhase::Intro { frame: 1 });

        let rest = finish_intro(&mut boss, &mut player, &mut bullets);
        let total = rest + BOSS_ANIMATION_PERIOD;
        assert_eq!(total, BOSS_ANIMATION_PERIOD * BOSS_INTRO_FRAMES as u32);
        assert_eq!(boss.pos, IVec2::new(BOSS_START_X, BOSS_START_Y));
        assert_eq!(boss.lives, BOSS_LIVES);
        assert!(boss.bullets.is_empty());
        assert_eq!(bullets.len(), 1);
    }

    #[test]
    fn test_first_combat_frame_moves_and_bursts() {
        let mut boss = in_combat();
        let mut player = bystander();
        let mut bullets = BulletPool::new();
        boss.update(&mut player, &mut bullets);
        // x: 120 + 2; y: 64 * sin(122 deg) = 54
        assert_eq!(boss.pos, IVec2::new(122, 54));
        assert_eq!(boss.bullets.len(), 8);
        assert!(boss.bullets.iter().all(|b| b.pos == IVec2::new(126, 58)));
        let dirs: Vec<IVec2> = boss.bullets.iter().map(|b| b.vel).collect();
        assert_eq!(dirs, BURST_DIRECTIONS.to_vec());
    }

    #[test]
    fn test_burst_cadence_is_twenty_frames() {
        let mut boss = in_combat();
        let mut player = bystander();
        let mut bullets = BulletPool::new();
        let mut bursts = Vec::new();
        for frame in 0..41 {
            boss.update(&mut player, &mut bullets);
            // Fresh bullets have not moved yet and all sit on the burst origin
            let origin = boss.pos + IVec2::splat(BOSS_BULLET_ORIGIN);
            if boss.bullets.iter().filter(|b| b.pos == origin).count() == 8 {
                bursts.push(frame);
            }
        }
        assert_eq!(bursts, vec![0, 20, 40]);
    }

    #[test]
    fn test_bullet_hit_sets_flag_for_one_frame() {
        let mut boss = in_combat();
        let mut player = bystander();
        let mut bullets = BulletPool::new();
        bullets.add(boss.pos - IVec2::new(BULLET_SPAWN_OFFSET, 0), PLAYER_BULLET_TILE);
        boss.update(&mut player, &mut bullets);
        assert!(boss.hit);
        assert_eq!(boss.lives, BOSS_LIVES - 1);
        assert!(bullets.is_empty());
        boss.update(&mut player, &mut bullets);
        assert!(!boss.hit);
    }

    #[test]
    fn test_body_contact_damages_player() {
        let mut boss = in_combat();
        let mut player = Player::new();
        player.pos = boss.pos;
        let mut bullets = BulletPool::new();
        boss.update(&mut player, &mut bullets);
        assert_eq!(player.lives, PLAYER_LIVES - 1);
        assert_eq!(player.iframes, IFRAMES_ON_HIT);
    }

    #[test]
    fn test_boss_bullet_expires_outside_extended_bounds() {
        let mut player = bystander();
        let mut bullet = BossBullet::new(IVec2::new(-6, 100), IVec2::new(-1, 0));
        bullet.update(&mut player);
        assert!(bullet.alive, "x = -7 is still inside");
        bullet.update(&mut player);
        assert!(!bullet.alive);

        let mut bullet = BossBullet::new(IVec2::new(100, 25), IVec2::new(0, -1));
        bullet.update(&mut player);
        assert!(bullet.alive);
        bullet.update(&mut player);
        assert!(!bullet.alive);

        // Far edge is the playfield edge itself
        let mut bullet = BossBullet::new(IVec2::new(PLAYFIELD_SIZE - 1, 100), IVec2::new(1, 0));
        bullet.update(&mut player);
        assert!(bullet.alive);
        bullet.update(&mut player);
        assert!(!bullet.alive);
    }

    #[test]
    fn test_boss_bullet_hit_keeps_bullet_alive() {
        let mut player = Player::new();
        let mut bullet = BossBullet::new(player.pos, IVec2::new(1, 1));
        bullet.update(&mut player);
        assert!(bullet.alive);
        assert_eq!(player.lives, PLAYER_LIVES - 1);
        bullet.update(&mut player);
        assert_eq!(player.lives, PLAYER_LIVES - 1);
    }

    #[test]
    fn test_death_waits_for_bullets_to_clear() {
        let mut boss = in_combat();
        boss.lives = 0;
        let mut player = bystander();
        let mut bullets = BulletPool::new();
        // Three bullets that expire on successive frames at the left edge
        boss.bullets = (0..3)
            .map(|i| BossBullet::new(IVec2::new(BOSS_BULLET_MIN_X + i, 100), IVec2::new(-1, 0)))
            .collect();
        bullets.add(boss.pos - IVec2::new(BULLET_SPAWN_OFFSET, 0), PLAYER_BULLET_TILE);

        boss.update(&mut player, &mut bullets);
        assert_eq!(boss.lives, -1);
        assert_eq!(boss.phase, BossPhase::Dying);
        assert!(boss.is_live());
        assert_eq!(boss.bullets.len(), 2);

        // The body keeps patrolling while the spread clears
        let before = boss.pos;
        boss.update(&mut player, &mut bullets);
        assert!(boss.is_live());
        assert_eq!(boss.bullets.len(), 1);
        assert_eq!(boss.pos, boss_sinus(before.x, boss.dx));
        assert_ne!(boss.pos, before);

        boss.update(&mut player, &mut bullets);
        assert!(boss.bullets.is_empty());
        assert_eq!(boss.phase, BossPhase::Dead);
        assert!(!boss.is_live());
    }

    #[test]
    fn test_dying_body_still_collides() {
        let mut boss = in_combat();
        boss.lives = -1;
        boss.phase = BossPhase::Dying;
        boss.bullets = vec![BossBullet::new(IVec2::new(100, 100), IVec2::new(0, 1))];
        let mut player = Player::new();
        player.pos = boss.pos;
        let mut bullets = BulletPool::new();
        bullets.add(boss.pos - IVec2::new(BULLET_SPAWN_OFFSET, 0), PLAYER_BULLET_TILE);
        let before = boss.pos;

        boss.update(&mut player, &mut bullets);
        assert_eq!(player.lives, PLAYER_LIVES - 1);
        assert_eq!(player.iframes, IFRAMES_ON_HIT);
        assert!(bullets.is_empty());
        assert_eq!(boss.lives, -2);
        assert!(boss.hit);
        assert_eq!(boss.pos, boss_sinus(before.x, boss.dx));
        assert_eq!(boss.phase, BossPhase::Dying);
        assert_eq!(boss.bullets.len(), 1);
    }

    #[test]
    fn test_combat_bounces_off_right_edge() {
        let mut boss = in_combat();
        boss.pos = IVec2::new(241, BOSS_START_Y);
        let mut player = bystander();
        let mut bullets = BulletPool::new();
        boss.update(&mut player, &mut bullets);
        assert_eq!(boss.dx, -BOSS_SPEED);
        assert_eq!(boss.pos.x, 241 - BOSS_SPEED);
    }

    #[test]
    fn test_death_is_immediate_without_bullets() {
        let mut boss = in_combat();
        boss.lives = 0;
        let mut player = bystander();
        let mut bullets = BulletPool::new();
        bullets.add(boss.pos - IVec2::new(BULLET_SPAWN_OFFSET, 0), PLAYER_BULLET_TILE);
        boss.update(&mut player, &mut bullets);
        assert_eq!(boss.phase, BossPhase::Dead);
    }

    #[test]
    fn test_dying_boss_stops_bursting() {
        let mut boss = in_combat();
        boss.lives = -1;
        boss.phase = BossPhase::Dying;
        boss.bullets = vec![BossBullet::new(IVec2::new(100, 100), IVec2::new(0, 1))];
        let mut player = bystander();
        let mut bullets = BulletPool::new();
        for _ in 0..30 {
            boss.update(&mut player, &mut bullets);
            assert!(boss.bullets.len() <= 1);
        }
    }

    proptest! {
        #[test]
        fn prop_dead_only_when_out_of_lives_and_bullets(
            lives in -1i32..3,
            hits in prop::collection::vec(any::<bool>(), 1..200),
        ) {
            let mut boss = in_combat();
            boss.lives = lives;
            let mut player = bystander();
            let mut bullets = BulletPool::new();
            for hit in hits {
                if hit {
                    bullets.add(boss.pos - IVec2::new(BULLET_SPAWN_OFFSET, 0), PLAYER_BULLET_TILE);
                }
                boss.update(&mut player, &mut bullets);
                if boss.phase == BossPhase::Dead {
                    prop_assert!(boss.lives < 0);
                    prop_assert!(boss.bullets.is_empty());
                }
                if boss.lives >= 0 {
                    prop_assert_eq!(boss.phase, BossPhase::Combat);
                }
            }
        }
    }
}
