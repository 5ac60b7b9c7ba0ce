//! 2hu ~ Highly Unresponsive to Prayers - simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, boss state machine, scoring)
//! - `render`: Presentation hooks (sprite descriptions for an external blitter)
//! - `settings`: Run configuration for the headless runner

pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield is a 256x256 pixel square
    pub const PLAYFIELD_SIZE: i32 = 256;
    /// Top of the playable band (rows above are HUD)
    pub const PLAYFIELD_TOP: i32 = 32;
    /// Largest top-left coordinate a 16x16 entity may occupy
    pub const ENTITY_MAX: i32 = 240;

    /// Entity bounding box (player, enemies, boss)
    pub const ENTITY_SIZE: i32 = 16;
    /// Projectile bounding box (player and boss bullets)
    pub const BULLET_SIZE: i32 = 8;
    /// Margin trimmed off each side of an entity box before overlap tests
    pub const HITBOX_INSET: i32 = 5;
    /// Far edge of the inset hitbox, measured from the entity origin
    pub const HITBOX_FAR_EDGE: i32 = 10;

    /// Player defaults
    pub const PLAYER_START_X: i32 = 120;
    pub const PLAYER_START_Y: i32 = 240;
    pub const PLAYER_LIVES: i32 = 3;
    pub const PLAYER_SPEED: i32 = 4;
    pub const PLAYER_SLOW_SPEED: i32 = 2;
    /// Invulnerability ticks granted by a hit
    pub const IFRAMES_ON_HIT: u32 = 90;
    /// Fire is allowed once every N live frames
    pub const FIRE_PERIOD: u32 = 3;
    /// Death animation advances one tile every N ticks
    pub const DEATH_FRAME_TICKS: u32 = 4;
    /// Session ends once the death animation counter reaches this value
    pub const DEATH_FRAMES_TERMINAL: u32 = 40;

    /// Player bullets
    pub const BULLET_SPEED: i32 = 5;
    /// Horizontal offset of a spawned bullet from the player's left edge
    pub const BULLET_SPAWN_OFFSET: i32 = 4;

    /// Enemies
    pub const ENEMY_LIVES: i32 = 5;
    pub const ENEMY_SCORE: u64 = 200;
    pub const INITIAL_ENEMIES: usize = 4;
    pub const ENEMY_SPAWN_PERIOD: u32 = 90;
    /// Amplitude (pixels) of sinusoidal motion profiles
    pub const SINUS_AMPLITUDE: f64 = 64.0;

    /// Boss
    pub const BOSS_LIVES: i32 = 50;
    pub const BOSS_START_X: i32 = 120;
    pub const BOSS_START_Y: i32 = 64;
    pub const BOSS_SPEED: i32 = 2;
    pub const BOSS_BURST_PERIOD: u32 = 20;
    pub const BOSS_ANIMATION_PERIOD: u32 = 6;
    /// Number of intro animation tiles
    pub const BOSS_INTRO_FRAMES: usize = 7;
    /// Boss appears whenever the score lands on a multiple of this
    pub const BOSS_SCORE_THRESHOLD: u64 = 3000;
    pub const BOSS_BONUS: u64 = 10_000;
    /// Offset of a burst's origin from the boss's top-left corner
    pub const BOSS_BULLET_ORIGIN: i32 = 4;
    /// Boss bullets die once they leave this box (inclusive)
    pub const BOSS_BULLET_MIN_X: i32 = -7;
    pub const BOSS_BULLET_MIN_Y: i32 = 24;
    pub const BOSS_BULLET_MAX: i32 = PLAYFIELD_SIZE;
}

/// Sine of an angle given in degrees.
///
/// The motion profiles are tuned against degree-based trigonometry, so every
/// caller works in degrees and truncates the result toward zero.
#[inline]
pub fn sin_deg(degrees: i32) -> f64 {
    f64::from(degrees).to_radians().sin()
}
