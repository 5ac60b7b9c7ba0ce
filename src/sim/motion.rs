//! Motion profiles
//!
//! Pure position generators. Each takes the current position and velocity
//! (plus an anchor line for the sinusoidal profiles) and returns the next
//! position without touching its inputs.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{PLAYFIELD_TOP, SINUS_AMPLITUDE};
use crate::sin_deg;

/// Movement pattern an enemy is locked into for its whole life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionProfile {
    /// Straight line, bouncing off the playfield edges
    Linear,
    /// Horizontal sweep with vertical oscillation around the anchor row
    SinusSide,
    /// Vertical sweep with horizontal oscillation around the anchor column
    SinusDown,
}

impl MotionProfile {
    /// Every profile, in the order random selection indexes them
    pub const ALL: [MotionProfile; 3] = [
        MotionProfile::Linear,
        MotionProfile::SinusSide,
        MotionProfile::SinusDown,
    ];

    /// Next position under this profile
    pub fn apply(self, pos: IVec2, vel: IVec2, anchor: i32) -> IVec2 {
        match self {
            MotionProfile::Linear => linear(pos, vel),
            MotionProfile::SinusSide => sinus_side(pos, vel, anchor),
            MotionProfile::SinusDown => sinus_down(pos, vel, anchor),
        }
    }
}

#[inline]
fn wave(degrees: i32) -> i32 {
    (sin_deg(degrees) * SINUS_AMPLITUDE) as i32
}

/// `pos + vel`, unconditionally
#[inline]
pub fn linear(pos: IVec2, vel: IVec2) -> IVec2 {
    pos + vel
}

/// x advances by `vel.x`; y oscillates around `anchor`
pub fn sinus_side(pos: IVec2, vel: IVec2, anchor: i32) -> IVec2 {
    let x = pos.x + vel.x;
    IVec2::new(x, wave(x * 2) + anchor)
}

/// y advances by `vel.y`; x oscillates around `anchor`
pub fn sinus_down(pos: IVec2, vel: IVec2, anchor: i32) -> IVec2 {
    let y = pos.y + vel.y;
    IVec2::new(wave(y * 2) + anchor, y)
}

/// Boss patrol: x advances by `dx`, y follows a sine wave folded back up at
/// the top of the playable band so the boss never dips into the HUD rows.
pub fn boss_sinus(x: i32, dx: i32) -> IVec2 {
    let x = x + dx;
    let mut y = wave(x);
    if y < PLAYFIELD_TOP {
        y = -(y - PLAYFIELD_TOP) + PLAYFIELD_TOP;
    }
    IVec2::new(x, y)
}
