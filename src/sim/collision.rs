//! Collision primitives
//!
//! Two flavours of test exist and must not be unified:
//! - Hitbox overlap (strict AABB) between bodies and the player
//! - Grid sampling against the bullet pool, which keys bullets by exact
//!   position and therefore probes a fixed set of candidate coordinates

use glam::IVec2;

use crate::consts::{BULLET_SIZE, HITBOX_FAR_EDGE, HITBOX_INSET};

/// Axis-aligned box with exclusive overlap semantics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hitbox {
    pub min: IVec2,
    pub max: IVec2,
}

impl Hitbox {
    pub fn new(min: IVec2, max: IVec2) -> Self {
        Self { min, max }
    }

    /// Inset box of a 16x16 body, spanning `+5..+10` on both axes
    pub fn inset_entity(pos: IVec2) -> Self {
        Self::new(pos + IVec2::splat(HITBOX_INSET), pos + IVec2::splat(HITBOX_FAR_EDGE))
    }

    /// Full 8x8 box of a projectile, no inset
    pub fn bullet(pos: IVec2) -> Self {
        Self::new(pos, pos + IVec2::splat(BULLET_SIZE))
    }

    /// True when the open interiors intersect (touching edges do not count)
    #[inline]
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Candidate bullet coordinates for a pool query.
///
/// For every offset in `extent` (width x height pixels from `origin`), the
/// four corners of a 2x2 grid of 8px cells are probed.
pub fn grid_samples(origin: IVec2, extent: IVec2) -> impl Iterator<Item = IVec2> {
    (0..extent.x).flat_map(move |dx| {
        (0..extent.y).flat_map(move |dy| {
            (0..2).flat_map(move |i| {
                (0..2).map(move |j| {
                    origin + IVec2::new(dx + i * BULLET_SIZE, dy + j * BULLET_SIZE)
                })
            })
        })
    })
}
