//! Per-entity cadence timers
//!
//! Replaces "every N frames" checks against a global frame counter, so
//! each entity can be ticked in isolation.

use serde::{Deserialize, Serialize};

/// Fires once every `period` ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cadence {
    period: u32,
    countdown: u32,
}

impl Cadence {
    /// First fires on the `period`th tick
    pub fn new(period: u32) -> Self {
        debug_assert!(period > 0, "cadence period must be positive");
        Self {
            period,
            countdown: period - 1,
        }
    }

    /// First fires on the very next tick
    pub fn immediate(period: u32) -> Self {
        debug_assert!(period > 0, "cadence period must be positive");
        Self {
            period,
            countdown: 0,
        }
    }

    /// Advance one tick; true when the cadence fires on this tick
    pub fn tick(&mut self) -> bool {
        if self.countdown == 0 {
            self.countdown = self.period - 1;
            true
        } else {
            self.countdown -= 1;
            false
        }
    }
}
