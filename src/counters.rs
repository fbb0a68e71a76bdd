//! Cyclic frame counters.
//!
//! Each counter increments once per unpaused frame and wraps to zero on
//! reaching its period. Only the modular position is meaningful.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclicCounter {
    value: u32,
    period: u32,
}

impl CyclicCounter {
    /// A zero period is treated as 1 so the counter stays at zero.
    pub fn new(period: u32) -> Self {
        Self {
            value: 0,
            period: period.max(1),
        }
    }

    /// Start at `value`, reduced into the counter's range.
    pub fn starting_at(period: u32, value: u32) -> Self {
        let mut counter = Self::new(period);
        counter.value = value % counter.period;
        counter
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    pub fn advance(&mut self) {
        self.value += 1;
        if self.value == self.period {
            self.value = 0;
        }
    }
}

// ── Periods ───────────────────────────────────────────────────────────────────

/// Not read by any logic yet.
pub const RESERVED_PERIOD: u32 = 4;
/// Drives particle blinking.
pub const BLINK_PERIOD: u32 = 128;
pub const HALF_PERIOD: u32 = 256;
/// Drives enemy sway.
pub const SWAY_PERIOD: u32 = 512;

/// A blinking particle is hidden while the blink counter is below this.
pub const BLINK_HIDDEN_BELOW: u32 = 64;

/// The four independent counters advanced by the frame driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameCounters {
    pub reserved: CyclicCounter,
    pub blink: CyclicCounter,
    pub half: CyclicCounter,
    pub sway: CyclicCounter,
}

impl Default for FrameCounters {
    fn default() -> Self {
        Self {
            reserved: CyclicCounter::new(RESERVED_PERIOD),
            blink: CyclicCounter::new(BLINK_PERIOD),
            half: CyclicCounter::new(HALF_PERIOD),
            sway: CyclicCounter::new(SWAY_PERIOD),
        }
    }
}

impl FrameCounters {
    pub fn advance(&mut self) {
        self.reserved.advance();
        self.blink.advance();
        self.half.advance();
        self.sway.advance();
    }

    /// Whether blinking particles are in their visible window.
    pub fn blink_visible(&self) -> bool {
        self.blink.value() >= BLINK_HIDDEN_BELOW
    }
}
