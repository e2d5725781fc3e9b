// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Shape of the blink cycle.
//!
//! Once armed, the elapsed counter `t` walks `0..=cycle_ms` and the output
//! follows it:
//!
//! ```text
//! t == 0                    on-edge   output ON
//! 0 < t < on_hold_ms        on-hold   output left ON
//! on_hold_ms <= t < cycle   off-hold  output OFF
//! t >= cycle_ms             reset     output OFF, t back to 0
//! ```

use core::fmt;

/// Time the output is held ON after the on-edge, in ticks (ms).
pub const ON_HOLD_MS: u32 = 1000;
/// Elapsed count at which the cycle resets, in ticks (ms).
pub const CYCLE_MS: u32 = 3000;
/// Time the output is held OFF before the reset, in ticks (ms).
pub const OFF_HOLD_MS: u32 = CYCLE_MS - ON_HOLD_MS;

/// One of the four timed segments of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Not armed yet; the trigger line is still being sampled.
    WaitForTrigger,
    /// `t == 0`: output switched ON.
    OnEdge,
    /// `0 < t < on_hold_ms`: output stays ON.
    OnHold,
    /// `on_hold_ms <= t < cycle_ms`: output driven OFF.
    OffHold,
    /// `t >= cycle_ms`: counter rewinds to 0.
    Reset,
}

/// Rejected cycle shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimingError {
    /// `on_hold_ms` was zero.
    EmptyOnHold,
    /// `cycle_ms` was not greater than `on_hold_ms`.
    EmptyOffHold { on_hold_ms: u32, cycle_ms: u32 },
}

impl fmt::Display for TimingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyOnHold => write!(f, "on-hold time must be at least 1 ms"),
            Self::EmptyOffHold {
                on_hold_ms,
                cycle_ms,
            } => write!(
                f,
                "cycle length {} ms must exceed on-hold time {} ms",
                cycle_ms, on_hold_ms
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimingError {}

/// Phase boundaries of the blink cycle, in ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleTiming {
    on_hold_ms: u32,
    cycle_ms: u32,
}

impl CycleTiming {
    /// 1 s ON, 2 s OFF.
    pub const DEFAULT: Self = Self {
        on_hold_ms: ON_HOLD_MS,
        cycle_ms: CYCLE_MS,
    };

    /// Validate a cycle shape; both phases must last at least one tick.
    pub const fn new(on_hold_ms: u32, cycle_ms: u32) -> Result<Self, TimingError> {
        if on_hold_ms == 0 {
            return Err(TimingError::EmptyOnHold);
        }
        if cycle_ms <= on_hold_ms {
            return Err(TimingError::EmptyOffHold {
                on_hold_ms,
                cycle_ms,
            });
        }
        Ok(Self {
            on_hold_ms,
            cycle_ms,
        })
    }

    pub const fn on_hold_ms(&self) -> u32 {
        self.on_hold_ms
    }

    pub const fn cycle_ms(&self) -> u32 {
        self.cycle_ms
    }

    pub const fn off_hold_ms(&self) -> u32 {
        self.cycle_ms - self.on_hold_ms
    }

    /// Evaluations per cycle, counting the reset tick.
    pub const fn period_ticks(&self) -> u64 {
        self.cycle_ms as u64 + 1
    }

    /// Phase an armed controller executes when its counter reads `t`.
    pub const fn phase_at(&self, t: u32) -> Phase {
        if t == 0 {
            Phase::OnEdge
        } else if t < self.on_hold_ms {
            Phase::OnHold
        } else if t < self.cycle_ms {
            Phase::OffHold
        } else {
            Phase::Reset
        }
    }

    /// Output line level implied by the latch and the counter after an evaluation.
    pub const fn output_level(&self, latched: bool, t: u32) -> bool {
        latched && t >= 1 && t <= self.on_hold_ms
    }
}

impl Default for CycleTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}
