// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Blink controller state machine.
//!
//! Evaluated exactly once per tick. Until the trigger has been seen pressed the
//! controller only samples the input; after that it free-runs the cycle from
//! [`CycleTiming`] forever and never looks at the input again.

use crate::timing::{CycleTiming, Phase};

/// What to do with the output line after an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Drive {
    /// Leave the line as it is.
    Hold,
    On,
    Off,
}

/// Result of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    /// Phase that was executed.
    pub phase: Phase,
    pub drive: Drive,
    /// The trigger latched during this evaluation.
    pub armed_now: bool,
}

/// Trigger latch plus elapsed-tick counter driving the output cycle.
pub struct BlinkController {
    timing: CycleTiming,
    latched: bool,
    elapsed_ms: u32,
}

impl BlinkController {
    pub const fn new(timing: CycleTiming) -> Self {
        Self {
            timing,
            latched: false,
            elapsed_ms: 0,
        }
    }

    pub const fn timing(&self) -> CycleTiming {
        self.timing
    }

    /// Whether the trigger has fired since power-on.
    pub const fn is_armed(&self) -> bool {
        self.latched
    }

    pub const fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Phase the next evaluation will execute, assuming the trigger state is unchanged.
    pub const fn phase(&self) -> Phase {
        if self.latched {
            self.timing.phase_at(self.elapsed_ms)
        } else {
            Phase::WaitForTrigger
        }
    }

    /// Level the output line holds after the last evaluation.
    pub const fn output_level(&self) -> bool {
        self.timing.output_level(self.latched, self.elapsed_ms)
    }

    /// Run one evaluation.
    ///
    /// `trigger_pressed` is only called while the controller is unarmed; once it
    /// returns `true` the controller latches and runs the on-edge in the same
    /// evaluation.
    pub fn tick<F>(&mut self, trigger_pressed: F) -> Step
    where
        F: FnOnce() -> bool,
    {
        let armed_now = !self.latched && trigger_pressed();
        if armed_now {
            self.latched = true;
            #[cfg(feature = "defmt")]
            defmt::info!("Trigger pressed, blink cycle armed");
        }

        if !self.latched {
            return Step {
                phase: Phase::WaitForTrigger,
                drive: Drive::Hold,
                armed_now,
            };
        }

        let t = self.elapsed_ms;
        let phase = self.timing.phase_at(t);
        let (next_t, drive) = match phase {
            Phase::OnEdge => (1, Drive::On),
            Phase::OnHold => (t + 1, Drive::Hold),
            Phase::OffHold => (t + 1, Drive::Off),
            Phase::Reset | Phase::WaitForTrigger => (0, Drive::Off),
        };

        #[cfg(feature = "defmt")]
        {
            let entering_off = phase == Phase::OffHold && t == self.timing.on_hold_ms();
            if matches!(phase, Phase::OnEdge | Phase::Reset) || entering_off {
                defmt::debug!("Blink: {:?} at t={}ms", phase, t);
            }
        }

        self.elapsed_ms = next_t;
        Step {
            phase,
            drive,
            armed_now,
        }
    }
}

impl Default for BlinkController {
    fn default() -> Self {
        Self::new(CycleTiming::DEFAULT)
    }
}
