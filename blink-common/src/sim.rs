// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Simulated hardware port for host runs.

use crate::port::BlinkPort;

/// How the simulated trigger line behaves over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerScript {
    /// Never pressed.
    Never,
    /// Pressed once this many ticks have elapsed, and from then on.
    PressedAfter(u64),
    /// Pressed only while `from <= ticks < until`.
    PressedWindow { from: u64, until: u64 },
}

impl TriggerScript {
    pub fn is_pressed(&self, ticks: u64) -> bool {
        match *self {
            Self::Never => false,
            Self::PressedAfter(n) => ticks >= n,
            Self::PressedWindow { from, until } => (from..until).contains(&ticks),
        }
    }
}

/// [`BlinkPort`] whose tick wait returns immediately.
///
/// Tick `n` is the number of ticks acknowledged so far, so the first
/// evaluation runs at tick 0.
pub struct SimPort {
    script: TriggerScript,
    ticks: u64,
    pending: bool,
    output: bool,
    samples: u64,
    writes: u64,
}

impl SimPort {
    pub const fn new(script: TriggerScript) -> Self {
        Self {
            script,
            ticks: 0,
            pending: false,
            output: false,
            samples: 0,
            writes: 0,
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn output(&self) -> bool {
        self.output
    }

    /// How many times the trigger line has been read.
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// How many times the output line has been written.
    pub fn writes(&self) -> u64 {
        self.writes
    }

    pub fn tick_pending(&self) -> bool {
        self.pending
    }
}

impl BlinkPort for SimPort {
    fn trigger_pressed(&mut self) -> bool {
        self.samples += 1;
        self.script.is_pressed(self.ticks)
    }

    fn drive_output(&mut self, on: bool) {
        self.writes += 1;
        self.output = on;
    }

    fn wait_for_tick(&mut self) {
        self.pending = true;
    }

    fn ack_tick(&mut self) {
        if self.pending {
            self.pending = false;
            self.ticks += 1;
        }
    }
}
