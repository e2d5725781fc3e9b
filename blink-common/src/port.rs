// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Hardware port seen by the control loop.

use embedded_hal::digital::{InputPin, OutputPin};

/// Everything the control loop needs from the hardware.
pub trait BlinkPort {
    /// Sample the trigger line; `true` when it reads pressed.
    fn trigger_pressed(&mut self) -> bool;
    /// Drive the indicator output.
    fn drive_output(&mut self, on: bool);
    /// Idle until the next tick wake.
    fn wait_for_tick(&mut self);
    /// Clear the pending tick so the next one can be observed.
    fn ack_tick(&mut self);
}

/// Periodic wake source backing a [`PinPort`].
pub trait TickSource {
    fn wait(&mut self);
    fn acknowledge(&mut self);
}

/// [`BlinkPort`] over embedded-hal pins.
///
/// The trigger is active-low: pressed pulls the line to 0.
pub struct PinPort<I, O, T> {
    trigger: I,
    output: O,
    ticks: T,
}

impl<I, O, T> PinPort<I, O, T>
where
    I: InputPin,
    O: OutputPin,
    T: TickSource,
{
    pub fn new(trigger: I, output: O, ticks: T) -> Self {
        Self {
            trigger,
            output,
            ticks,
        }
    }

    pub fn release(self) -> (I, O, T) {
        (self.trigger, self.output, self.ticks)
    }
}

impl<I, O, T> BlinkPort for PinPort<I, O, T>
where
    I: InputPin,
    O: OutputPin,
    T: TickSource,
{
    fn trigger_pressed(&mut self) -> bool {
        self.trigger.is_low().unwrap_or(false)
    }

    fn drive_output(&mut self, on: bool) {
        if on {
            self.output.set_high().ok();
        } else {
            self.output.set_low().ok();
        }
    }

    fn wait_for_tick(&mut self) {
        self.ticks.wait();
    }

    fn ack_tick(&mut self) {
        self.ticks.acknowledge();
    }
}
