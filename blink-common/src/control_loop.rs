// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Single-threaded evaluate / wait / acknowledge loop.

use crate::controller::{BlinkController, Drive, Step};
use crate::port::BlinkPort;

pub struct ControlLoop<P> {
    controller: BlinkController,
    port: P,
}

impl<P: BlinkPort> ControlLoop<P> {
    pub fn new(controller: BlinkController, port: P) -> Self {
        Self { controller, port }
    }

    pub fn controller(&self) -> &BlinkController {
        &self.controller
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    pub fn release(self) -> (BlinkController, P) {
        (self.controller, self.port)
    }

    /// Run one controller evaluation and apply its output.
    pub fn evaluate(&mut self) -> Step {
        let port = &mut self.port;
        let step = self.controller.tick(|| port.trigger_pressed());

        match step.drive {
            Drive::On => port.drive_output(true),
            Drive::Off => port.drive_output(false),
            Drive::Hold => {}
        }
        step
    }

    /// Evaluate, then sleep until the next tick and acknowledge it.
    pub fn run_once(&mut self) -> Step {
        let step = self.evaluate();
        self.port.wait_for_tick();
        self.port.ack_tick();
        step
    }

    pub fn run(&mut self) -> ! {
        loop {
            self.run_once();
        }
    }
}
