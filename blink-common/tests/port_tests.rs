// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Tests for the embedded-hal port adapter and the tick flag.

use blink_common::{
    BlinkController, BlinkPort, ControlLoop, PinPort, TickFlag, TickSource, TickWaiter,
};
use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};

struct FakeInput {
    low: bool,
    fail: bool,
    reads: u32,
}

impl FakeInput {
    fn new(low: bool) -> Self {
        Self {
            low,
            fail: false,
            reads: 0,
        }
    }
}

impl ErrorType for FakeInput {
    type Error = ErrorKind;
}

impl InputPin for FakeInput {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.is_low().map(|low| !low)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.reads += 1;
        if self.fail {
            Err(ErrorKind::Other)
        } else {
            Ok(self.low)
        }
    }
}

#[derive(Default)]
struct FakeOutput {
    high: bool,
    writes: u32,
}

impl ErrorType for FakeOutput {
    type Error = ErrorKind;
}

impl OutputPin for FakeOutput {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.writes += 1;
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.writes += 1;
        self.high = true;
        Ok(())
    }
}

/// Tick source that is always ready.
#[derive(Default)]
struct FreeRunning {
    waits: u32,
    acks: u32,
}

impl TickSource for FreeRunning {
    fn wait(&mut self) {
        self.waits += 1;
    }

    fn acknowledge(&mut self) {
        self.acks += 1;
    }
}

#[test]
fn test_trigger_is_active_low() {
    let mut released = PinPort::new(
        FakeInput::new(false),
        FakeOutput::default(),
        FreeRunning::default(),
    );
    let mut pressed = PinPort::new(
        FakeInput::new(true),
        FakeOutput::default(),
        FreeRunning::default(),
    );

    assert!(!released.trigger_pressed());
    assert!(pressed.trigger_pressed());
}

#[test]
fn test_failed_read_counts_as_released() {
    let mut input = FakeInput::new(true);
    input.fail = true;
    let mut port = PinPort::new(input, FakeOutput::default(), FreeRunning::default());

    assert!(!port.trigger_pressed());
}

#[test]
fn test_drive_output_sets_pin_level() {
    let mut port = PinPort::new(
        FakeInput::new(false),
        FakeOutput::default(),
        FreeRunning::default(),
    );

    port.drive_output(true);
    port.drive_output(false);
    port.drive_output(true);

    let (_, output, _) = port.release();
    assert!(output.high);
    assert_eq!(output.writes, 3);
}

#[test]
fn test_pin_port_runs_cycle() {
    let port = PinPort::new(
        FakeInput::new(true),
        FakeOutput::default(),
        FreeRunning::default(),
    );
    let mut control = ControlLoop::new(BlinkController::default(), port);

    for _ in 0..1001 {
        control.run_once();
    }

    let (controller, port) = control.release();
    let (input, output, ticks) = port.release();
    assert!(controller.is_armed());
    assert_eq!(input.reads, 1);
    assert!(!output.high);
    assert_eq!(output.writes, 2);
    assert_eq!(ticks.waits, 1001);
    assert_eq!(ticks.acks, 1001);
}

#[test]
fn test_tick_flag_take_clears() {
    let flag = TickFlag::new();
    assert!(!flag.is_pending());
    assert!(!flag.take());

    flag.raise();
    flag.raise();
    assert!(flag.is_pending());
    assert!(flag.take());
    assert!(!flag.is_pending());
}

#[test]
fn test_waiter_idles_until_tick() {
    let flag = TickFlag::new();
    let mut idles = 0;
    let mut waiter = TickWaiter::new(&flag, || {
        idles += 1;
        if idles == 3 {
            flag.raise();
        }
    });

    waiter.wait();
    assert!(flag.is_pending());
    waiter.acknowledge();
    assert!(!flag.is_pending());
    drop(waiter);

    assert_eq!(idles, 3);
}

#[test]
fn test_waiter_skips_idle_when_tick_pending() {
    let flag = TickFlag::new();
    flag.raise();
    let mut waiter = TickWaiter::new(&flag, || panic!("idled with a tick pending"));

    waiter.wait();
    waiter.acknowledge();
    assert!(!flag.is_pending());
}
