// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! 1 ms tick from TIMER alarm 0.

use blink_common::TickFlag;
use core::cell::RefCell;
use critical_section::Mutex;
use fugit::MicrosDurationU32;
use rp2040_hal::{
    pac::{self, interrupt},
    timer::{Alarm, Alarm0, ScheduleAlarmError},
};

pub const TICK_PERIOD: MicrosDurationU32 = MicrosDurationU32::millis(1);

/// Raised by the alarm interrupt, cleared by the control loop.
pub static TICK: TickFlag = TickFlag::new();

static ALARM: Mutex<RefCell<Option<Alarm0>>> = Mutex::new(RefCell::new(None));

/// Arm the alarm and unmask its interrupt.
pub fn start(mut alarm: Alarm0) -> Result<(), ScheduleAlarmError> {
    alarm.schedule(TICK_PERIOD)?;
    alarm.enable_interrupt();
    critical_section::with(|cs| ALARM.borrow(cs).replace(Some(alarm)));

    // SAFETY: the handler only touches ALARM and TICK, both behind critical sections.
    unsafe { cortex_m::peripheral::NVIC::unmask(pac::Interrupt::TIMER_IRQ_0) };
    Ok(())
}

/// Sleep until an interrupt unless a tick is already pending.
///
/// The check and `WFI` run with interrupts masked so a tick landing in between
/// still wakes the core.
pub fn idle() {
    cortex_m::interrupt::free(|_| {
        if !TICK.is_pending() {
            cortex_m::asm::wfi();
        }
    });
}

#[interrupt]
fn TIMER_IRQ_0() {
    critical_section::with(|cs| {
        if let Some(alarm) = ALARM.borrow_ref_mut(cs).as_mut() {
            alarm.clear_interrupt();
            // Rearm relative to now: each period restarts from zero.
            if alarm.schedule(TICK_PERIOD).is_err() {
                defmt::warn!("Tick: failed to rearm alarm");
            }
        }
    });
    TICK.raise();
}
