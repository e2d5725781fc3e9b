// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Board bring-up for a Raspberry Pi Pico.

use embedded_hal::digital::PinState;
use rp2040_hal::{
    self as hal,
    clocks::{init_clocks_and_plls, Clock},
    gpio::{bank0, FunctionSioInput, FunctionSioOutput, Pin, PullDown, PullUp},
    pac,
    timer::Alarm0,
    Sio, Timer, Watchdog,
};

/// Pico crystal frequency.
const XTAL_FREQ_HZ: u32 = 12_000_000;

/// Trigger button on GP14, to ground. Pressed reads low.
pub type TriggerPin = Pin<bank0::Gpio14, FunctionSioInput, PullUp>;
/// On-board LED.
pub type LedPin = Pin<bank0::Gpio25, FunctionSioOutput, PullDown>;

#[derive(Debug, Clone, Copy, defmt::Format)]
pub enum BoardError {
    PeripheralsTaken,
    Clocks,
    AlarmTaken,
}

pub struct Board {
    pub trigger: TriggerPin,
    pub led: LedPin,
    pub alarm: Alarm0,
}

/// Configure clocks and pins. The LED starts OFF.
pub fn init() -> Result<Board, BoardError> {
    let mut pac = pac::Peripherals::take().ok_or(BoardError::PeripheralsTaken)?;
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    let clocks = init_clocks_and_plls(
        XTAL_FREQ_HZ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .map_err(|_| BoardError::Clocks)?;

    let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let alarm = timer.alarm_0().ok_or(BoardError::AlarmTaken)?;

    let sio = Sio::new(pac.SIO);
    let pins = hal::gpio::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let led = pins.gpio25.into_push_pull_output_in_state(PinState::Low);
    let trigger = pins.gpio14.into_pull_up_input();

    defmt::println!(
        "Board ready: sys clock {} Hz",
        clocks.system_clock.freq().to_Hz()
    );

    Ok(Board {
        trigger,
        led,
        alarm,
    })
}
