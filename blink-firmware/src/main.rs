// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

#![no_std]
#![no_main]

mod board;
mod tick;

use blink_common::{BlinkController, ControlLoop, CycleTiming, PinPort, TickWaiter};
use defmt_rtt as _;
use panic_probe as _;

defmt::timestamp!("{=u64:us}", { 0 });

use cortex_m_rt::entry;

#[unsafe(link_section = ".boot2")]
#[used]
pub static BOOT2_FIRMWARE: [u8; 256] = rp2040_boot2::BOOT_LOADER_GENERIC_03H;

fn halt() -> ! {
    loop {
        cortex_m::asm::nop();
    }
}

#[entry]
fn main() -> ! {
    defmt::println!("Blink firmware v{}", env!("CARGO_PKG_VERSION"));

    let board = match board::init() {
        Ok(board) => board,
        Err(e) => {
            defmt::error!("Board init failed: {:?}", e);
            halt();
        }
    };

    let timing = CycleTiming::DEFAULT;
    defmt::println!(
        "Cycle: {} ms on, {} ms off",
        timing.on_hold_ms(),
        timing.off_hold_ms()
    );

    if tick::start(board.alarm).is_err() {
        defmt::error!("Tick: failed to schedule first alarm");
        halt();
    }

    let ticks = TickWaiter::new(&tick::TICK, tick::idle);
    let port = PinPort::new(board.trigger, board.led, ticks);
    let mut control = ControlLoop::new(BlinkController::new(timing), port);

    defmt::println!("Waiting for trigger on GP14");
    control.run()
}
