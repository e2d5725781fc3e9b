// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Core of the trigger-and-blink controller.
//!
//! This crate supports both `no_std` (embedded) and `std` (host) environments:
//! - Default: `no_std` mode for embedded targets
//! - `std` feature: Enables `std::error::Error` impls for host tools
//! - `defmt` feature: Enables defmt logging and `defmt::Format` derives

#![cfg_attr(not(feature = "std"), no_std)]

pub mod control_loop;
pub mod controller;
pub mod port;
pub mod sim;
pub mod tick;
pub mod timing;

// Re-export commonly used types
pub use control_loop::ControlLoop;
pub use controller::{BlinkController, Drive, Step};
pub use port::{BlinkPort, PinPort, TickSource};
pub use sim::{SimPort, TriggerScript};
pub use tick::{TickFlag, TickWaiter};
pub use timing::{CycleTiming, Phase, TimingError};
pub use timing::{CYCLE_MS, OFF_HOLD_MS, ON_HOLD_MS};
