// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Software half of the tick source.
//!
//! The timer interrupt only ever calls [`TickFlag::raise`]; controller state is
//! owned by the main loop alone.

use core::cell::Cell;
use critical_section::Mutex;

use crate::port::TickSource;

/// Pending-tick flag shared between the timer interrupt and the main loop.
pub struct TickFlag {
    pending: Mutex<Cell<bool>>,
}

impl TickFlag {
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(Cell::new(false)),
        }
    }

    /// Mark a tick as elapsed. Called from the timer interrupt.
    pub fn raise(&self) {
        critical_section::with(|cs| self.pending.borrow(cs).set(true));
    }

    pub fn is_pending(&self) -> bool {
        critical_section::with(|cs| self.pending.borrow(cs).get())
    }

    /// Clear the flag, returning whether a tick was pending.
    pub fn take(&self) -> bool {
        critical_section::with(|cs| self.pending.borrow(cs).replace(false))
    }
}

impl Default for TickFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// [`TickSource`] that idles until a [`TickFlag`] is raised.
///
/// `idle` is called repeatedly while no tick is pending; on Cortex-M it is
/// typically a masked re-check followed by `WFI`.
pub struct TickWaiter<'a, W> {
    flag: &'a TickFlag,
    idle: W,
}

impl<'a, W> TickWaiter<'a, W>
where
    W: FnMut(),
{
    pub fn new(flag: &'a TickFlag, idle: W) -> Self {
        Self { flag, idle }
    }
}

impl<W> TickSource for TickWaiter<'_, W>
where
    W: FnMut(),
{
    fn wait(&mut self) {
        while !self.flag.is_pending() {
            (self.idle)();
        }
    }

    fn acknowledge(&mut self) {
        self.flag.take();
    }
}
