// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Busy-waits.
//!
//! - [`Clock::wait_micros`] spins a calibrated loop and never looks at the timer, so it works for
//!   delays shorter than the clock's own query overhead.
//! - [`Clock::wait_millis`] polls [`Clock::micros`] and is immune to interrupt jitter.
//!
//! Neither yields. There is no scheduler to yield to.

use embedded_hal::delay::DelayNs;

use super::{Clock, ClockState, TickSource};
use crate::config::WAIT_FLOOR_US;

/// Target-specific calibrated spin.
///
/// One call must burn one microsecond *including* the overhead of the caller's loop around it, so
/// implementations are tied to a specific core clock.
pub trait SpinDelay {
    fn spin_one_micro(&mut self);
}

impl<T: SpinDelay + ?Sized> SpinDelay for &mut T {
    #[inline]
    fn spin_one_micro(&mut self) {
        (**self).spin_one_micro()
    }
}

impl<'a, S, D> Clock<'a, S, D>
where
    S: TickSource,
    D: SpinDelay,
{
    /// Block for at least `micros` microseconds (minus the call overhead floor).
    ///
    /// Requests of [`WAIT_FLOOR_US`] or less return immediately.
    pub fn wait_micros(&mut self, micros: u32) {
        if micros <= WAIT_FLOOR_US {
            return;
        }

        for _ in 0..micros - WAIT_FLOOR_US {
            self.spin.spin_one_micro();
        }
    }

    /// Block for at least `millis` milliseconds.
    ///
    /// The inner loop consumes every whole millisecond that has passed since the last boundary,
    /// not just one, so a long-running interrupt between two samples does not stretch the wait.
    /// The clock must not be paused: a paused clock never advances and this would never return.
    pub fn wait_millis(&mut self, millis: u32) {
        debug_assert!(self.state() != ClockState::Paused, "wait_millis on a paused clock");
        let mut remaining = millis;
        let mut boundary = self.micros();

        while remaining > 0 {
            let mut now = self.micros();
            while remaining > 0 && now.wrapping_sub(boundary) >= 1_000 {
                remaining -= 1;
                boundary = boundary.wrapping_add(1_000);
                now = self.micros();
            }
        }
    }
}

/// Delay provider for drivers written against `embedded-hal` (LCD, sensors).
///
/// The trait promises *at least* the requested delay, so microsecond requests are padded by
/// [`WAIT_FLOOR_US`] to cancel the floor [`Clock::wait_micros`] subtracts.
impl<'a, S, D> DelayNs for Clock<'a, S, D>
where
    S: TickSource,
    D: SpinDelay,
{
    fn delay_ns(&mut self, ns: u32) {
        self.delay_us(ns.div_ceil(1_000));
    }

    fn delay_us(&mut self, us: u32) {
        if us > 0 {
            self.wait_micros(us.saturating_add(WAIT_FLOOR_US));
        }
    }

    fn delay_ms(&mut self, ms: u32) {
        self.wait_millis(ms);
    }
}
