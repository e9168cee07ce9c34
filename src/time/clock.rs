// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Clock state object and lifecycle control.
//!
//! Typical usage pattern:
//!
//! ```ignore
//! static TICKS: TickCounter = TickCounter::new();
//!
//! let mut clock = Clock::new(Timer5::new(dp.TIMER5), CycleSpin, &TICKS);
//! clock.init();
//!
//! let start = clock.millis();
//! clock.wait_millis(50);
//! ```
//!
//! The rollover interrupt must call [`TickCounter::on_rollover`] on the same counter.

use super::{SpinDelay, TickCounter, TickSource};
use crate::config::{TICK_IRQ_PRIORITY, TIMER_PRESCALE, TIMER_RELOAD};

/// Lifecycle state of a [`Clock`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockState {
    /// Never initialized.
    Uninitialized,

    /// Counting.
    Running,

    /// Counter halted, count preserved.
    Paused,

    /// Counter halted, count reset and peripheral clock gated. Behaves like `Uninitialized`.
    Stopped,
}

/// Free-running software clock on top of a periodic countdown timer.
///
/// `S` is the hardware tick source, `D` the calibrated spin used by
/// [`Clock::wait_micros`]. The tick counter is borrowed because the rollover interrupt needs to
/// reach it too.
pub struct Clock<'a, S, D> {
    pub(super) source: S,
    pub(super) spin: D,
    pub(super) ticks: &'a TickCounter,
    state: ClockState,
}

impl<'a, S, D> Clock<'a, S, D>
where
    S: TickSource,
    D: SpinDelay,
{
    /// Wrap a tick source. Nothing is configured until [`Clock::init`].
    pub fn new(source: S, spin: D, ticks: &'a TickCounter) -> Self {
        Self {
            source,
            spin,
            ticks,
            state: ClockState::Uninitialized,
        }
    }

    /// Configure the tick source and start counting.
    ///
    /// A no-op while running; the accumulated count is not reset. From `Paused` this behaves like
    /// [`Clock::resume`]: reprogramming the interval load would reload the counter and drop the
    /// part of the period already counted.
    pub fn init(&mut self) {
        match self.state {
            ClockState::Running => return,
            ClockState::Paused => {
                self.resume();
                return;
            }
            ClockState::Uninitialized | ClockState::Stopped => {}
        }

        self.source.power_up();
        // Disable while configuring
        self.source.halt();
        self.source
            .configure(TIMER_RELOAD, TIMER_PRESCALE, TICK_IRQ_PRIORITY);
        self.source.start();

        debug!("clock: init from {}", self.state);
        self.state = ClockState::Running;
    }

    /// Halt the clock, reset elapsed time to zero and release the timer peripheral.
    ///
    /// The caller must make sure no other context is querying time meanwhile.
    pub fn stop(&mut self) {
        self.source.halt();
        self.ticks.reset();
        self.source.set_live(TIMER_RELOAD);
        self.source.power_down();

        debug!("clock: stop at {}", self.state);
        self.state = ClockState::Stopped;
    }

    /// Halt the counter. Elapsed time freezes until [`Clock::resume`].
    pub fn pause(&mut self) {
        self.source.halt();

        trace!("clock: pause");
        self.state = ClockState::Paused;
    }

    /// Restart the counter after [`Clock::pause`]. Does not reconfigure the timer.
    pub fn resume(&mut self) {
        debug_assert!(
            matches!(self.state, ClockState::Running | ClockState::Paused),
            "resume without init"
        );
        self.source.start();

        trace!("clock: resume");
        self.state = ClockState::Running;
    }

    #[inline]
    pub fn state(&self) -> ClockState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    /// Completed countdown periods since the last init/stop.
    #[inline]
    pub fn ticks(&self) -> u32 {
        self.ticks.get()
    }

    /// Whether the clock has never been started since power-on or the last [`Clock::stop`].
    #[inline]
    pub(super) fn needs_start(&self) -> bool {
        matches!(self.state, ClockState::Uninitialized | ClockState::Stopped)
    }

    /// Borrow the tick source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consume the clock and return the tick source and spin primitive.
    pub fn free(self) -> (S, D) {
        (self.source, self.spin)
    }
}
