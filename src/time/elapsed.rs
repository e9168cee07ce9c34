// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Elapsed-time queries.
//!
//! The tick counter only moves once per period (~65 ms), so every query combines it with the live
//! countdown value. The rollover interrupt is masked around the read so the count cannot change
//! halfway through. If the counter rolled over after the mask took effect, the raw status flag is
//! set while the tick count is still stale; the reading is then pinned to the start of the next
//! period instead of pairing the stale count with a freshly reloaded counter.

use super::{Clock, SpinDelay, TickSource};
use crate::config::{COUNTER_MASK, TICK_PERIOD_US, TIMER_RELOAD};

/// One consistent sample of the clock.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Completed periods.
    pub periods: u32,
    /// Microseconds into the current period, in `0..TICK_PERIOD_US`.
    pub elapsed_us: u32,
}

impl Reading {
    /// Microseconds since init. Wraps after about 71 minutes.
    #[inline]
    pub fn as_micros(&self) -> u32 {
        self.periods
            .wrapping_mul(TICK_PERIOD_US)
            .wrapping_add(self.elapsed_us)
    }

    /// Milliseconds since init. Wraps after about 49 days.
    #[inline]
    pub fn as_millis(&self) -> u32 {
        let micros = u64::from(self.periods) * u64::from(TICK_PERIOD_US) + u64::from(self.elapsed_us);
        (micros / 1_000) as u32
    }
}

impl<'a, S, D> Clock<'a, S, D>
where
    S: TickSource,
    D: SpinDelay,
{
    /// Take a race-free sample of the tick count and the live counter.
    pub fn read(&self) -> Reading {
        self.source.mask_rollover();

        let live = self.source.live() & COUNTER_MASK;
        // Unconfigured hardware may hold anything up to the full counter width.
        debug_assert!(
            self.needs_start() || live <= TIMER_RELOAD,
            "live count {} above reload",
            live
        );
        let elapsed_us = TIMER_RELOAD.saturating_sub(live);

        let reading = if self.source.rollover_pending() {
            // Rolled over since the mask: the live value already belongs to the next period.
            Reading {
                periods: self.ticks.get().wrapping_add(1),
                elapsed_us: 0,
            }
        } else {
            Reading {
                periods: self.ticks.get(),
                elapsed_us,
            }
        };

        self.source.unmask_rollover();
        reading
    }

    /// Microseconds since the last init/stop. Wraps after about 71 minutes.
    ///
    /// Starts the clock if it has never been started (or was stopped).
    pub fn micros(&mut self) -> u32 {
        if self.needs_start() {
            debug!("clock: started on first micros()");
            self.init();
        }
        self.read().as_micros()
    }

    /// Milliseconds since the last init/stop. Wraps after about 49 days.
    ///
    /// Unlike [`Clock::micros`] this does not start the clock.
    pub fn millis(&self) -> u32 {
        self.read().as_millis()
    }

    /// Microseconds elapsed since an earlier [`Clock::micros`] value, correct across one wrap.
    pub fn micros_since(&mut self, start: u32) -> u32 {
        self.micros().wrapping_sub(start)
    }

    /// Milliseconds elapsed since an earlier [`Clock::millis`] value, correct across one wrap.
    pub fn millis_since(&self, start: u32) -> u32 {
        self.millis().wrapping_sub(start)
    }
}
