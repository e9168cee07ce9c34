// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Tick accumulator shared between the rollover interrupt and the main context.

use core::sync::atomic::{AtomicU32, Ordering};

use super::TickSource;

/// Number of completed countdown periods.
///
/// Only the rollover handler ([`TickCounter::on_rollover`]) increments it. [`super::Clock::stop`]
/// resets it while the counter is halted. Everything else only reads it, with the rollover
/// interrupt masked.
pub struct TickCounter {
    ticks: AtomicU32,
}

impl TickCounter {
    pub const fn new() -> Self {
        Self {
            ticks: AtomicU32::new(0),
        }
    }

    /// Rollover interrupt body: acknowledge the hardware, then count the period.
    ///
    /// Keep this the only thing the interrupt does. It must never call back into the query or wait
    /// APIs, which mask this very interrupt.
    #[inline]
    pub fn on_rollover<S: TickSource + ?Sized>(&self, source: &S) {
        source.ack_rollover();
        self.ticks.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn get(&self) -> u32 {
        self.ticks.load(Ordering::Relaxed)
    }

    #[inline]
    pub(crate) fn reset(&self) {
        self.ticks.store(0, Ordering::Relaxed);
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}
