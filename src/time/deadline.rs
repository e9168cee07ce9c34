// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Millisecond timeouts for polling loops (drive-until-bump, wait-for-ping, ...).

use super::{Clock, SpinDelay, TickSource};

/// A point in time a fixed number of milliseconds after it was armed.
///
/// Compares elapsed time rather than absolute clock values, so it stays correct when the
/// millisecond count wraps.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Deadline {
    start_ms: u32,
    timeout_ms: u32,
}

impl Deadline {
    /// Arm a deadline `timeout_ms` from now.
    pub fn after_millis<S, D>(clock: &Clock<'_, S, D>, timeout_ms: u32) -> Self
    where
        S: TickSource,
        D: SpinDelay,
    {
        Self {
            start_ms: clock.millis(),
            timeout_ms,
        }
    }

    pub fn is_expired<S, D>(&self, clock: &Clock<'_, S, D>) -> bool
    where
        S: TickSource,
        D: SpinDelay,
    {
        clock.millis_since(self.start_ms) >= self.timeout_ms
    }

    /// Milliseconds left, zero once expired.
    pub fn remaining_millis<S, D>(&self, clock: &Clock<'_, S, D>) -> u32
    where
        S: TickSource,
        D: SpinDelay,
    {
        self.timeout_ms
            .saturating_sub(clock.millis_since(self.start_ms))
    }

    #[inline]
    pub fn timeout_millis(&self) -> u32 {
        self.timeout_ms
    }
}
