// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Cycle-counted spin for [`Clock::wait_micros`](crate::time::Clock::wait_micros).

use crate::config::{CYCLES_PER_US, SPIN_LOOP_OVERHEAD_CYCLES};
use crate::time::SpinDelay;

/// Pads each loop iteration to [`CYCLES_PER_US`] core cycles.
///
/// Calibrated for [`SYSCLK_HZ`](crate::config::SYSCLK_HZ) with the release profile. Re-measure on a
/// scope after changing either.
#[derive(Copy, Clone, Debug, Default)]
pub struct CycleSpin;

impl SpinDelay for CycleSpin {
    #[inline(always)]
    fn spin_one_micro(&mut self) {
        cortex_m::asm::delay(CYCLES_PER_US - SPIN_LOOP_OVERHEAD_CYCLES);
    }
}
