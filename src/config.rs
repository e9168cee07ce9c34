// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Compile-time configuration for the CyBot clock.
//!
//! The defaults match a TM4C123GH6PM running from the 16 MHz precision internal oscillator, with
//! TIMER5A split to 16 bits and prescaled to one count per microsecond.
//!
//! The spin calibration constants at the bottom are tied to [`SYSCLK_HZ`]. Re-tune them whenever
//! the system clock changes.

/// Core clock frequency the spin calibration assumes (Hz).
pub const SYSCLK_HZ: u32 = 16_000_000;

/// Duration of one countdown period in microseconds.
///
/// The interval-load register is programmed with `TICK_PERIOD_US - 1`, and the counter runs from
/// that value down to zero, so one period is exactly this many counts.
pub const TICK_PERIOD_US: u32 = 64_999;

/// Value written to the interval-load register.
pub const TIMER_RELOAD: u32 = TICK_PERIOD_US - 1;

/// Prescaler value: the timer input is divided by `TIMER_PRESCALE + 1` (16 MHz / 16 = 1 MHz).
pub const TIMER_PRESCALE: u8 = 0x0F;

/// Width mask of the live countdown value. The upper bits of the raw register hold the prescaler
/// snapshot in 16-bit countdown mode.
pub const COUNTER_MASK: u32 = 0xFFFF;

/// NVIC priority of the rollover interrupt. TM4C123 implements 3 priority bits in the upper nibble,
/// so `7 << 5` is the lowest priority.
pub const TICK_IRQ_PRIORITY: u8 = 7 << 5;

/// Requests at or below this many microseconds return without spinning (call overhead, ~1.5 µs).
pub const WAIT_FLOOR_US: u32 = 2;

/// Core cycles in one microsecond.
pub const CYCLES_PER_US: u32 = SYSCLK_HZ / 1_000_000;

/// Cycles spent by the spin loop itself (load, compare, branch, decrement, store) per iteration.
///
/// Measured on hardware: 16 - 10 = 6 cycles of padding per microsecond.
pub const SPIN_LOOP_OVERHEAD_CYCLES: u32 = 10;

const _: () = assert!(TIMER_RELOAD <= COUNTER_MASK, "tick period does not fit the counter");
const _: () = assert!(CYCLES_PER_US > SPIN_LOOP_OVERHEAD_CYCLES);
