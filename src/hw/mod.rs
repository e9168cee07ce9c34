// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # TM4C123 Bindings
//!
//! MCU-level pieces of the clock: the TIMER5A tick source, the cycle-counted spin, the process-wide
//! tick counter and the rollover interrupt body.
//!
//! The firmware binds the vector itself:
//!
//! ```ignore
//! #[interrupt]
//! fn TIMER5A() {
//!     cybot_clock::hw::on_timer5_rollover();
//! }
//! ```

pub mod spin;
pub mod timer5;
pub mod usart;

pub use spin::CycleSpin;
pub use timer5::Timer5;
pub use usart::Usart;

use crate::time::{Clock, TickCounter};

/// Completed TIMER5A periods. Shared by the rollover interrupt and the system clock.
pub static TICKS: TickCounter = TickCounter::new();

/// The CyBot system clock.
pub type SystemClock = Clock<'static, Timer5, CycleSpin>;

/// Build the system clock on TIMER5. Call [`Clock::init`] before using it.
pub fn system_clock(tim: tm4c123x_hal::tm4c123x::TIMER5) -> SystemClock {
    Clock::new(Timer5::new(tim), CycleSpin, &TICKS)
}

/// TIMER5A interrupt body: clear the timeout flag and count the period.
#[inline]
pub fn on_timer5_rollover() {
    // SAFETY: called from the TIMER5A handler only.
    let timer = unsafe { Timer5::for_isr() };
    TICKS.on_rollover(&timer);
}
