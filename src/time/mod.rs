// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Portable Clock Core
//!
//! Hardware-independent part of the clock: everything here talks to the timer through
//! [`TickSource`] and to the core through [`SpinDelay`], so it runs unchanged against the TM4C123
//! TIMER5 driver and against a simulated timer on the host.
//!
//! ## Modules
//!
//! - [`source`] - Tick source trait (the hardware seam).
//! - [`ticks`] - Tick accumulator and rollover interrupt body.
//! - [`clock`] - Clock state object and init/stop/pause/resume.
//! - [`elapsed`] - Race-free microsecond/millisecond queries.
//! - [`wait`] - Calibrated busy-waits and the `embedded-hal` delay provider.
//! - [`deadline`] - Wrap-safe millisecond timeouts.

pub mod clock;
pub mod deadline;
pub mod elapsed;
pub mod source;
pub mod ticks;
pub mod wait;

pub use clock::{Clock, ClockState};
pub use deadline::Deadline;
pub use elapsed::Reading;
pub use source::TickSource;
pub use ticks::TickCounter;
pub use wait::SpinDelay;
