// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # CyBot Clock
//!
//! Software clock for the CyBot robot platform (TM4C123GH6PM), written in Rust.
//!
//! A 16-bit periodic countdown timer interrupts once per rollover; the clock accumulates those
//! rollovers and reconciles them with the live counter to give microsecond and millisecond uptime,
//! calibrated busy-waits and a pause/resume/stop lifecycle. The LCD, UART and movement code take
//! their delays and loop timeouts from here.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`time`] | Portable clock core (tick accounting, queries, waits, deadlines) |
//! | `hw` | TM4C123 TIMER5 tick source, cycle spin, debug console (target only) |
//! | [`config`] | Tick period, prescaler and spin calibration constants |
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Build the demo firmware:
//!
//! ```bash
//! cargo build --release --features firmware --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible to the modules below.
mod fmt;

pub mod config;
#[cfg(all(target_arch = "arm", target_os = "none"))]
pub mod hw;
pub mod time;

pub use time::{Clock, ClockState, Deadline, SpinDelay, TickCounter, TickSource};
