// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Debug console over a HAL UART transmitter.
//!
//! Prints uptime and counters from the firmware without pulling in a formatter for every number.
//!
//! Note: Bytes go straight to the transmitter, so the HAL newline mode does not apply. When using
//! `write!`, be sure to include `\r` (CR) in the format string.
//!
//! On the LaunchPad, UART0 is bridged to the debug USB port:
//! ```text
//! $ screen /dev/ttyACM0 115200
//! ```

use core::fmt;
use embedded_hal_02::serial::Write;
use nb::block;

pub struct Usart<TX> {
    tx: TX,
}

impl<TX: Write<u8>> Usart<TX> {
    pub fn new(tx: TX) -> Self {
        Self { tx }
    }

    /// Blocking write; transmit errors are dropped, the console is best effort.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            let _ = block!(self.tx.write(b));
        }
    }

    pub fn write_str(&mut self, s: &str) {
        self.write_bytes(s.as_bytes());
    }

    /// Write string and CRLF terminator.
    pub fn println(&mut self, s: &str) {
        self.write_bytes(s.as_bytes());
        self.write_bytes(b"\r\n");
    }

    /// Decimal, left-padded with zeros to at least `width` digits.
    fn write_decimal(&mut self, mut n: u32, width: usize) {
        let mut buf = [b'0'; 10];
        let mut i = buf.len();
        loop {
            i -= 1;
            buf[i] = b'0' + (n % 10) as u8;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        let first = i.min(buf.len().saturating_sub(width));
        self.write_bytes(&buf[first..]);
    }

    /// Print a microsecond count as `seconds.micros`, e.g. `12.000345`.
    pub fn print_micros(&mut self, micros: u32) {
        self.write_decimal(micros / 1_000_000, 1);
        self.write_bytes(b".");
        self.write_decimal(micros % 1_000_000, 6);
    }
}

impl<TX: Write<u8>> fmt::Write for Usart<TX> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Usart::write_str(self, s);
        Ok(())
    }
}
