// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Transmit-only USART used as the `log` sink.
//!
//! Watch the output through the ST-LINK virtual COM port:
//! ```text
//! $ screen /dev/tty.usbmodem* 115200
//! ```

use core::fmt;
use nb::block;

use crate::hw::logger::LineWriter;

use stm32f7xx_hal::{
    prelude::*,
    serial::{Instance, Pins, Serial, Tx},
};

/// Terminals expect CR before LF.
const LINE_END: &[u8] = b"\r\n";

pub struct Usart<U: Instance> {
    tx: Tx<U>,
}

impl<U: Instance> Usart<U> {
    /// Keep the TX half of `serial`; the receiver is dropped.
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> Self {
        let (tx, _) = serial.split();
        Self { tx }
    }

    /// Blocking write of raw bytes. Transmit errors are not recoverable here and are ignored.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            block!(self.tx.write(b)).ok();
        }
    }

    /// Wait for the shift register to empty.
    #[inline]
    pub fn flush(&mut self) {
        block!(self.tx.flush()).ok();
    }
}

impl<U: Instance> LineWriter for Usart<U> {
    fn end_line(&mut self) {
        self.write_bytes(LINE_END);
    }
}

impl<U: Instance> fmt::Write for Usart<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_bytes(s.as_bytes());
        Ok(())
    }
}
