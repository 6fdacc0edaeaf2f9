// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! `log` backend that writes records to the debug USART.
//!
//! Each record is printed as `[LEVEL] target: message` followed by CRLF. On the MCU, writes happen
//! inside a critical section, so records from different call sites never interleave.

use core::fmt::{self, Write};

use log::Record;

/// Text output that knows how to end a line.
pub trait LineWriter: Write {
    fn end_line(&mut self);
}

/// Format one record as a single terminated line.
pub fn write_record<W: LineWriter>(out: &mut W, record: &Record) -> fmt::Result {
    write!(
        out,
        "[{}] {}: {}",
        record.level(),
        record.target(),
        record.args()
    )?;
    out.end_line();
    Ok(())
}

#[cfg(target_os = "none")]
pub use self::usart_logger::{init, UsartLogger};

#[cfg(target_os = "none")]
mod usart_logger {
    use core::cell::RefCell;

    use cortex_m::interrupt::{self, Mutex};
    use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
    use stm32f7xx_hal::pac::USART3;

    use super::write_record;
    use crate::hw::Usart;

    pub struct UsartLogger {
        usart: Mutex<RefCell<Option<Usart<USART3>>>>,
    }

    static LOGGER: UsartLogger = UsartLogger {
        usart: Mutex::new(RefCell::new(None)),
    };

    /// Route `log` output to `usart`, dropping records above `level`.
    ///
    /// Call once at startup; a second call returns the `log` crate's error.
    pub fn init(usart: Usart<USART3>, level: LevelFilter) -> Result<(), SetLoggerError> {
        interrupt::free(|cs| LOGGER.usart.borrow(cs).replace(Some(usart)));
        log::set_logger(&LOGGER)?;
        log::set_max_level(level);
        Ok(())
    }

    impl Log for UsartLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            interrupt::free(|cs| {
                if let Some(usart) = self.usart.borrow(cs).borrow_mut().as_mut() {
                    write_record(usart, record).ok();
                }
            });
        }

        fn flush(&self) {
            interrupt::free(|cs| {
                if let Some(usart) = self.usart.borrow(cs).borrow_mut().as_mut() {
                    usart.flush();
                }
            });
        }
    }
}
