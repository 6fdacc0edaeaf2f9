// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Watchdog control.
//!
//! The main loop never feeds a watchdog, so the window watchdog is stopped at boot by gating its
//! APB1 clock. The independent watchdog cannot be stopped once running; it stays off as long as
//! the `IWDG_SW` option bit is left at its default (software start).

use log::debug;
use stm32f7xx_hal::pac;

/// Stop the window watchdog (WWDG).
pub fn disable() {
    // Safe: single read-modify-write of one enable bit before any driver owns RCC.
    let rcc = unsafe { &*pac::RCC::ptr() };
    rcc.apb1enr.modify(|_, w| w.wwdgen().clear_bit());
    debug!("window watchdog clock gated");
}
