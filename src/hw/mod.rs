// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! MCU-level wrappers.
//!
//! The bit-banged buses and the LED are generic over `embedded-hal` pin traits and build on any
//! target. Everything that touches STM32 peripherals directly is only built for the MCU.

pub mod i2c;
pub mod led;
pub mod logger;
pub mod spi;

#[cfg(target_os = "none")]
pub mod pins;
#[cfg(target_os = "none")]
pub mod usart;
#[cfg(target_os = "none")]
pub mod watchdog;

pub use i2c::I2cBus;
pub use led::Led;
pub use spi::ChipSelect;
pub use spi::SpiBus;
#[cfg(target_os = "none")]
pub use usart::Usart;
