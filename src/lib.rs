// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Tiltball Firmware
//!
//! A ball rolls around a 128×64 OLED, steered by tilting the board. Tilt comes from an MPU-6050
//! on a bit-banged I2C bus; the picture goes to an SSD1306 on a bit-banged SPI bus. Targets the
//! STM32F767ZI Nucleo board.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | MCU-level wrappers: bit-banged I2C/SPI, LEDs, USART logging, pins |
//! | [`drivers`] | Device-level drivers (MPU-6050, SSD1306) |
//! | [`sim`] | Vector math, ball physics, collisions and the per-frame loop |
//! | [`config`] | Screen geometry, physics and bus constants |
//!
//! ## Getting Started
//!
//! Run the host-side tests:
//!
//! ```bash
//! cargo test --lib
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo flash
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod drivers;
pub mod hw;
pub mod sim;
