// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! This module contains device-specific drivers that sit above the raw `hw/` layer and below the
//! simulation.
//!
//! ## Existing drivers
//!
//! - [`mpu6050`] – InvenSense MPU-6050 accelerometer/gyro over I2C, exposed as a tilt sensor
//! - [`ssd1306`] – Solomon SSD1306 128×64 OLED over 4-wire SPI, exposed as a display sink

pub mod mpu6050;
pub mod ssd1306;

pub use mpu6050::Mpu6050;
pub use ssd1306::Ssd1306;
