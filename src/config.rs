// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Compile-time constants for the tilt-ball demo.

use crate::sim::Vector;

// Display
pub const SCREEN_WIDTH: i32 = 128;
pub const SCREEN_HEIGHT: i32 = 64;

// Ball
pub const BALL_RADIUS: i32 = 4;
/// One pixel larger than the drawn radius so touching counts as overlapping.
pub const BALL_HITBOX_RADIUS: i32 = 5;
pub const BALL_START: Vector = Vector::new(64, 32);

/// Inclusive bounds of the ball's top-left corner.
pub const PLAYFIELD_MIN: Vector = Vector::new(BALL_RADIUS, BALL_RADIUS);
pub const PLAYFIELD_MAX: Vector = Vector::new(
    SCREEN_WIDTH - 1 - 2 * BALL_RADIUS,
    SCREEN_HEIGHT - 1 - 2 * BALL_RADIUS,
);

// Drag: velocity is multiplied by NUMERATOR / DENOMINATOR every tick
pub const DRAG_NUMERATOR: i32 = 100;
pub const DRAG_DENOMINATOR: i32 = 101;

/// Degrees of tilt per unit of steering.
pub const TILT_SCALE: f32 = 8.0;

// MPU-6050
pub const CALIBRATION_SAMPLES: u16 = 1000;

// Bit-banged I2C
pub const I2C_HALF_PERIOD_US: u32 = 5;
/// Half periods to wait for a slave to release SCL before giving up.
pub const I2C_STRETCH_LIMIT: u32 = 1_000;

// Debug output
pub const USART_BAUD: u32 = 115_200;
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playfield_bounds() {
        assert_eq!(PLAYFIELD_MIN, Vector::new(4, 4));
        assert_eq!(PLAYFIELD_MAX, Vector::new(119, 55));
    }
}
