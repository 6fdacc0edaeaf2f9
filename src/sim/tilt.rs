// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Sensor reader contract and the tilt-to-steering mapping.

use crate::config::TILT_SCALE;
use crate::sim::Vector;

/// Source of board tilt angles.
pub trait TiltSensor {
    type Error;

    /// Refresh the cached reading. On error the previous reading is kept.
    fn read_values(&mut self) -> Result<(), Self::Error>;

    /// Pitch in degrees, roughly `[-90, 90]`.
    fn pitch(&self) -> f32;

    /// Roll in degrees, roughly `[-90, 90]`.
    fn roll(&self) -> f32;
}

/// Map pitch/roll in degrees to a steering vector: `(pitch, roll) / TILT_SCALE`, truncated toward
/// zero. A NaN angle steers 0 on that axis.
pub fn steering(pitch: f32, roll: f32) -> Vector {
    Vector::new((pitch / TILT_SCALE) as i32, (roll / TILT_SCALE) as i32)
}
