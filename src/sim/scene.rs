// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Fixed set of drawables advanced together, one frame per [`Scene::tick`].
//!
//! Typical usage pattern:
//!
//! ```ignore
//! let mut scene = Scene::new([Ball::new(EntityId(0), BALL_START).into()]);
//!
//! loop {
//!     if let Err(e) = scene.tick(&mut mpu, &mut oled) {
//!         // sensor or display unavailable, try again next frame
//!     }
//! }
//! ```

use log::debug;

use crate::sim::drawable::{Drawable, EntityId};
use crate::sim::sink::DisplaySink;
use crate::sim::tilt::{self, TiltSensor};
use crate::sim::Vector;

/// Why a frame was not completed.
#[derive(Debug, Eq, PartialEq)]
pub enum TickError<S, D> {
    /// The sensor could not be read. Nothing moved.
    Sensor(S),
    /// The frame was simulated but could not be shown.
    Display(D),
}

pub struct Scene<const N: usize> {
    drawables: [Drawable; N],
}

impl<const N: usize> Scene<N> {
    /// Take ownership of `drawables`. Each one is re-identified by its index in the array, so
    /// the ids given at construction do not have to be unique.
    pub fn new(mut drawables: [Drawable; N]) -> Self {
        debug_assert!(N <= usize::from(u8::MAX) + 1, "more drawables than entity ids");
        for (i, drawable) in drawables.iter_mut().enumerate() {
            drawable.set_id(EntityId(i as u8));
        }
        Self { drawables }
    }

    #[inline]
    pub fn drawables(&self) -> &[Drawable; N] {
        &self.drawables
    }

    /// Sense, simulate, draw and present one frame.
    pub fn tick<S, D>(
        &mut self,
        sensor: &mut S,
        sink: &mut D,
    ) -> Result<(), TickError<S::Error, D::Error>>
    where
        S: TiltSensor,
        D: DisplaySink,
    {
        sensor.read_values().map_err(TickError::Sensor)?;

        let steering = tilt::steering(sensor.pitch(), sensor.roll());
        self.step(steering);

        self.draw(sink).map_err(TickError::Display)
    }

    /// Update every drawable, then let every ordered pair interact once.
    pub fn step(&mut self, steering: Vector) {
        for drawable in self.drawables.iter_mut() {
            drawable.update(steering);
        }

        for i in 0..N {
            for j in 0..N {
                if i == j {
                    continue;
                }
                let other = self.drawables[j].body();
                self.drawables[i].interact(&other);
            }
        }
    }

    /// Stage every drawable and present the frame.
    pub fn draw<D: DisplaySink>(&self, sink: &mut D) -> Result<(), D::Error> {
        for drawable in self.drawables.iter() {
            drawable.draw(sink)?;
        }
        sink.flush()
    }

    /// Stage and present the first frame without moving anything.
    pub fn present<D: DisplaySink>(&self, sink: &mut D) -> Result<(), D::Error> {
        debug!("presenting {} drawables", N);
        self.draw(sink)
    }
}
