// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Simulation
//!
//! Integer physics for the tilt-ball demo, independent of any hardware.
//!
//! ## Modules
//!
//! - [`vector`] - 2D integer vector arithmetic.
//! - [`drawable`] - Rectangle state, overlap test and the closed set of drawable kinds.
//! - [`ball`] - Drag-damped, edge-clamped ball.
//! - [`wall`] - Static obstacle with a bounce vector.
//! - [`sink`] - Display contract the drawables render to.
//! - [`tilt`] - Sensor contract and tilt-to-steering mapping.
//! - [`scene`] - Per-frame sense/update/draw loop body.

pub mod ball;
pub mod drawable;
pub mod scene;
pub mod sink;
pub mod tilt;
pub mod vector;
pub mod wall;

pub use ball::{Ball, Damping};
pub use drawable::{Body, Drawable, EntityId};
pub use scene::{Scene, TickError};
pub use sink::{Buffering, DisplaySink, Glyph};
pub use tilt::TiltSensor;
pub use vector::Vector;
pub use wall::Wall;
