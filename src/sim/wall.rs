// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Static obstacle. Balls that hit it have their velocity multiplied by its bounce vector.

use core::iter;

use crate::sim::drawable::{Body, EntityId};
use crate::sim::sink::{Buffering, DisplaySink, Glyph};
use crate::sim::Vector;

#[derive(Clone, Debug)]
pub struct Wall {
    body: Body,
}

impl Wall {
    /// Walls are at least one glyph wide and tall; smaller sizes are grown to 8.
    pub fn new(id: EntityId, location: Vector, size: Vector, bounce: Vector) -> Self {
        let min = Vector::new(Glyph::SIZE, Glyph::SIZE);
        let size = size.clamp(min, Vector::new(i32::MAX, i32::MAX));
        Self {
            body: Body::new(id, location, size).with_bounce(bounce),
        }
    }

    #[inline]
    pub fn body(&self) -> &Body {
        &self.body
    }

    #[inline]
    pub(crate) fn set_id(&mut self, id: EntityId) {
        self.body.id = id;
    }

    /// Cover the wall's rectangle with solid tiles. The last tile on each axis is pulled back to
    /// end on the edge, overlapping its neighbour instead of spilling out.
    pub fn draw<S: DisplaySink>(&self, sink: &mut S) -> Result<(), S::Error> {
        let start = self.body.location;
        let end = self.body.end();
        for y in tile_starts(start.y, end.y) {
            for x in tile_starts(start.x, end.x) {
                sink.write(Vector::new(x, y), &Glyph::SOLID, Buffering::Buffered)?;
            }
        }
        Ok(())
    }
}

/// Tile origins covering `start..end` exactly. Needs `end - start >= Glyph::SIZE`.
fn tile_starts(start: i32, end: i32) -> impl Iterator<Item = i32> {
    let last = end - Glyph::SIZE;
    (start..last)
        .step_by(Glyph::SIZE as usize)
        .chain(iter::once(last))
}
