// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Positioned rectangles that can be drawn, stepped and collided.
//!
//! The set of drawable kinds is closed, so dispatch is a `match` over [`Drawable`] rather than a
//! trait object.

use crate::sim::sink::DisplaySink;
use crate::sim::{Ball, Vector, Wall};

/// Identity of a drawable within its scene.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct EntityId(pub u8);

/// Rectangle state shared by every drawable kind.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Body {
    pub id: EntityId,
    /// Top-left corner
    pub location: Vector,
    /// Width and height
    pub size: Vector,
    /// Per-axis factor applied to the velocity of anything that hits this body.
    pub bounce: Vector,
}

impl Body {
    /// Body with the default bounce `(1, 1)`, i.e. no inversion.
    pub fn new(id: EntityId, location: Vector, size: Vector) -> Self {
        Self {
            id,
            location,
            size,
            bounce: Vector::ONE,
        }
    }

    pub fn with_bounce(mut self, bounce: Vector) -> Self {
        self.bounce = bounce;
        self
    }

    /// One-past-the-end corner.
    #[inline]
    pub fn end(&self) -> Vector {
        self.location + self.size
    }

    /// Whether the half-open rectangles `[location, location + size)` intersect.
    pub fn overlaps(&self, other: &Body) -> bool {
        let (a0, a1) = (self.location, self.end());
        let (b0, b1) = (other.location, other.end());

        let x = within(a0.x, b0.x, b1.x) || within(b0.x, a0.x, a1.x);
        let y = within(a0.y, b0.y, b1.y) || within(b0.y, a0.y, a1.y);
        x && y
    }
}

/// `lo <= x < hi`
#[inline]
pub fn within(x: i32, lo: i32, hi: i32) -> bool {
    x >= lo && x < hi
}

/// Every kind of object the scene can hold.
#[derive(Clone, Debug)]
pub enum Drawable {
    Ball(Ball),
    Wall(Wall),
}

impl Drawable {
    #[inline]
    pub fn id(&self) -> EntityId {
        self.body().id
    }

    /// Overwrite the identity used by the self-interaction check.
    pub(crate) fn set_id(&mut self, id: EntityId) {
        match self {
            Drawable::Ball(ball) => ball.set_id(id),
            Drawable::Wall(wall) => wall.set_id(id),
        }
    }

    /// Collision rectangle.
    pub fn body(&self) -> Body {
        match self {
            Drawable::Ball(ball) => ball.hitbox(),
            Drawable::Wall(wall) => *wall.body(),
        }
    }

    pub fn overlaps(&self, other: &Drawable) -> bool {
        self.body().overlaps(&other.body())
    }

    /// Stage this drawable's pixels on `sink`.
    pub fn draw<S: DisplaySink>(&self, sink: &mut S) -> Result<(), S::Error> {
        match self {
            Drawable::Ball(ball) => ball.draw(sink),
            Drawable::Wall(wall) => wall.draw(sink),
        }
    }

    /// Advance one tick given the steering input. Static kinds ignore it.
    pub fn update(&mut self, steering: Vector) {
        match self {
            Drawable::Ball(ball) => ball.update(steering),
            Drawable::Wall(_) => {}
        }
    }

    /// Resolve a collision with `other`. Never reacts to its own body.
    pub fn interact(&mut self, other: &Body) {
        match self {
            Drawable::Ball(ball) => ball.interact(other),
            Drawable::Wall(_) => {}
        }
    }
}

impl From<Ball> for Drawable {
    fn from(ball: Ball) -> Self {
        Drawable::Ball(ball)
    }
}

impl From<Wall> for Drawable {
    fn from(wall: Wall) -> Self {
        Drawable::Wall(wall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Buffering, Glyph};
    use proptest::prelude::*;

    fn rect(x: i32, y: i32, w: i32, h: i32) -> Body {
        Body::new(EntityId(0), Vector::new(x, y), Vector::new(w, h))
    }

    proptest! {
        #[test]
        fn test_overlaps_is_symmetric(
            ax in -50i32..150, ay in -50i32..100, aw in 1i32..40, ah in 1i32..40,
            bx in -50i32..150, by in -50i32..100, bw in 1i32..40, bh in 1i32..40,
        ) {
            let a = rect(ax, ay, aw, ah);
            let b = rect(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn test_disjoint_x_projection_never_overlaps(
            ax in -50i32..150, ay in -50i32..100, aw in 1i32..40, ah in 1i32..40,
            gap in 0i32..20, by in -50i32..100, bw in 1i32..40, bh in 1i32..40,
        ) {
            let a = rect(ax, ay, aw, ah);
            let b = rect(ax + aw + gap, by, bw, bh);
            prop_assert!(!a.overlaps(&b));
            prop_assert!(!b.overlaps(&a));
        }
    }

    #[test]
    fn test_within_is_half_open() {
        assert!(within(0, 0, 4));
        assert!(within(3, 0, 4));
        assert!(!within(4, 0, 4));
        assert!(!within(-1, 0, 4));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = rect(0, 0, 10, 10);
        assert!(!a.overlaps(&rect(10, 0, 5, 5)));
        assert!(!a.overlaps(&rect(0, 10, 5, 5)));
        assert!(a.overlaps(&rect(9, 9, 5, 5)));
    }

    #[test]
    fn test_overlap_needs_both_axes() {
        let a = rect(0, 0, 10, 10);
        // x overlaps, y disjoint
        assert!(!a.overlaps(&rect(5, 20, 10, 10)));
        // y overlaps, x disjoint
        assert!(!a.overlaps(&rect(20, 5, 10, 10)));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = rect(0, 0, 20, 20);
        let inner = rect(5, 5, 2, 2);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    struct Count(usize);

    impl DisplaySink for Count {
        type Error = ();

        fn write(&mut self, _: Vector, _: &Glyph, _: Buffering) -> Result<(), ()> {
            self.0 += 1;
            Ok(())
        }

        fn flush(&mut self) -> Result<(), ()> {
            Ok(())
        }
    }

    #[test]
    fn test_draw_through_shared_reference() {
        let drawables: [Drawable; 2] = [
            Ball::new(EntityId(0), Vector::new(20, 20)).into(),
            Wall::new(EntityId(1), Vector::new(0, 0), Vector::new(8, 16), Vector::ONE).into(),
        ];
        let shared: &[Drawable] = &drawables;

        let mut sink = Count(0);
        for drawable in shared {
            drawable.draw(&mut sink).unwrap();
        }
        // Ball erases and draws, the wall is two tiles
        assert_eq!(sink.0, 4);
    }

    #[test]
    fn test_default_bounce_is_identity() {
        assert_eq!(rect(0, 0, 1, 1).bounce, Vector::ONE);
    }
}
