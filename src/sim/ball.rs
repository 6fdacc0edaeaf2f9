// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Tilt-steered ball.
//!
//! Each tick the ball's velocity decays under drag, gains the steering input, moves the ball,
//! and is zeroed if the ball runs into the edge of the play-field. The previous screen position is
//! kept so the next draw can erase it.

use log::trace;

use crate::config::{
    BALL_HITBOX_RADIUS, BALL_RADIUS, DRAG_DENOMINATOR, DRAG_NUMERATOR, PLAYFIELD_MAX,
    PLAYFIELD_MIN,
};
use crate::sim::drawable::{Body, EntityId};
use crate::sim::sink::{Buffering, DisplaySink, Glyph};
use crate::sim::Vector;

/// Velocity decay applied at the start of every tick.
///
/// Integer division truncates toward zero, so with `Ratio { 100, 101 }` every nonzero component
/// loses at least one unit per tick and a ball without input always comes to rest.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Damping {
    /// `v * num / den`, multiply first.
    Ratio { num: i32, den: i32 },
    /// `v / 2`
    Halve,
}

impl Damping {
    #[inline]
    pub fn apply(self, v: Vector) -> Vector {
        match self {
            Damping::Ratio { num, den } => v * num / den,
            Damping::Halve => v / 2,
        }
    }
}

impl Default for Damping {
    #[cfg(not(feature = "halving-drag"))]
    fn default() -> Self {
        Damping::Ratio {
            num: DRAG_NUMERATOR,
            den: DRAG_DENOMINATOR,
        }
    }

    #[cfg(feature = "halving-drag")]
    fn default() -> Self {
        Damping::Halve
    }
}

#[derive(Clone, Debug)]
pub struct Ball {
    body: Body,
    direction: Vector,
    prev_location: Vector,
    damping: Damping,
}

impl Ball {
    /// Ball at rest with its glyph's top-left corner at `location`.
    pub fn new(id: EntityId, location: Vector) -> Self {
        let diameter = 2 * BALL_RADIUS;
        Self {
            body: Body::new(id, location, Vector::new(diameter, diameter)),
            direction: Vector::ZERO,
            prev_location: location,
            damping: Damping::default(),
        }
    }

    pub fn with_direction(mut self, direction: Vector) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_damping(mut self, damping: Damping) -> Self {
        self.damping = damping;
        self
    }

    #[inline]
    pub fn id(&self) -> EntityId {
        self.body.id
    }

    #[inline]
    pub fn location(&self) -> Vector {
        self.body.location
    }

    #[inline]
    pub fn prev_location(&self) -> Vector {
        self.prev_location
    }

    #[inline]
    pub fn direction(&self) -> Vector {
        self.direction
    }

    #[inline]
    pub fn damping(&self) -> Damping {
        self.damping
    }

    #[inline]
    pub(crate) fn set_id(&mut self, id: EntityId) {
        self.body.id = id;
    }

    /// Collision rectangle, one pixel larger than the glyph on every side.
    pub fn hitbox(&self) -> Body {
        let inflate = BALL_HITBOX_RADIUS - BALL_RADIUS;
        let side = 2 * BALL_HITBOX_RADIUS;
        Body {
            location: self.body.location - Vector::new(inflate, inflate),
            size: Vector::new(side, side),
            ..self.body
        }
    }

    /// Run one simulation tick with `steering` as the acceleration input.
    pub fn update(&mut self, steering: Vector) {
        self.direction = self.damping.apply(self.direction) + steering;

        self.prev_location = self.body.location;
        self.body.location += self.direction;

        let loc = self.body.location;
        if loc.any_lt(PLAYFIELD_MIN) || loc.any_gt(PLAYFIELD_MAX) {
            // Hitting any edge stops the ball dead on both axes
            self.body.location = loc.clamp(PLAYFIELD_MIN, PLAYFIELD_MAX);
            self.direction = Vector::ZERO;
            trace!("ball {} stopped at {}", self.body.id.0, self.body.location);
        }
    }

    /// Apply `other`'s bounce factor if the hit boxes overlap.
    pub fn interact(&mut self, other: &Body) {
        if other.id == self.body.id {
            return;
        }
        if self.hitbox().overlaps(other) {
            self.direction *= other.bounce;
            trace!("ball {} bounced off {}", self.body.id.0, other.id.0);
        }
    }

    /// Erase the previous frame's glyph and stage the new one.
    pub fn draw<S: DisplaySink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.write(self.prev_location, &Glyph::BLANK, Buffering::Buffered)?;
        sink.write(self.body.location, &Glyph::BALL, Buffering::Buffered)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATIO: Damping = Damping::Ratio {
        num: DRAG_NUMERATOR,
        den: DRAG_DENOMINATOR,
    };

    fn ball_at(x: i32, y: i32) -> Ball {
        Ball::new(EntityId(1), Vector::new(x, y)).with_damping(RATIO)
    }

    #[derive(Default)]
    struct Recorder {
        writes: Vec<(Vector, Glyph, Buffering)>,
    }

    impl DisplaySink for Recorder {
        type Error = ();

        fn write(&mut self, position: Vector, glyph: &Glyph, mode: Buffering) -> Result<(), ()> {
            self.writes.push((position, *glyph, mode));
            Ok(())
        }

        fn flush(&mut self) -> Result<(), ()> {
            Ok(())
        }
    }

    #[test]
    fn test_first_tick_from_rest() {
        let mut ball = ball_at(64, 32);
        ball.update(Vector::new(5, 5));

        assert_eq!(ball.direction(), Vector::new(5, 5));
        assert_eq!(ball.location(), Vector::new(69, 37));
        assert_eq!(ball.prev_location(), Vector::new(64, 32));
    }

    #[test]
    fn test_drag_truncates() {
        let mut ball = ball_at(64, 32).with_direction(Vector::new(10, -10));
        ball.update(Vector::ZERO);
        assert_eq!(ball.direction(), Vector::new(9, -9));
    }

    #[test]
    fn test_rest_state_is_stable() {
        let mut ball = ball_at(64, 32);
        for _ in 0..500 {
            ball.update(Vector::ZERO);
            assert_eq!(ball.direction(), Vector::ZERO);
            assert_eq!(ball.location(), Vector::new(64, 32));
        }
    }

    #[test]
    fn test_small_velocity_stalls_to_zero() {
        let mut ball = ball_at(64, 32).with_direction(Vector::new(1, -1));
        ball.update(Vector::ZERO);
        assert_eq!(ball.direction(), Vector::ZERO);
    }

    #[test]
    fn test_unit_input_holds_unit_velocity() {
        let mut ball = ball_at(64, 32);
        for _ in 0..10 {
            ball.update(Vector::new(1, 0));
            assert_eq!(ball.direction(), Vector::new(1, 0));
        }
        assert_eq!(ball.location(), Vector::new(74, 32));
    }

    #[test]
    fn test_halving_drag() {
        let mut ball = ball_at(64, 32)
            .with_damping(Damping::Halve)
            .with_direction(Vector::new(9, -9));
        ball.update(Vector::new(1, 1));
        assert_eq!(ball.direction(), Vector::new(5, -3));
    }

    #[test]
    fn test_clamp_zeroes_both_axes() {
        let mut ball = ball_at(125, 30).with_direction(Vector::new(3, 2));
        ball.update(Vector::ZERO);

        assert_eq!(ball.location().x, 119);
        // y was in bounds and keeps its move
        assert_eq!(ball.location().y, 31);
        assert_eq!(ball.direction(), Vector::ZERO);
    }

    #[test]
    fn test_clamp_lower_bounds() {
        let mut ball = ball_at(6, 6);
        ball.update(Vector::new(-5, -9));
        assert_eq!(ball.location(), Vector::new(4, 4));
        assert_eq!(ball.direction(), Vector::ZERO);
        assert_eq!(ball.prev_location(), Vector::new(6, 6));
    }

    #[test]
    fn test_location_always_in_playfield() {
        let mut ball = ball_at(64, 32);
        let inputs = [
            Vector::new(11, 0),
            Vector::new(11, 11),
            Vector::new(-11, 3),
            Vector::new(-11, -11),
            Vector::new(0, 11),
        ];
        for i in 0..200 {
            ball.update(inputs[i % inputs.len()]);
            let loc = ball.location();
            assert!(!loc.any_lt(PLAYFIELD_MIN) && !loc.any_gt(PLAYFIELD_MAX));
        }
    }

    #[test]
    fn test_self_interaction_is_noop() {
        let mut ball = ball_at(64, 32).with_direction(Vector::new(4, 4));
        let me = ball.hitbox().with_bounce(Vector::new(-1, -1));
        ball.interact(&me);
        assert_eq!(ball.direction(), Vector::new(4, 4));
    }

    #[test]
    fn test_bounce_on_overlap() {
        let mut ball = ball_at(64, 32).with_direction(Vector::new(4, 3));
        let wall = Body::new(EntityId(7), Vector::new(70, 0), Vector::new(8, 64))
            .with_bounce(Vector::new(-1, 1));
        ball.interact(&wall);
        assert_eq!(ball.direction(), Vector::new(-4, 3));
    }

    #[test]
    fn test_hitbox_margin_catches_touching_body() {
        // Glyph spans x 64..72, hit box spans 63..73
        let mut ball = ball_at(64, 32).with_direction(Vector::new(2, 0));
        let other = Body::new(EntityId(2), Vector::new(72, 32), Vector::new(4, 4))
            .with_bounce(Vector::new(-1, 1));
        ball.interact(&other);
        assert_eq!(ball.direction(), Vector::new(-2, 0));
    }

    #[test]
    fn test_no_bounce_without_overlap() {
        let mut ball = ball_at(20, 20).with_direction(Vector::new(2, 2));
        let far = Body::new(EntityId(2), Vector::new(100, 50), Vector::new(8, 8))
            .with_bounce(Vector::new(-1, -1));
        ball.interact(&far);
        assert_eq!(ball.direction(), Vector::new(2, 2));
    }

    #[test]
    fn test_draw_erases_previous_position() {
        let mut ball = ball_at(64, 32);
        ball.update(Vector::new(5, 5));

        let mut sink = Recorder::default();
        ball.draw(&mut sink).unwrap();

        assert_eq!(
            sink.writes,
            vec![
                (Vector::new(64, 32), Glyph::BLANK, Buffering::Buffered),
                (Vector::new(69, 37), Glyph::BALL, Buffering::Buffered),
            ]
        );
    }
}
