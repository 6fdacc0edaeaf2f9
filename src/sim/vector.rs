// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! 2D integer vector used for screen positions, sizes and velocities.
//!
//! All operations are componentwise. Division never panics: a zero divisor leaves the affected
//! component(s) unchanged.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0, 0);
    pub const ONE: Vector = Vector::new(1, 1);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True if either component is smaller than the matching component of `other`.
    ///
    /// This is not an ordering: `a.any_lt(b)` and `b.any_lt(a)` can both hold.
    #[inline]
    pub fn any_lt(self, other: Vector) -> bool {
        self.x < other.x || self.y < other.y
    }

    /// True if either component is larger than the matching component of `other`.
    #[inline]
    pub fn any_gt(self, other: Vector) -> bool {
        self.x > other.x || self.y > other.y
    }

    /// Clamp each component into `[min, max]`.
    #[inline]
    pub fn clamp(self, min: Vector, max: Vector) -> Vector {
        Vector::new(self.x.clamp(min.x, max.x), self.y.clamp(min.y, max.y))
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Vector {
    type Output = Vector;

    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector {
    #[inline]
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<i32> for Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, rhs: i32) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}

impl MulAssign<i32> for Vector {
    #[inline]
    fn mul_assign(&mut self, rhs: i32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

/// Componentwise product, used to apply per-axis bounce factors.
impl Mul for Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, rhs: Vector) -> Vector {
        Vector::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl MulAssign for Vector {
    #[inline]
    fn mul_assign(&mut self, rhs: Vector) {
        self.x *= rhs.x;
        self.y *= rhs.y;
    }
}

/// Integer division truncating toward zero. Dividing by zero returns the vector unchanged.
impl Div<i32> for Vector {
    type Output = Vector;

    #[inline]
    fn div(self, rhs: i32) -> Vector {
        if rhs == 0 {
            return self;
        }
        Vector::new(self.x / rhs, self.y / rhs)
    }
}

impl DivAssign<i32> for Vector {
    #[inline]
    fn div_assign(&mut self, rhs: i32) {
        *self = *self / rhs;
    }
}

/// Componentwise division. A zero divisor component leaves that component unchanged.
impl Div for Vector {
    type Output = Vector;

    #[inline]
    fn div(self, rhs: Vector) -> Vector {
        let x = if rhs.x == 0 { self.x } else { self.x / rhs.x };
        let y = if rhs.y == 0 { self.y } else { self.y / rhs.y };
        Vector::new(x, y)
    }
}
