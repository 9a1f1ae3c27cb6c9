use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::math::{Angle, EuclidPoint, Transform};

/// A location in two-dimensional space.
///
/// Equality is exact floating point comparison.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point moved by the given offset.
    pub fn translated(self, by: Point) -> Self {
        self + by
    }

    /// Returns this point moved by the given `x` and `y` amounts.
    pub fn translated_by(self, x: f64, y: f64) -> Self {
        Self::new(self.x + x, self.y + y)
    }

    /// Returns this point scaled by `amount` relative to the `reference` point.
    pub fn scaled(self, amount: f64, reference: Point) -> Self {
        (self - reference) * amount + reference
    }

    /// Returns this point rotated counter-clockwise by `angle` around `reference`.
    pub fn rotated(self, angle: Angle, reference: Point) -> Self {
        let transform = Transform::translation(-reference.x, -reference.y)
            .then_rotate(angle.into())
            .then_translate(euclid::vec2(reference.x, reference.y));
        self.transformed(&transform)
    }

    /// Applies an affine transformation to this point.
    pub fn transformed(self, transform: &Transform) -> Self {
        transform.transform_point(self.into()).into()
    }

    /// The Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Linear interpolation toward `other`, where `t == 0.0` yields `self`.
    pub fn lerp(self, other: Point, t: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Point {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Point {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<EuclidPoint> for Point {
    fn from(p: EuclidPoint) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for EuclidPoint {
    fn from(p: Point) -> Self {
        EuclidPoint::new(p.x, p.y)
    }
}
