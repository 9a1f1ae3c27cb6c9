use std::ops::{Add, Mul, Neg, Sub};

use crate::math::{EuclidVector, Point};

/// A displacement in two-dimensional space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The vector pointing from `start` to `end`.
    pub fn between(start: Point, end: Point) -> Self {
        Self::new(end.x - start.x, end.y - start.y)
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// This vector scaled to unit length, or the zero vector if it has no length.
    pub fn normalized(&self) -> Self {
        let length = self.length();
        if length == 0.0 {
            return Self::ZERO;
        }
        Self::new(self.x / length, self.y / length)
    }

    pub fn dot(&self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The z component of the three-dimensional cross product.
    pub fn cross(&self, other: Vector2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// This vector rotated a quarter turn counter-clockwise.
    pub fn perpendicular(&self) -> Self {
        Self::new(-self.y, self.x)
    }
}

impl From<Point> for Vector2 {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vector2> for Point {
    fn from(v: Vector2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<EuclidVector> for Vector2 {
    fn from(v: EuclidVector) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for EuclidVector {
    fn from(v: Vector2) -> Self {
        EuclidVector::new(v.x, v.y)
    }
}

impl Add for Vector2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vector2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point;

    #[test]
    fn length_between_points() {
        let v = Vector2::between(point(1.0, 1.0), point(4.0, 5.0));
        assert_eq!(v, Vector2::new(3.0, 4.0));
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    fn products() {
        let a = Vector2::new(1.0, 0.0);
        let b = Vector2::new(0.0, 1.0);
        assert_eq!(a.dot(b), 0.0);
        assert_eq!(a.cross(b), 1.0);
        assert_eq!(a.perpendicular(), b);
    }

    #[test]
    fn normalize_zero_vector() {
        assert_eq!(Vector2::ZERO.normalized(), Vector2::ZERO);
        assert_eq!(Vector2::new(0.0, -3.0).normalized(), Vector2::new(0.0, -1.0));
    }
}
