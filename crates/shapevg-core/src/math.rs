pub use crate::angle::Angle;
pub use crate::point::Point;
pub use crate::rectangle::Rectangle;
pub use crate::size::Size;
pub use crate::vector::Vector2;

/// Tolerance used by approximate floating point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Alias for ```euclid::default::Point2D<f64>```
pub type EuclidPoint = euclid::default::Point2D<f64>;

/// Alias for ```euclid::default::Vector2D<f64>```
pub type EuclidVector = euclid::default::Vector2D<f64>;

/// Alias for ```euclid::default::Size2D<f64>```
pub type EuclidSize = euclid::default::Size2D<f64>;

/// Alias for ```euclid::default::Rect<f64>```
pub type EuclidRect = euclid::default::Rect<f64>;

/// An affine 2D transformation matrix.
///
/// Alias for ```euclid::default::Transform2D<f64>```
pub type Transform = euclid::default::Transform2D<f64>;

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub const fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Shorthand for `Vector2::new(x, y)`.
#[inline]
pub const fn vector(x: f64, y: f64) -> Vector2 {
    Vector2::new(x, y)
}

/// Shorthand for `Size::new(width, height)`.
#[inline]
pub const fn size(width: f64, height: f64) -> Size {
    Size::new(width, height)
}

/// Shorthand for `Rectangle::new(Point::new(x, y), Size::new(width, height))`.
#[inline]
pub const fn rect(x: f64, y: f64, width: f64, height: f64) -> Rectangle {
    Rectangle::new(Point::new(x, y), Size::new(width, height))
}

/// Shorthand for `Angle::radians(value)`.
#[inline]
pub const fn radians(radians: f64) -> Angle {
    Angle::radians(radians)
}

/// Shorthand for `Angle::degrees(value)`.
#[inline]
pub fn degrees(degrees: f64) -> Angle {
    Angle::degrees(degrees)
}

/// Returns `true` if `a` and `b` differ by no more than `epsilon`.
#[inline]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

/// Returns `true` if the two points differ by no more than `epsilon` on each axis.
#[inline]
pub fn approx_eq_point(a: Point, b: Point, epsilon: f64) -> bool {
    approx_eq(a.x, b.x, epsilon) && approx_eq(a.y, b.y, epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_constructors() {
        assert_eq!(point(1.0, 2.0), Point { x: 1.0, y: 2.0 });
        assert_eq!(rect(0.0, 1.0, 2.0, 3.0).max_y(), 4.0);
        assert_eq!(degrees(180.0), radians(std::f64::consts::PI));
    }

    #[test]
    fn approximate_comparison() {
        assert!(approx_eq(0.1 + 0.2, 0.3, EPSILON));
        assert!(!approx_eq(1.0, 1.1, 0.01));
        assert!(approx_eq_point(point(1.0, 1.0), point(1.0005, 0.9995), 0.001));
    }
}
