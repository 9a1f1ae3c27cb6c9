use shapevg_core::{Point, Rectangle, Size};

/// An axis-aligned ellipse.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipse {
    pub center: Point,
    pub size: Size,
}

impl Ellipse {
    pub const fn new(center: Point, size: Size) -> Self {
        Self { center, size }
    }

    /// The ellipse inscribed in `rect`.
    pub fn inscribed(rect: &Rectangle) -> Self {
        Self::new(rect.center(), rect.size)
    }

    pub fn circle(center: Point, radius: f64) -> Self {
        Self::new(center, Size::new(2.0 * radius, 2.0 * radius))
    }
}
