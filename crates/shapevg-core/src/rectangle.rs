use crate::insets::Insets;
use crate::math::{EuclidRect, Point, Size};

/// An axis-aligned rectangle.
///
/// The size may be negative on either axis, in which case the rectangle
/// extends from its origin in the negative direction. The `min_*` and
/// `max_*` accessors always resolve the actual extent.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    pub origin: Point,
    pub size: Size,
}

impl Rectangle {
    pub const ZERO: Self = Self::new(Point::ZERO, Size::ZERO);

    #[inline]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// The smallest rectangle containing both corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let min = Point::new(a.x.min(b.x), a.y.min(b.y));
        Self::new(
            min,
            Size::new((a.x - b.x).abs(), (a.y - b.y).abs()),
        )
    }

    /// The smallest rectangle containing every point, or `None` if there are
    /// no points.
    pub fn bounding<I: IntoIterator<Item = Point>>(points: I) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some(Self::from_corners(min, max))
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x.min(self.origin.x + self.size.width)
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x.max(self.origin.x + self.size.width)
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y.min(self.origin.y + self.size.height)
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y.max(self.origin.y + self.size.height)
    }

    pub fn mid_x(&self) -> f64 {
        self.origin.x + 0.5 * self.size.width
    }

    pub fn mid_y(&self) -> f64 {
        self.origin.y + 0.5 * self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    pub fn width(&self) -> f64 {
        self.size.width.abs()
    }

    pub fn height(&self) -> f64 {
        self.size.height.abs()
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.min_x(), self.max_y())
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.min_x(), self.min_y())
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.max_x(), self.min_y())
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.max_x(), self.max_y())
    }

    /// A rectangle with zero width or zero height is empty.
    pub fn is_empty(&self) -> bool {
        self.size.width == 0.0 || self.size.height == 0.0
    }

    /// The same area expressed with a non-negative size.
    pub fn normalized(&self) -> Self {
        Self::new(
            Point::new(self.min_x(), self.min_y()),
            Size::new(self.width(), self.height()),
        )
    }

    /// Returns `true` if the point lies inside or on the boundary.
    pub fn contains(&self, point: Point) -> bool {
        (self.min_x()..=self.max_x()).contains(&point.x)
            && (self.min_y()..=self.max_y()).contains(&point.y)
    }

    pub fn translated(&self, by: Point) -> Self {
        Self::new(self.origin + by, self.size)
    }

    /// Scales both the origin and the size.
    pub fn scaled(&self, amount: f64) -> Self {
        Self::new(self.origin * amount, self.size.scaled(amount))
    }

    /// The smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Rectangle) -> Self {
        Self::from_corners(
            Point::new(self.min_x().min(other.min_x()), self.min_y().min(other.min_y())),
            Point::new(self.max_x().max(other.max_x()), self.max_y().max(other.max_y())),
        )
    }

    /// The union of all rectangles, or `None` if the iterator is empty.
    pub fn non_empty_union<I: IntoIterator<Item = Rectangle>>(rects: I) -> Option<Self> {
        rects.into_iter().reduce(|acc, r| acc.union(&r))
    }

    /// Shrinks the rectangle by the given insets. The top inset applies to
    /// the maximum y edge.
    pub fn inset_by(&self, insets: Insets) -> Self {
        let n = self.normalized();
        Self::new(
            Point::new(n.origin.x + insets.left, n.origin.y + insets.bottom),
            Size::new(
                n.size.width - insets.left - insets.right,
                n.size.height - insets.top - insets.bottom,
            ),
        )
    }
}

impl From<EuclidRect> for Rectangle {
    fn from(r: EuclidRect) -> Self {
        Self::new(r.origin.into(), r.size.into())
    }
}

impl From<Rectangle> for EuclidRect {
    fn from(r: Rectangle) -> Self {
        let n = r.normalized();
        EuclidRect::new(n.origin.into(), n.size.into())
    }
}
