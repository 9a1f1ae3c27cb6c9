use shapevg_core::Point;

/// A single drawing command, as produced by a document parser.
///
/// Replaying a sequence of elements through [`Path::from_elements`] yields
/// the same curves as issuing the equivalent [`PathBuilder`] calls.
///
/// [`Path::from_elements`]: crate::Path::from_elements
/// [`PathBuilder`]: crate::PathBuilder
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathElement {
    /// Starts a new subpath at the point.
    Move(Point),
    /// A straight line to the point.
    Line(Point),
    /// A quadratic curve to the first point, bent toward the control point.
    QuadCurve(Point, Point),
    /// A cubic curve to the first point with two control points.
    Curve(Point, Point, Point),
    /// A straight line back to the start of the current subpath.
    Close,
}

impl PathElement {
    /// The point this element ends at, if it names one.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            Self::Move(p) | Self::Line(p) | Self::QuadCurve(p, _) | Self::Curve(p, _, _) => Some(p),
            Self::Close => None,
        }
    }
}
