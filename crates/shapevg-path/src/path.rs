mod builder;
mod shapes;

pub use builder::{Closed, Drawing, Empty, PathBuilder};

use std::ops::Add;

use shapevg_core::math::Transform;
use shapevg_core::{Angle, Point, Rectangle};
use shapevg_geometry::Polygon;

use crate::bezier::{BezierCurve, Order};
use crate::element::PathElement;
use builder::Accumulator;

/// An immutable sequence of connected or disconnected Bezier curves.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    curves: Vec<BezierCurve>,
}

impl Path {
    /// The empty path.
    pub const fn new() -> Self {
        Self { curves: Vec::new() }
    }

    pub fn builder() -> PathBuilder {
        PathBuilder::new()
    }

    pub fn from_curves(curves: Vec<BezierCurve>) -> Self {
        Self { curves }
    }

    /// Replays drawing commands into a path.
    ///
    /// A `Line` back to the start of its subpath is treated as a `Close`.
    /// The sequence must start with a `Move`, otherwise the empty path is
    /// returned.
    pub fn from_elements(elements: &[PathElement]) -> Self {
        match elements.first() {
            Some(PathElement::Move(_)) => {}
            Some(first) => {
                log::warn!("path elements must start with a move, found {:?}", first);
                return Self::new();
            }
            None => {
                log::warn!("cannot build a path from an empty element sequence");
                return Self::new();
            }
        }

        let mut inner = Accumulator::default();
        for element in elements {
            match *element {
                PathElement::Move(p) => inner.move_to(p),
                PathElement::Line(p) if p == inner.subpath_start() => inner.close(),
                PathElement::Line(p) => inner.line_to(p),
                PathElement::QuadCurve(p, control) => inner.quad_curve_to(p, control),
                PathElement::Curve(p, c1, c2) => inner.curve_to(p, c1, c2),
                PathElement::Close => inner.close(),
            }
        }
        inner.build()
    }

    /// The drawing commands that rebuild this path.
    ///
    /// A `Move` is emitted whenever a curve does not continue from the
    /// previous one, and straight lines back to the subpath start become
    /// `Close`.
    pub fn elements(&self) -> Vec<PathElement> {
        let mut elements = Vec::with_capacity(self.curves.len() + 1);
        let mut subpath_start = Point::ZERO;
        let mut current: Option<Point> = None;

        for curve in &self.curves {
            if current != Some(curve.start()) {
                subpath_start = curve.start();
                elements.push(PathElement::Move(subpath_start));
            }

            let points = curve.points();
            let element = match curve.order() {
                Order::Linear if curve.end() == subpath_start => PathElement::Close,
                Order::Linear => PathElement::Line(points[1]),
                Order::Quadratic => PathElement::QuadCurve(points[2], points[1]),
                Order::Cubic => PathElement::Curve(points[3], points[1], points[2]),
            };

            // A closed subpath has to be reopened before drawing continues.
            current = match element {
                PathElement::Close => None,
                _ => Some(curve.end()),
            };
            elements.push(element);
        }

        elements
    }

    pub fn curves(&self) -> &[BezierCurve] {
        &self.curves
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Returns `true` if the path consists only of straight lines.
    pub fn is_shape(&self) -> bool {
        self.curves.iter().all(|c| c.order() == Order::Linear)
    }

    /// The union of the bounding boxes of every curve, or
    /// [`Rectangle::ZERO`] for the empty path.
    pub fn axis_aligned_bounding_box(&self) -> Rectangle {
        Rectangle::non_empty_union(self.curves.iter().map(BezierCurve::axis_aligned_bounding_box))
            .unwrap_or(Rectangle::ZERO)
    }

    /// Like [`Path::axis_aligned_bounding_box`] but exact for curved segments.
    pub fn tight_bounding_box(&self) -> Rectangle {
        Rectangle::non_empty_union(self.curves.iter().map(BezierCurve::tight_bounding_box))
            .unwrap_or(Rectangle::ZERO)
    }

    /// The polygon through the flattened curves.
    ///
    /// Each curve contributes all of its sampled points but the last, which
    /// the next curve starts with. The final curve contributes all of them.
    pub fn simplified(&self, segments: usize) -> Polygon {
        let Some((last, rest)) = self.curves.split_last() else {
            return Polygon::default();
        };

        let mut points: Vec<Point> = rest
            .iter()
            .flat_map(|curve| {
                let mut flattened = curve.simplified(segments);
                flattened.pop();
                flattened
            })
            .collect();
        points.extend(last.simplified(segments));

        if points.len() == 2 {
            points.push(points[0]);
        }

        Polygon::new(points)
    }

    pub fn translated(&self, by: Point) -> Self {
        self.map(|c| c.translated(by))
    }

    pub fn translated_by(&self, x: f64, y: f64) -> Self {
        self.map(|c| c.translated_by(x, y))
    }

    pub fn scaled(&self, amount: f64, reference: Point) -> Self {
        self.map(|c| c.scaled(amount, reference))
    }

    pub fn rotated(&self, angle: Angle, reference: Point) -> Self {
        self.map(|c| c.rotated(angle, reference))
    }

    pub fn transformed(&self, transform: &Transform) -> Self {
        self.map(|c| c.transformed(transform))
    }

    fn map(&self, f: impl Fn(&BezierCurve) -> BezierCurve) -> Self {
        Self {
            curves: self.curves.iter().map(f).collect(),
        }
    }
}

/// Concatenates the curves of both paths.
impl Add for Path {
    type Output = Path;

    fn add(mut self, rhs: Path) -> Path {
        self.curves.extend(rhs.curves);
        self
    }
}

impl From<&[PathElement]> for Path {
    fn from(elements: &[PathElement]) -> Self {
        Self::from_elements(elements)
    }
}

impl From<&Path> for lyon::path::Path {
    fn from(path: &Path) -> Self {
        let p = |p: Point| lyon::math::point(p.x as f32, p.y as f32);

        let mut raw = lyon::path::Path::builder();
        // (subpath start, current point)
        let mut subpath: Option<(Point, Point)> = None;

        for curve in path.curves() {
            let start = match subpath {
                Some((start, current)) if current == curve.start() => start,
                Some((start, current)) => {
                    raw.end(start == current);
                    let _ = raw.begin(p(curve.start()));
                    curve.start()
                }
                None => {
                    let _ = raw.begin(p(curve.start()));
                    curve.start()
                }
            };

            match *curve.points() {
                [_, to] => {
                    let _ = raw.line_to(p(to));
                }
                [_, ctrl, to] => {
                    let _ = raw.quadratic_bezier_to(p(ctrl), p(to));
                }
                [_, ctrl1, ctrl2, to] => {
                    let _ = raw.cubic_bezier_to(p(ctrl1), p(ctrl2), p(to));
                }
                _ => {}
            }

            subpath = Some((start, curve.end()));
        }

        if let Some((start, current)) = subpath {
            raw.end(start == current);
        }

        raw.build()
    }
}

impl From<Path> for lyon::path::Path {
    fn from(path: Path) -> Self {
        Self::from(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapevg_core::math::{approx_eq, point, rect};

    fn sample_elements() -> Vec<PathElement> {
        vec![
            PathElement::Move(point(0.0, 0.0)),
            PathElement::Line(point(10.0, 0.0)),
            PathElement::QuadCurve(point(10.0, 10.0), point(15.0, 5.0)),
            PathElement::Close,
            PathElement::Move(point(20.0, 20.0)),
            PathElement::Curve(point(30.0, 20.0), point(22.0, 25.0), point(28.0, 25.0)),
        ]
    }

    #[test]
    fn builder_and_elements_round_trip() {
        let built = Path::builder()
            .move_to(point(0.0, 0.0))
            .line_to(point(10.0, 0.0))
            .quad_curve_to(point(10.0, 10.0), point(15.0, 5.0))
            .close()
            .move_to(point(20.0, 20.0))
            .curve_to(point(30.0, 20.0), point(22.0, 25.0), point(28.0, 25.0))
            .build();

        assert_eq!(built.elements(), sample_elements());
        assert_eq!(Path::from_elements(&sample_elements()), built);
    }

    #[test]
    fn line_to_subpath_start_is_a_close() {
        let elements = [
            PathElement::Move(point(0.0, 0.0)),
            PathElement::Line(point(1.0, 0.0)),
            PathElement::Line(point(1.0, 1.0)),
            PathElement::Line(point(0.0, 0.0)),
        ];
        let path = Path::from_elements(&elements);
        assert_eq!(path.curves().len(), 3);
        assert_eq!(path.elements().last(), Some(&PathElement::Close));
    }

    #[test]
    fn elements_must_start_with_move() {
        assert!(Path::from_elements(&[]).is_empty());
        assert!(Path::from_elements(&[
            PathElement::Line(point(1.0, 1.0)),
            PathElement::Line(point(2.0, 1.0)),
        ])
        .is_empty());
    }

    #[test]
    fn drawing_after_close_reopens_the_subpath() {
        let elements = [
            PathElement::Move(point(0.0, 0.0)),
            PathElement::Line(point(1.0, 0.0)),
            PathElement::Close,
            PathElement::Line(point(0.0, 1.0)),
        ];
        let path = Path::from_elements(&elements);
        assert_eq!(path.curves().len(), 3);
        assert_eq!(
            path.elements(),
            vec![
                PathElement::Move(point(0.0, 0.0)),
                PathElement::Line(point(1.0, 0.0)),
                PathElement::Close,
                PathElement::Move(point(0.0, 0.0)),
                PathElement::Line(point(0.0, 1.0)),
            ]
        );
        assert_eq!(Path::from_elements(&path.elements()), path);
    }

    #[test]
    fn shape_detection() {
        let lines = Path::from_elements(&sample_elements()[..2]);
        assert!(lines.is_shape());
        assert!(!Path::from_elements(&sample_elements()).is_shape());
    }

    #[test]
    fn bounding_box_spans_every_curve() {
        let path = Path::from_elements(&sample_elements());
        let bbox = path.axis_aligned_bounding_box();
        assert_eq!(bbox.min_x(), 0.0);
        assert_eq!(bbox.min_y(), 0.0);
        assert_eq!(bbox.max_x(), 30.0);
        assert!(approx_eq(bbox.max_y(), 23.75, 1e-9));

        assert_eq!(Path::new().axis_aligned_bounding_box(), Rectangle::ZERO);
    }

    #[test]
    fn simplified_drops_shared_endpoints() {
        let square = Path::rectangle(&rect(0.0, 0.0, 2.0, 2.0));
        let polygon = square.simplified(10);
        // Four corners plus the closing corner repeated by the final curve.
        assert_eq!(polygon.area(), 4.0);

        let segment = Path::builder()
            .move_to(point(0.0, 0.0))
            .line_to(point(1.0, 0.0))
            .build();
        let degenerate = segment.simplified(10);
        assert_eq!(degenerate.area(), 0.0);
    }

    #[test]
    fn concatenation() {
        let a = Path::from_elements(&sample_elements()[..2]);
        let b = Path::from_elements(&sample_elements()[4..]);
        let sum = a.clone() + b.clone();
        assert_eq!(sum.curves().len(), a.curves().len() + b.curves().len());
        assert_eq!(sum.curves()[1], b.curves()[0]);
    }

    #[test]
    fn transforms_apply_to_every_curve() {
        let path = Path::from_elements(&sample_elements());
        let moved = path.translated(point(5.0, -5.0));
        assert_eq!(moved.curves()[0].start(), point(5.0, -5.0));
        assert_eq!(
            path.translated_by(5.0, -5.0),
            moved,
        );
        let doubled = path.scaled(2.0, Point::ZERO);
        assert_eq!(doubled.curves()[0].end(), point(20.0, 0.0));
    }

    #[test]
    fn converts_into_lyon_path() {
        let path = Path::from_elements(&sample_elements());
        let raw: lyon::path::Path = (&path).into();

        let events: Vec<_> = raw.iter().collect();
        let begins = events
            .iter()
            .filter(|e| matches!(e, lyon::path::Event::Begin { .. }))
            .count();
        assert_eq!(begins, 2);
        assert!(events.iter().any(|e| matches!(
            e,
            lyon::path::Event::End { close: true, .. }
        )));
        assert!(events.iter().any(|e| matches!(e, lyon::path::Event::Cubic { .. })));
    }
}
