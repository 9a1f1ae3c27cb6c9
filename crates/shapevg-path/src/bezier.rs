use smallvec::SmallVec;

use shapevg_core::math::Transform;
use shapevg_core::{Angle, Point, Rectangle};
use shapevg_geometry::Segment;

use crate::error::CurveError;
use crate::roots::{self, Roots};

/// The default number of straight segments a curve is flattened into when
/// computing its bounding box.
pub const DEFAULT_BOUNDING_BOX_SEGMENTS: usize = 10;

/// The default number of chords summed when approximating arc length.
pub const DEFAULT_LENGTH_SAMPLES: usize = 100;

/// The degree of a [`BezierCurve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Order {
    Linear,
    Quadratic,
    Cubic,
}

/// The options used when approximating curves with straight segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApproxOpts {
    /// The number of segments a curve is flattened into before taking the
    /// min/max of its points.
    ///
    /// Defaults to `10`.
    pub bounding_box_segments: usize,

    /// The number of chords summed to approximate the arc length.
    ///
    /// Defaults to `100`.
    pub length_samples: usize,
}

impl Default for ApproxOpts {
    fn default() -> Self {
        Self::new()
    }
}

impl ApproxOpts {
    pub const fn new() -> Self {
        Self {
            bounding_box_segments: DEFAULT_BOUNDING_BOX_SEGMENTS,
            length_samples: DEFAULT_LENGTH_SAMPLES,
        }
    }

    /// The number of segments a curve is flattened into before taking the
    /// min/max of its points.
    ///
    /// Defaults to `10`.
    pub const fn bounding_box_segments(mut self, segments: usize) -> Self {
        self.bounding_box_segments = segments;
        self
    }

    /// The number of chords summed to approximate the arc length.
    ///
    /// Defaults to `100`.
    pub const fn length_samples(mut self, samples: usize) -> Self {
        self.length_samples = samples;
        self
    }
}

/// A linear, quadratic or cubic Bezier curve.
///
/// The first and last points are the endpoints, the ones in between are the
/// control points.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Point>", into = "Vec<Point>"))]
pub struct BezierCurve {
    points: SmallVec<[Point; 4]>,
}

impl BezierCurve {
    /// A straight line from `start` to `end`.
    pub fn linear(start: Point, end: Point) -> Self {
        Self {
            points: smallvec::smallvec![start, end],
        }
    }

    pub fn quadratic(start: Point, control: Point, end: Point) -> Self {
        Self {
            points: smallvec::smallvec![start, control, end],
        }
    }

    pub fn cubic(start: Point, control_1: Point, control_2: Point, end: Point) -> Self {
        Self {
            points: smallvec::smallvec![start, control_1, control_2, end],
        }
    }

    /// Creates a curve from its endpoints and control points.
    ///
    /// # Panics
    ///
    /// Panics if `points` does not hold 2, 3 or 4 points.
    pub fn from_points(points: &[Point]) -> Self {
        match Self::try_from_points(points) {
            Ok(curve) => curve,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_from_points(points: &[Point]) -> Result<Self, CurveError> {
        if !(2..=4).contains(&points.len()) {
            return Err(CurveError::InvalidPointCount {
                found: points.len(),
            });
        }
        Ok(Self {
            points: points.iter().copied().collect(),
        })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn order(&self) -> Order {
        match self.points.len() {
            2 => Order::Linear,
            3 => Order::Quadratic,
            _ => Order::Cubic,
        }
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Evaluates the curve at `t` in Bernstein form.
    pub fn point_at(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        match self.points.as_slice() {
            [p0, p1] => *p0 * mt + *p1 * t,
            [p0, p1, p2] => *p0 * (mt * mt) + *p1 * (2.0 * mt * t) + *p2 * (t * t),
            [p0, p1, p2, p3] => {
                *p0 * (mt * mt * mt)
                    + *p1 * (3.0 * mt * mt * t)
                    + *p2 * (3.0 * mt * t * t)
                    + *p3 * (t * t * t)
            }
            _ => unreachable!(),
        }
    }

    /// `segments + 1` evenly spaced points along the curve, from start to
    /// end.
    pub fn simplified(&self, segments: usize) -> Vec<Point> {
        if self.order() == Order::Linear {
            return self.points.to_vec();
        }
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.point_at(i as f64 / segments as f64))
            .collect()
    }

    /// The approximate arc length of the curve.
    pub fn length(&self) -> f64 {
        self.length_with(&ApproxOpts::default())
    }

    pub fn length_with(&self, opts: &ApproxOpts) -> f64 {
        if self.order() == Order::Linear {
            return self.start().distance(self.end());
        }
        self.simplified(opts.length_samples)
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .sum()
    }

    /// Splits the curve at `t` with De Casteljau's algorithm.
    ///
    /// The left curve runs from the start to `C(t)`, the right curve from
    /// `C(t)` to the end.
    pub fn split(&self, t: f64) -> (BezierCurve, BezierCurve) {
        let mut left: SmallVec<[Point; 4]> = SmallVec::new();
        let mut right: SmallVec<[Point; 4]> = SmallVec::new();
        let mut level: SmallVec<[Point; 4]> = self.points.clone();

        loop {
            left.push(level[0]);
            right.push(level[level.len() - 1]);
            if level.len() == 1 {
                break;
            }
            level = level.windows(2).map(|w| w[0].lerp(w[1], t)).collect();
        }
        right.reverse();

        (Self { points: left }, Self { points: right })
    }

    /// The parameters at which the curve crosses the vertical line at `x`.
    pub fn ts_at_x(&self, x: f64) -> Roots {
        let distances: SmallVec<[f64; 4]> = self.points.iter().map(|p| p.x - x).collect();
        ts_at_zero(&distances)
    }

    /// The parameters at which the curve crosses the horizontal line at `y`.
    pub fn ts_at_y(&self, y: f64) -> Roots {
        let distances: SmallVec<[f64; 4]> = self.points.iter().map(|p| p.y - y).collect();
        ts_at_zero(&distances)
    }

    /// The parameters at which the curve crosses the infinite line through
    /// `line`.
    pub fn ts_intersecting(&self, line: &Segment) -> Roots {
        ts_at_zero(&roots::aligned_distances(&self.points, line))
    }

    /// The `y` values of the curve at `x`.
    pub fn ys_at_x(&self, x: f64) -> SmallVec<[f64; 3]> {
        self.ts_at_x(x)
            .into_iter()
            .map(|t| self.point_at(t).y)
            .collect()
    }

    /// The `x` values of the curve at `y`.
    pub fn xs_at_y(&self, y: f64) -> SmallVec<[f64; 3]> {
        self.ts_at_y(y)
            .into_iter()
            .map(|t| self.point_at(t).x)
            .collect()
    }

    /// The points where the curve crosses the infinite line through `line`.
    pub fn intersections(&self, line: &Segment) -> SmallVec<[Point; 3]> {
        self.ts_intersecting(line)
            .into_iter()
            .map(|t| self.point_at(t))
            .collect()
    }

    /// The bounding box of the curve.
    ///
    /// Curved orders are flattened first, so extremes between the sampled
    /// points can be missed. See [`BezierCurve::tight_bounding_box`].
    pub fn axis_aligned_bounding_box(&self) -> Rectangle {
        self.axis_aligned_bounding_box_with(&ApproxOpts::default())
    }

    pub fn axis_aligned_bounding_box_with(&self, opts: &ApproxOpts) -> Rectangle {
        match self.order() {
            Order::Linear => Rectangle::from_corners(self.start(), self.end()),
            _ => Rectangle::bounding(self.simplified(opts.bounding_box_segments))
                .unwrap_or(Rectangle::ZERO),
        }
    }

    /// The exact bounding box of the curve, from the roots of its derivative.
    pub fn tight_bounding_box(&self) -> Rectangle {
        use lyon::geom::{point, CubicBezierSegment, LineSegment, QuadraticBezierSegment};

        let p = |p: &Point| point(p.x, p.y);
        let bounds = match self.points.as_slice() {
            [from, to] => LineSegment {
                from: p(from),
                to: p(to),
            }
            .bounding_box(),
            [from, ctrl, to] => QuadraticBezierSegment {
                from: p(from),
                ctrl: p(ctrl),
                to: p(to),
            }
            .bounding_box(),
            [from, ctrl1, ctrl2, to] => CubicBezierSegment {
                from: p(from),
                ctrl1: p(ctrl1),
                ctrl2: p(ctrl2),
                to: p(to),
            }
            .bounding_box(),
            _ => unreachable!(),
        };

        Rectangle::from_corners(
            Point::new(bounds.min.x, bounds.min.y),
            Point::new(bounds.max.x, bounds.max.y),
        )
    }

    pub fn translated(&self, by: Point) -> Self {
        self.map(|p| p.translated(by))
    }

    pub fn translated_by(&self, x: f64, y: f64) -> Self {
        self.map(|p| p.translated_by(x, y))
    }

    pub fn scaled(&self, amount: f64, reference: Point) -> Self {
        self.map(|p| p.scaled(amount, reference))
    }

    pub fn rotated(&self, angle: Angle, reference: Point) -> Self {
        self.map(|p| p.rotated(angle, reference))
    }

    pub fn transformed(&self, transform: &Transform) -> Self {
        self.map(|p| p.transformed(transform))
    }

    fn map(&self, f: impl Fn(Point) -> Point) -> Self {
        Self {
            points: self.points.iter().map(|p| f(*p)).collect(),
        }
    }
}

impl From<Segment> for BezierCurve {
    fn from(segment: Segment) -> Self {
        Self::linear(segment.start, segment.end)
    }
}

impl TryFrom<Vec<Point>> for BezierCurve {
    type Error = CurveError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Self::try_from_points(&points)
    }
}

impl From<BezierCurve> for Vec<Point> {
    fn from(curve: BezierCurve) -> Self {
        curve.points.into_vec()
    }
}

/// Solves for the `t` in `[0, 1]` at which the curve whose control points lie
/// at the given signed distances from a line crosses that line.
fn ts_at_zero(distances: &[f64]) -> Roots {
    let found = match *distances {
        [d0, d1] => {
            let mut found = Roots::new();
            if d0 != d1 {
                found.push(d0 / (d0 - d1));
            }
            found
        }
        [d0, d1, d2] => roots::quadratic(d0 - 2.0 * d1 + d2, 2.0 * (d1 - d0), d0),
        [d0, d1, d2, d3] => roots::cubic_bernstein(d0, d1, d2, d3),
        _ => Roots::new(),
    };
    roots::in_unit_interval(found)
}
