use std::marker::PhantomData;

use shapevg_core::Point;

use super::Path;
use crate::bezier::BezierCurve;

/// The builder has not started a subpath yet.
#[derive(Debug, Clone, Copy)]
pub struct Empty;

/// The builder is inside an open subpath.
#[derive(Debug, Clone, Copy)]
pub struct Drawing;

/// The builder has just closed a subpath.
#[derive(Debug, Clone, Copy)]
pub struct Closed;

/// The curve list and pen position shared by every builder state and by
/// element replay.
#[derive(Debug, Default, Clone)]
pub(crate) struct Accumulator {
    curves: Vec<BezierCurve>,
    subpath_start: Point,
    current: Point,
}

impl Accumulator {
    pub(crate) fn subpath_start(&self) -> Point {
        self.subpath_start
    }

    pub(crate) fn move_to(&mut self, point: Point) {
        self.subpath_start = point;
        self.current = point;
    }

    pub(crate) fn push(&mut self, curve: BezierCurve) {
        self.current = curve.end();
        self.curves.push(curve);
    }

    pub(crate) fn line_to(&mut self, point: Point) {
        self.push(BezierCurve::linear(self.current, point));
    }

    pub(crate) fn quad_curve_to(&mut self, point: Point, control: Point) {
        self.push(BezierCurve::quadratic(self.current, control, point));
    }

    pub(crate) fn curve_to(&mut self, point: Point, control_1: Point, control_2: Point) {
        self.push(BezierCurve::cubic(self.current, control_1, control_2, point));
    }

    pub(crate) fn close(&mut self) {
        self.line_to(self.subpath_start);
    }

    pub(crate) fn build(self) -> Path {
        Path::from_curves(self.curves)
    }
}

/// A step builder for [`Path`].
///
/// A new builder only accepts [`PathBuilder::move_to`]. Drawing commands are
/// available once a subpath has been started, and closing a subpath only
/// allows starting another one or finishing the path.
///
/// ```
/// # use shapevg_core::math::point;
/// # use shapevg_path::Path;
/// let triangle = Path::builder()
///     .move_to(point(0.0, 0.0))
///     .line_to(point(10.0, 0.0))
///     .line_to(point(0.0, 10.0))
///     .close()
///     .build();
///
/// assert_eq!(triangle.curves().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct PathBuilder<S = Empty> {
    inner: Accumulator,
    _state: PhantomData<S>,
}

impl<S> PathBuilder<S> {
    fn into_state<T>(self) -> PathBuilder<T> {
        PathBuilder {
            inner: self.inner,
            _state: PhantomData,
        }
    }
}

impl PathBuilder<Empty> {
    /// Creates a new [`PathBuilder`].
    pub fn new() -> Self {
        Self {
            inner: Accumulator::default(),
            _state: PhantomData,
        }
    }

    /// Starts the first subpath at the given point.
    pub fn move_to(mut self, point: Point) -> PathBuilder<Drawing> {
        self.inner.move_to(point);
        self.into_state()
    }
}

impl Default for PathBuilder<Empty> {
    fn default() -> Self {
        Self::new()
    }
}

impl PathBuilder<Drawing> {
    /// The end of the last curve, or the start of the subpath.
    pub fn current_point(&self) -> Point {
        self.inner.current
    }

    /// Starts a new subpath at the given point without closing this one.
    pub fn move_to(mut self, point: Point) -> Self {
        self.inner.move_to(point);
        self
    }

    /// Connects the current point to `point` with a straight line.
    pub fn line_to(mut self, point: Point) -> Self {
        self.inner.line_to(point);
        self
    }

    /// Connects the current point to `point` with a quadratic curve.
    pub fn quad_curve_to(mut self, point: Point, control: Point) -> Self {
        self.inner.quad_curve_to(point, control);
        self
    }

    /// Connects the current point to `point` with a cubic curve.
    pub fn curve_to(mut self, point: Point, control_1: Point, control_2: Point) -> Self {
        self.inner.curve_to(point, control_1, control_2);
        self
    }

    /// Appends a curve as-is. The current point moves to its end.
    pub fn add_curve(mut self, curve: BezierCurve) -> Self {
        self.inner.push(curve);
        self
    }

    /// Draws a straight line back to the start of the subpath.
    pub fn close(mut self) -> PathBuilder<Closed> {
        self.inner.close();
        self.into_state()
    }

    pub fn build(self) -> Path {
        self.inner.build()
    }
}

impl PathBuilder<Closed> {
    /// Starts a new subpath at the given point.
    pub fn move_to(mut self, point: Point) -> PathBuilder<Drawing> {
        self.inner.move_to(point);
        self.into_state()
    }

    pub fn build(self) -> Path {
        self.inner.build()
    }
}
