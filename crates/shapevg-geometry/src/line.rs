use shapevg_core::{Point, Vector2};

/// An infinite straight line.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Line {
    /// A vertical line at the given `x`.
    Vertical(f64),
    /// A horizontal line at the given `y`.
    Horizontal(f64),
    Slanted { slope: f64, intercept: f64 },
}

impl Line {
    /// A line with the given slope and y-intercept.
    pub fn new(slope: f64, intercept: f64) -> Self {
        if slope == 0.0 {
            Self::Horizontal(intercept)
        } else {
            Self::Slanted { slope, intercept }
        }
    }

    /// The line passing through both endpoints of the segment.
    pub fn from_segment(segment: &Segment) -> Self {
        let Segment { start, end } = *segment;
        if start.x == end.x {
            Self::Vertical(start.x)
        } else if start.y == end.y {
            Self::Horizontal(start.y)
        } else {
            let slope = segment.slope();
            Self::Slanted {
                slope,
                intercept: start.y - slope * start.x,
            }
        }
    }

    pub fn slope(&self) -> f64 {
        match *self {
            Self::Vertical(_) => f64::INFINITY,
            Self::Horizontal(_) => 0.0,
            Self::Slanted { slope, .. } => slope,
        }
    }

    /// The `y` value at `x`, or `None` for a vertical line.
    pub fn y_at(&self, x: f64) -> Option<f64> {
        match *self {
            Self::Vertical(_) => None,
            Self::Horizontal(y) => Some(y),
            Self::Slanted { slope, intercept } => Some(slope * x + intercept),
        }
    }

    /// The `x` value at `y`, or `None` for a horizontal line.
    pub fn x_at(&self, y: f64) -> Option<f64> {
        match *self {
            Self::Vertical(x) => Some(x),
            Self::Horizontal(_) => None,
            Self::Slanted { slope, intercept } => Some((y - intercept) / slope),
        }
    }

    /// The line perpendicular to this one passing through `point`.
    pub fn perpendicular(&self, point: Point) -> Self {
        match *self {
            Self::Vertical(_) => Self::Horizontal(point.y),
            Self::Horizontal(_) => Self::Vertical(point.x),
            Self::Slanted { slope, .. } => {
                let slope = -1.0 / slope;
                Self::Slanted {
                    slope,
                    intercept: point.y - slope * point.x,
                }
            }
        }
    }

    /// The point where the two lines cross, or `None` if they are parallel.
    pub fn intersection(&self, other: &Line) -> Option<Point> {
        match (*self, *other) {
            (Self::Vertical(x), line) | (line, Self::Vertical(x)) => {
                line.y_at(x).map(|y| Point::new(x, y))
            }
            (Self::Horizontal(y), line) | (line, Self::Horizontal(y)) => {
                line.x_at(y).map(|x| Point::new(x, y))
            }
            (
                Self::Slanted {
                    slope: m1,
                    intercept: b1,
                },
                Self::Slanted {
                    slope: m2,
                    intercept: b2,
                },
            ) => {
                if m1 == m2 {
                    return None;
                }
                let x = (b2 - b1) / (m1 - m2);
                Some(Point::new(x, m1 * x + b1))
            }
        }
    }
}

impl From<Segment> for Line {
    fn from(segment: Segment) -> Self {
        Self::from_segment(&segment)
    }
}

/// A bounded piece of a line between two points.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    #[inline]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Creates a segment from exactly two points.
    ///
    /// # Panics
    ///
    /// Panics if `points` does not contain exactly two points.
    pub fn from_points(points: &[Point]) -> Self {
        match points {
            [start, end] => Self::new(*start, *end),
            _ => panic!(
                "a segment requires exactly 2 points, got {}",
                points.len()
            ),
        }
    }

    /// A unit segment lying on the horizontal line at `y`.
    pub const fn horizontal(y: f64) -> Self {
        Self::new(Point::new(0.0, y), Point::new(1.0, y))
    }

    /// A unit segment lying on the vertical line at `x`.
    pub const fn vertical(x: f64) -> Self {
        Self::new(Point::new(x, 0.0), Point::new(x, 1.0))
    }

    pub fn vector(&self) -> Vector2 {
        Vector2::between(self.start, self.end)
    }

    pub fn length(&self) -> f64 {
        self.vector().length()
    }

    pub fn slope(&self) -> f64 {
        (self.end.y - self.start.y) / (self.end.x - self.start.x)
    }

    pub fn midpoint(&self) -> Point {
        self.start.lerp(self.end, 0.5)
    }

    pub fn line(&self) -> Line {
        Line::from_segment(self)
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    pub fn translated(&self, by: Point) -> Self {
        Self::new(self.start + by, self.end + by)
    }

    /// The `y` value at `x`, if `x` lies within the horizontal span.
    ///
    /// Vertical segments have no single answer and return `None`.
    pub fn y_at(&self, x: f64) -> Option<f64> {
        let (min, max) = min_max(self.start.x, self.end.x);
        if !(min..=max).contains(&x) || min == max {
            return None;
        }
        let t = (x - self.start.x) / (self.end.x - self.start.x);
        Some(self.start.y + t * (self.end.y - self.start.y))
    }

    /// The `x` value at `y`, if `y` lies within the vertical span.
    ///
    /// Horizontal segments have no single answer and return `None`.
    pub fn x_at(&self, y: f64) -> Option<f64> {
        let (min, max) = min_max(self.start.y, self.end.y);
        if !(min..=max).contains(&y) || min == max {
            return None;
        }
        let t = (y - self.start.y) / (self.end.y - self.start.y);
        Some(self.start.x + t * (self.end.x - self.start.x))
    }
}

#[inline]
fn min_max(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
