use smallvec::SmallVec;

use shapevg_core::{Angle, Point, Vector2};

use crate::line::Segment;
use crate::triangle::Triangle;

/// Maps any index, including negative and over-range ones, onto `0..len`.
///
/// # Panics
///
/// Panics if `len` is zero.
#[inline]
pub fn wrap_index(index: isize, len: usize) -> usize {
    assert!(len > 0, "cannot wrap an index into an empty collection");
    index.rem_euclid(len as isize) as usize
}

/// Twice the signed area of the triangle `a`, `b`, `c`.
///
/// Positive when the points turn left (counter-clockwise), negative when
/// they turn right, and zero when they are collinear.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// The winding direction of a closed sequence of vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

/// An ordered sequence of points that is indexed circularly.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexCollection {
    points: SmallVec<[Point; 4]>,
}

impl VertexCollection {
    pub fn new<I: IntoIterator<Item = Point>>(points: I) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// The point at `index`, wrapping around in both directions.
    ///
    /// # Panics
    ///
    /// Panics if the collection is empty.
    #[inline]
    pub fn at(&self, index: isize) -> Point {
        self.points[wrap_index(index, self.len())]
    }

    /// The points from `from` through `through` inclusive, wrapping as needed.
    pub fn wrapped_range(&self, from: isize, through: isize) -> Vec<Point> {
        (from..=through).map(|i| self.at(i)).collect()
    }

    /// Each pair of adjacent points, including the pair closing the loop.
    pub fn edges(&self) -> Vec<Segment> {
        (0..self.len() as isize)
            .map(|i| Segment::new(self.at(i), self.at(i + 1)))
            .collect()
    }

    /// The unit normal of each edge, used as separating axes.
    pub fn axes(&self) -> Vec<Vector2> {
        self.edges()
            .iter()
            .map(|edge| edge.vector().perpendicular().normalized())
            .collect()
    }

    /// Each vertex together with its neighbors, as `[previous, vertex, next]`.
    pub fn triples(&self) -> Vec<[Point; 3]> {
        (0..self.len() as isize)
            .map(|i| [self.at(i - 1), self.at(i), self.at(i + 1)])
            .collect()
    }

    /// The triangle formed at each vertex by its neighbors.
    pub fn triangles(&self) -> Vec<Triangle> {
        self.triples()
            .into_iter()
            .map(|[a, b, c]| Triangle::new(a, b, c))
            .collect()
    }

    /// The unsigned angle at each vertex between its two edges, in `[0, π]`.
    pub fn angles(&self) -> Vec<Angle> {
        self.triples()
            .into_iter()
            .map(|[a, b, c]| {
                let ba = Vector2::between(b, a);
                let bc = Vector2::between(b, c);
                Angle::radians(ba.cross(bc).abs().atan2(ba.dot(bc)))
            })
            .collect()
    }

    /// The winding direction, from the sign of the summed edge trapezoids.
    pub fn rotation(&self) -> Rotation {
        let sum: f64 = self
            .edges()
            .iter()
            .map(|e| (e.end.x - e.start.x) * (e.end.y + e.start.y))
            .sum();
        if sum > 0.0 {
            Rotation::Clockwise
        } else {
            Rotation::CounterClockwise
        }
    }

    /// Returns `true` if every vertex turns in the same direction.
    ///
    /// Collinear vertices are ignored. A collection with no turning vertex
    /// at all is not convex.
    pub fn forms_convex_polygon(&self) -> bool {
        if self.len() < 3 {
            return false;
        }
        let mut turns = self
            .triples()
            .into_iter()
            .map(|[a, b, c]| orientation(a, b, c))
            .filter(|o| *o != 0.0)
            .map(|o| o > 0.0);
        match turns.next() {
            Some(first) => turns.all(|t| t == first),
            None => false,
        }
    }

    /// The convex hull of these points in counter-clockwise order, starting
    /// from the lowest leftmost point.
    ///
    /// Collections of three or fewer points are returned unchanged.
    pub fn convex_hull(&self) -> VertexCollection {
        if self.len() <= 3 {
            return self.clone();
        }

        let mut sorted: Vec<Point> = self.points.to_vec();
        sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        sorted.dedup();

        if sorted.len() <= 2 {
            return Self::new(sorted);
        }

        let mut lower = half_hull(sorted.iter().copied());
        let mut upper = half_hull(sorted.iter().rev().copied());
        lower.pop();
        upper.pop();

        log::trace!("convex hull: {} of {} points", lower.len() + upper.len(), self.len());

        Self::new(lower.into_iter().chain(upper))
    }

    /// The vertices in reverse order.
    pub fn reversed(&self) -> Self {
        Self::new(self.points.iter().rev().copied())
    }

    /// A copy with the vertex at the wrapped `index` removed.
    pub fn removing(&self, index: isize) -> Self {
        let mut points = self.points.clone();
        points.remove(wrap_index(index, self.len()));
        Self { points }
    }

    pub fn translated(&self, by: Point) -> Self {
        Self::new(self.iter().map(|p| p.translated(by)))
    }

    pub fn scaled(&self, amount: f64, reference: Point) -> Self {
        Self::new(self.iter().map(|p| p.scaled(amount, reference)))
    }

    pub fn rotated(&self, angle: Angle, reference: Point) -> Self {
        Self::new(self.iter().map(|p| p.rotated(angle, reference)))
    }
}

// Keeps only strict left turns while scanning.
fn half_hull<I: Iterator<Item = Point>>(points: I) -> Vec<Point> {
    let mut hull: Vec<Point> = Vec::new();
    for p in points {
        while hull.len() >= 2 && orientation(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0
        {
            hull.pop();
        }
        hull.push(p);
    }
    hull
}

impl FromIterator<Point> for VertexCollection {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<Point>> for VertexCollection {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl<const N: usize> From<[Point; N]> for VertexCollection {
    fn from(points: [Point; N]) -> Self {
        Self::new(points)
    }
}

impl<'a> IntoIterator for &'a VertexCollection {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
