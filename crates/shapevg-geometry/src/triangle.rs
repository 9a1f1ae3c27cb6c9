use std::borrow::Cow;

use shapevg_core::Point;

use crate::error::PolygonError;
use crate::polygon::ConvexPolygon;
use crate::shape::Polygonal;
use crate::vertices::{orientation, Rotation, VertexCollection};

/// A polygon with exactly three vertices.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "VertexCollection", into = "VertexCollection")
)]
pub struct Triangle {
    vertices: VertexCollection,
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            vertices: VertexCollection::new([a, b, c]),
        }
    }

    /// # Panics
    ///
    /// Panics if `points` does not contain exactly three points.
    pub fn from_points(points: &[Point]) -> Self {
        match points {
            [a, b, c] => Self::new(*a, *b, *c),
            _ => panic!(
                "a triangle requires exactly 3 points, got {}",
                points.len()
            ),
        }
    }

    pub fn a(&self) -> Point {
        self.vertices.at(0)
    }

    pub fn b(&self) -> Point {
        self.vertices.at(1)
    }

    pub fn c(&self) -> Point {
        self.vertices.at(2)
    }

    pub fn area(&self) -> f64 {
        0.5 * orientation(self.a(), self.b(), self.c()).abs()
    }

    /// Whether the corner at `b` turns the way a convex polygon wound in
    /// `rotation` would. Collinear points are never convex.
    pub fn is_convex(&self, rotation: Rotation) -> bool {
        let turn = orientation(self.a(), self.b(), self.c());
        match rotation {
            Rotation::CounterClockwise => turn > 0.0,
            Rotation::Clockwise => turn < 0.0,
        }
    }
}

impl TryFrom<VertexCollection> for Triangle {
    type Error = PolygonError;

    fn try_from(vertices: VertexCollection) -> Result<Self, Self::Error> {
        if vertices.len() != 3 {
            return Err(PolygonError::InvalidVertexCount {
                expected: 3,
                found: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }
}

impl From<Triangle> for VertexCollection {
    fn from(triangle: Triangle) -> Self {
        triangle.vertices
    }
}

// Signed side of the line through `b` and `c` that the point `a` lies on.
#[inline]
fn half_plane(a: Point, b: Point, c: Point) -> f64 {
    (a.x - c.x) * (b.y - c.y) - (b.x - c.x) * (a.y - c.y)
}

impl Polygonal for Triangle {
    fn vertices(&self) -> Cow<'_, VertexCollection> {
        Cow::Borrowed(&self.vertices)
    }

    fn convex_decomposition(&self) -> Vec<ConvexPolygon> {
        vec![ConvexPolygon::new_unchecked(self.vertices.clone())]
    }

    /// A point is inside when no two edges see it on opposite sides. Edges
    /// and vertices count as inside in either winding.
    fn contains(&self, point: Point) -> bool {
        let (a, b, c) = (self.a(), self.b(), self.c());
        let sides = [
            half_plane(point, a, b),
            half_plane(point, b, c),
            half_plane(point, c, a),
        ];
        let has_neg = sides.iter().any(|&s| s < 0.0);
        let has_pos = sides.iter().any(|&s| s > 0.0);
        !(has_neg && has_pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapevg_core::math::point;

    #[test]
    fn contains_by_sign() {
        let t = Triangle::new(point(0.0, 0.0), point(10.0, 0.0), point(0.0, 10.0));
        assert!(t.contains(point(2.5, 2.5)));
        assert!(!t.contains(point(7.5, 7.5)));
        assert!(!t.contains(point(-1.0, 1.0)));
    }

    #[test]
    fn contains_independent_of_winding() {
        let t = Triangle::new(point(0.0, 0.0), point(0.0, 10.0), point(10.0, 0.0));
        assert!(t.contains(point(2.5, 2.5)));
        assert!(!t.contains(point(7.5, 7.5)));
    }

    #[test]
    fn boundary_is_inside_in_both_windings() {
        let ccw = Triangle::new(point(0.0, 0.0), point(10.0, 0.0), point(0.0, 10.0));
        let cw = Triangle::new(point(0.0, 0.0), point(0.0, 10.0), point(10.0, 0.0));
        for t in [ccw, cw] {
            assert!(t.contains(point(5.0, 0.0)));
            assert!(t.contains(point(0.0, 0.0)));
            assert!(t.contains(point(5.0, 5.0)));
            assert!(!t.contains(point(5.0, -0.1)));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializing_checks_vertex_count() {
        let t = Triangle::new(point(0.0, 0.0), point(4.0, 0.0), point(0.0, 3.0));
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(serde_json::from_str::<Triangle>(&json).unwrap(), t);

        let pair = VertexCollection::new([point(0.0, 0.0), point(1.0, 0.0)]);
        let json = serde_json::to_string(&pair).unwrap();
        assert!(serde_json::from_str::<Triangle>(&json).is_err());
    }

    #[test]
    fn convexity_depends_on_rotation() {
        let t = Triangle::new(point(0.0, 10.0), point(10.0, 0.0), point(0.0, -10.0));
        assert!(!t.is_convex(Rotation::CounterClockwise));
        assert!(t.is_convex(Rotation::Clockwise));
    }

    #[test]
    fn area() {
        let t = Triangle::new(point(0.0, 0.0), point(4.0, 0.0), point(0.0, 3.0));
        assert_eq!(t.area(), 6.0);
    }

    #[test]
    #[should_panic]
    fn requires_three_points() {
        Triangle::from_points(&[point(0.0, 0.0), point(1.0, 0.0)]);
    }
}
