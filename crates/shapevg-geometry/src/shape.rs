use std::borrow::Cow;

use shapevg_core::{Point, Rectangle};

use crate::collision;
use crate::line::Segment;
use crate::polygon::{ConvexPolygon, Polygon};
use crate::triangle::Triangle;
use crate::vertices::VertexCollection;

/// Anything made of a closed loop of straight edges.
pub trait Polygonal {
    fn vertices(&self) -> Cow<'_, VertexCollection>;

    /// The convex pieces used for collision detection.
    fn convex_decomposition(&self) -> Vec<ConvexPolygon>;

    /// Even-odd containment test.
    fn contains(&self, point: Point) -> bool {
        contains_even_odd(self.vertices().as_slice(), point)
    }

    fn edges(&self) -> Vec<Segment> {
        self.vertices().edges()
    }

    fn collides_with<P: Polygonal + ?Sized>(&self, other: &P) -> bool {
        collision::collision(self, other)
    }
}

/// Casts a horizontal ray from `point` toward negative `x` and counts the
/// edges it crosses. An odd count means the point is inside.
pub fn contains_even_odd(vertices: &[Point], point: Point) -> bool {
    let n = vertices.len();
    let mut inside = false;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        if (a.y > point.y) != (b.y > point.y) {
            let x = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if x < point.x {
                inside = !inside;
            }
        }
    }
    inside
}

/// One of the supported polygonal shapes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    Convex(ConvexPolygon),
    General(Polygon),
    Triangle(Triangle),
    Rectangle(Rectangle),
}

impl Polygonal for Shape {
    fn vertices(&self) -> Cow<'_, VertexCollection> {
        match self {
            Self::Convex(s) => s.vertices(),
            Self::General(s) => s.vertices(),
            Self::Triangle(s) => s.vertices(),
            Self::Rectangle(s) => s.vertices(),
        }
    }

    fn convex_decomposition(&self) -> Vec<ConvexPolygon> {
        match self {
            Self::Convex(s) => s.convex_decomposition(),
            Self::General(s) => s.convex_decomposition(),
            Self::Triangle(s) => s.convex_decomposition(),
            Self::Rectangle(s) => s.convex_decomposition(),
        }
    }

    fn contains(&self, point: Point) -> bool {
        match self {
            Self::Convex(s) => s.contains(point),
            Self::General(s) => s.contains(point),
            Self::Triangle(s) => Polygonal::contains(s, point),
            Self::Rectangle(s) => Polygonal::contains(s, point),
        }
    }
}

impl From<ConvexPolygon> for Shape {
    fn from(s: ConvexPolygon) -> Self {
        Self::Convex(s)
    }
}

impl From<Polygon> for Shape {
    fn from(s: Polygon) -> Self {
        Self::General(s)
    }
}

impl From<Triangle> for Shape {
    fn from(s: Triangle) -> Self {
        Self::Triangle(s)
    }
}

impl From<Rectangle> for Shape {
    fn from(s: Rectangle) -> Self {
        Self::Rectangle(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapevg_core::math::{point, rect};

    fn block_c() -> Polygon {
        Polygon::new(
            [
                (2.0, 3.0),
                (0.0, 3.0),
                (0.0, 0.0),
                (2.0, 0.0),
                (2.0, 1.0),
                (1.0, 1.0),
                (1.0, 2.0),
                (2.0, 2.0),
            ]
            .map(|(x, y)| point(x, y)),
        )
    }

    #[test]
    fn even_odd_containment_in_concave_shape() {
        let c = block_c();
        assert!(c.contains(point(0.5, 2.5)));
        assert!(c.contains(point(1.5, 0.5)));
        assert!(!c.contains(point(1.5, 1.5)));
        assert!(!c.contains(point(0.0, 2.0)));
        assert!(!c.contains(point(-1.0, 1.0)));
    }

    #[test]
    fn shapes_delegate() {
        let shapes: Vec<Shape> = vec![
            rect(0.0, 0.0, 10.0, 10.0).into(),
            Triangle::new(point(0.0, 0.0), point(10.0, 0.0), point(0.0, 10.0)).into(),
            block_c().into(),
        ];
        assert_eq!(shapes[0].vertices().len(), 4);
        assert_eq!(shapes[1].convex_decomposition().len(), 1);
        assert_eq!(shapes[2].convex_decomposition().len(), 6);
        assert!(shapes[0].contains(point(10.0, 10.0)));
        assert!(shapes[1].contains(point(2.5, 2.5)));
        assert!(!shapes[2].contains(point(1.5, 1.5)));
    }
}
