use std::borrow::Cow;
use std::ops::Add;

use shapevg_core::{Angle, Point};

use crate::error::PolygonError;
use crate::shape::Polygonal;
use crate::triangle::Triangle;
use crate::triangulation;
use crate::vertices::{Rotation, VertexCollection};

/// A closed polygon that may be convex or concave.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    vertices: VertexCollection,
}

impl Polygon {
    pub fn new<V: Into<VertexCollection>>(vertices: V) -> Self {
        Self {
            vertices: vertices.into(),
        }
    }

    pub fn is_convex(&self) -> bool {
        self.vertices.forms_convex_polygon()
    }

    pub fn rotation(&self) -> Rotation {
        self.vertices.rotation()
    }

    /// The enclosed area, regardless of winding.
    pub fn area(&self) -> f64 {
        let n = self.vertices.len() as isize;
        let twice: f64 = (0..n)
            .map(|i| {
                let (a, b) = (self.vertices.at(i), self.vertices.at(i + 1));
                a.x * b.y - b.x * a.y
            })
            .sum();
        0.5 * twice.abs()
    }

    /// Splits the polygon into `n - 2` triangles by ear clipping.
    pub fn triangulated(&self) -> Vec<Triangle> {
        triangulation::triangulate(&self.vertices)
    }

    pub fn translated(&self, by: Point) -> Self {
        Self::new(self.vertices.translated(by))
    }

    pub fn scaled(&self, amount: f64, reference: Point) -> Self {
        Self::new(self.vertices.scaled(amount, reference))
    }

    pub fn rotated(&self, angle: Angle, reference: Point) -> Self {
        Self::new(self.vertices.rotated(angle, reference))
    }
}

impl Polygonal for Polygon {
    fn vertices(&self) -> Cow<'_, VertexCollection> {
        Cow::Borrowed(&self.vertices)
    }

    fn convex_decomposition(&self) -> Vec<ConvexPolygon> {
        if self.is_convex() {
            return vec![ConvexPolygon::new_unchecked(self.vertices.clone())];
        }
        self.triangulated()
            .iter()
            .flat_map(|t| t.convex_decomposition())
            .collect()
    }
}

/// The convex hull of both polygons' vertices.
impl Add for Polygon {
    type Output = Polygon;

    fn add(self, rhs: Polygon) -> Polygon {
        let combined: VertexCollection = self
            .vertices
            .iter()
            .chain(rhs.vertices.iter())
            .copied()
            .collect();
        Polygon::new(combined.convex_hull())
    }
}

impl From<Triangle> for Polygon {
    fn from(t: Triangle) -> Self {
        Self::new(t.vertices().into_owned())
    }
}

impl From<ConvexPolygon> for Polygon {
    fn from(p: ConvexPolygon) -> Self {
        Self::new(p.vertices)
    }
}

/// A polygon whose vertices all turn the same way.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "VertexCollection", into = "VertexCollection")
)]
pub struct ConvexPolygon {
    vertices: VertexCollection,
}

impl ConvexPolygon {
    /// # Panics
    ///
    /// Panics if the vertices do not form a convex polygon.
    pub fn new<V: Into<VertexCollection>>(vertices: V) -> Self {
        let vertices = vertices.into();
        assert!(
            vertices.forms_convex_polygon(),
            "vertices do not form a convex polygon: {:?}",
            vertices
        );
        Self { vertices }
    }

    pub(crate) fn new_unchecked(vertices: VertexCollection) -> Self {
        Self { vertices }
    }

    pub fn rotation(&self) -> Rotation {
        self.vertices.rotation()
    }
}

impl Polygonal for ConvexPolygon {
    fn vertices(&self) -> Cow<'_, VertexCollection> {
        Cow::Borrowed(&self.vertices)
    }

    fn convex_decomposition(&self) -> Vec<ConvexPolygon> {
        vec![self.clone()]
    }
}

impl TryFrom<Polygon> for ConvexPolygon {
    type Error = PolygonError;

    fn try_from(polygon: Polygon) -> Result<Self, Self::Error> {
        Self::try_from(polygon.vertices)
    }
}

impl TryFrom<VertexCollection> for ConvexPolygon {
    type Error = PolygonError;

    fn try_from(vertices: VertexCollection) -> Result<Self, Self::Error> {
        if !vertices.forms_convex_polygon() {
            return Err(PolygonError::NotConvex);
        }
        Ok(Self::new_unchecked(vertices))
    }
}

impl From<ConvexPolygon> for VertexCollection {
    fn from(polygon: ConvexPolygon) -> Self {
        polygon.vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapevg_core::math::point;

    fn polygon(raw: &[(f64, f64)]) -> Polygon {
        Polygon::new(raw.iter().map(|&(x, y)| point(x, y)).collect::<Vec<_>>())
    }

    #[test]
    fn sum_is_convex_hull() {
        let a = polygon(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        let b = polygon(&[(3.0, 3.0), (5.0, 3.0), (5.0, 5.0), (3.0, 5.0)]);
        let expected = polygon(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (5.0, 3.0),
            (5.0, 5.0),
            (3.0, 5.0),
            (0.0, 2.0),
        ]);
        assert_eq!(a + b, expected);
    }

    #[test]
    fn area_of_concave_polygon() {
        let c = polygon(&[
            (2.0, 3.0),
            (0.0, 3.0),
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (2.0, 2.0),
        ]);
        assert_eq!(c.area(), 5.0);
        assert!(!c.is_convex());
    }

    #[test]
    fn convex_conversion() {
        let square = polygon(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert!(ConvexPolygon::try_from(square).is_ok());

        let dart = polygon(&[(0.0, 0.0), (5.0, 2.0), (10.0, 0.0), (5.0, 10.0)]);
        assert_eq!(ConvexPolygon::try_from(dart), Err(PolygonError::NotConvex));
    }

    #[test]
    #[should_panic]
    fn convex_polygon_rejects_concave_vertices() {
        ConvexPolygon::new(vec![
            point(0.0, 0.0),
            point(5.0, 2.0),
            point(10.0, 0.0),
            point(5.0, 10.0),
        ]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializing_checks_convexity() {
        let square = ConvexPolygon::new(vec![
            point(0.0, 0.0),
            point(1.0, 0.0),
            point(1.0, 1.0),
            point(0.0, 1.0),
        ]);
        let json = serde_json::to_string(&square).unwrap();
        assert_eq!(serde_json::from_str::<ConvexPolygon>(&json).unwrap(), square);

        let dart = VertexCollection::new([
            point(0.0, 0.0),
            point(5.0, 2.0),
            point(10.0, 0.0),
            point(5.0, 10.0),
        ]);
        let json = serde_json::to_string(&dart).unwrap();
        assert!(serde_json::from_str::<ConvexPolygon>(&json).is_err());
    }

    #[test]
    fn convex_decomposition_of_convex_polygon_is_itself() {
        let square = polygon(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert_eq!(square.convex_decomposition().len(), 1);
    }
}
