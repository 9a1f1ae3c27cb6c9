use std::borrow::Cow;

use shapevg_core::{Point, Rectangle};

use crate::error::PolygonError;
use crate::polygon::{ConvexPolygon, Polygon};
use crate::shape::Polygonal;
use crate::vertices::VertexCollection;

const RIGHT_ANGLE_TOLERANCE_DEGREES: f64 = 1e-6;

/// Rectangle vertices run counter-clockwise from the top left corner.
impl Polygonal for Rectangle {
    fn vertices(&self) -> Cow<'_, VertexCollection> {
        Cow::Owned(VertexCollection::new([
            self.top_left(),
            self.bottom_left(),
            self.bottom_right(),
            self.top_right(),
        ]))
    }

    fn convex_decomposition(&self) -> Vec<ConvexPolygon> {
        vec![ConvexPolygon::new_unchecked(self.vertices().into_owned())]
    }

    fn contains(&self, point: Point) -> bool {
        Rectangle::contains(self, point)
    }
}

impl TryFrom<&Polygon> for Rectangle {
    type Error = PolygonError;

    /// Succeeds for four vertices with right angles and axis-aligned edges.
    fn try_from(polygon: &Polygon) -> Result<Self, Self::Error> {
        let vertices = polygon.vertices();
        if vertices.len() != 4 {
            return Err(PolygonError::InvalidVertexCount {
                expected: 4,
                found: vertices.len(),
            });
        }

        for (index, angle) in vertices.angles().iter().enumerate() {
            let degrees = angle.as_degrees();
            if (degrees - 90.0).abs() > RIGHT_ANGLE_TOLERANCE_DEGREES {
                return Err(PolygonError::InvalidAngle { index, degrees });
            }
        }

        for (index, edge) in vertices.edges().iter().enumerate() {
            if edge.start.x != edge.end.x && edge.start.y != edge.end.y {
                return Err(PolygonError::NotAxisAligned { index });
            }
        }

        Rectangle::bounding(vertices.iter().copied()).ok_or(PolygonError::InvalidVertexCount {
            expected: 4,
            found: 0,
        })
    }
}

impl TryFrom<Polygon> for Rectangle {
    type Error = PolygonError;

    fn try_from(polygon: Polygon) -> Result<Self, Self::Error> {
        Rectangle::try_from(&polygon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapevg_core::math::{point, rect};

    #[test]
    fn vertices_of_rectangle() {
        let r = rect(0.0, 0.0, 4.0, 2.0);
        assert_eq!(
            r.vertices().as_slice(),
            &[
                point(0.0, 2.0),
                point(0.0, 0.0),
                point(4.0, 0.0),
                point(4.0, 2.0)
            ]
        );
    }

    #[test]
    fn from_rectangular_polygon() {
        let polygon = Polygon::new([
            point(1.0, 1.0),
            point(5.0, 1.0),
            point(5.0, 3.0),
            point(1.0, 3.0),
        ]);
        assert_eq!(Rectangle::try_from(&polygon), Ok(rect(1.0, 1.0, 4.0, 2.0)));
    }

    #[test]
    fn rejects_wrong_vertex_count() {
        let polygon = Polygon::new([point(0.0, 0.0), point(1.0, 0.0), point(0.0, 1.0)]);
        assert_eq!(
            Rectangle::try_from(polygon),
            Err(PolygonError::InvalidVertexCount {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn rejects_non_right_angles() {
        let polygon = Polygon::new([
            point(0.0, 0.0),
            point(4.0, 0.0),
            point(5.0, 2.0),
            point(1.0, 2.0),
        ]);
        assert!(matches!(
            Rectangle::try_from(&polygon),
            Err(PolygonError::InvalidAngle { index: 0, .. })
        ));
    }

    #[test]
    fn rejects_rotated_square() {
        let diamond = Polygon::new([
            point(0.0, 1.0),
            point(-1.0, 0.0),
            point(0.0, -1.0),
            point(1.0, 0.0),
        ]);
        assert_eq!(
            Rectangle::try_from(&diamond),
            Err(PolygonError::NotAxisAligned { index: 0 })
        );
    }
}
