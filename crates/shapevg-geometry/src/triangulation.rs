use shapevg_core::Point;

use crate::shape::Polygonal;
use crate::triangle::Triangle;
use crate::vertices::{wrap_index, Rotation, VertexCollection};

/// Triangulates a simple polygon by ear clipping.
///
/// The vertices are first put into counter-clockwise order. Each pass looks
/// for the first vertex whose corner is convex and whose triangle holds none
/// of the other remaining vertices, records that triangle, and removes the
/// vertex. An `n`-gon yields `n - 2` triangles. Fewer than three vertices
/// yield none.
pub fn triangulate(vertices: &VertexCollection) -> Vec<Triangle> {
    if vertices.len() < 3 {
        return Vec::new();
    }

    let ccw = match vertices.rotation() {
        Rotation::CounterClockwise => vertices.clone(),
        Rotation::Clockwise => vertices.reversed(),
    };

    let mut working: Vec<Point> = ccw.iter().copied().collect();
    let mut triangles = Vec::with_capacity(working.len() - 2);
    let mut index: isize = 0;
    let mut misses = 0;

    while working.len() > 3 {
        let len = working.len();
        let prev = wrap_index(index - 1, len);
        let current = wrap_index(index, len);
        let next = wrap_index(index + 1, len);
        let candidate = Triangle::new(working[prev], working[current], working[next]);

        let is_ear = candidate.is_convex(Rotation::CounterClockwise)
            && !(0..len)
                .filter(|i| *i != prev && *i != current && *i != next)
                .any(|i| candidate.contains(working[i]));

        if is_ear || misses >= len {
            if !is_ear {
                log::warn!(
                    "no ear found among {} remaining vertices, clipping vertex {} anyway",
                    len,
                    current
                );
            }
            log::trace!("clipped ear at vertex {}: {:?}", current, candidate);
            triangles.push(candidate);
            working.remove(current);
            misses = 0;
        } else {
            index += 1;
            misses += 1;
        }
    }

    let len = working.len();
    triangles.push(Triangle::new(
        working[wrap_index(index - 1, len)],
        working[wrap_index(index, len)],
        working[wrap_index(index + 1, len)],
    ));

    triangles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::Polygon;
    use shapevg_core::math::point;

    fn polygon(raw: &[(f64, f64)]) -> Polygon {
        Polygon::new(raw.iter().map(|&(x, y)| point(x, y)).collect::<Vec<_>>())
    }

    fn block_c_points() -> Vec<(f64, f64)> {
        vec![
            (2.0, 3.0),
            (0.0, 3.0),
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (2.0, 2.0),
        ]
    }

    #[test]
    fn triangle_is_its_own_triangulation() {
        let triangle = polygon(&[(0.0, 10.0), (0.0, 0.0), (10.0, 0.0)]);
        assert_eq!(
            triangle.triangulated(),
            vec![Triangle::new(
                point(10.0, 0.0),
                point(0.0, 10.0),
                point(0.0, 0.0)
            )]
        );
    }

    #[test]
    fn square() {
        let square = polygon(&[(0.0, 10.0), (0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        assert_eq!(
            square.triangulated(),
            vec![
                Triangle::new(point(10.0, 10.0), point(0.0, 10.0), point(0.0, 0.0)),
                Triangle::new(point(10.0, 10.0), point(0.0, 0.0), point(10.0, 0.0)),
            ]
        );
    }

    #[test]
    fn house() {
        let house = polygon(&[
            (0.0, 15.0),
            (-5.0, 10.0),
            (-5.0, 0.0),
            (5.0, 0.0),
            (5.0, 10.0),
        ]);
        assert_eq!(
            house.triangulated(),
            vec![
                Triangle::new(point(5.0, 10.0), point(0.0, 15.0), point(-5.0, 10.0)),
                Triangle::new(point(5.0, 10.0), point(-5.0, 10.0), point(-5.0, 0.0)),
                Triangle::new(point(5.0, 10.0), point(-5.0, 0.0), point(5.0, 0.0)),
            ]
        );
    }

    #[test]
    fn block_c_in_either_winding() {
        let ccw = polygon(&block_c_points());
        let cw = polygon(&block_c_points().into_iter().rev().collect::<Vec<_>>());

        for shape in [ccw, cw] {
            let triangles = shape.triangulated();
            assert_eq!(triangles.len(), 6);
            let area: f64 = triangles.iter().map(Triangle::area).sum();
            assert!((area - shape.area()).abs() < 1e-9);
        }
    }

    #[test]
    fn area_is_conserved() {
        let star = polygon(&[
            (0.0, 3.0),
            (1.0, 1.0),
            (3.0, 0.0),
            (1.0, -1.0),
            (0.0, -3.0),
            (-1.0, -1.0),
            (-3.0, 0.0),
            (-1.0, 1.0),
        ]);
        let triangles = star.triangulated();
        assert_eq!(triangles.len(), 6);
        let area: f64 = triangles.iter().map(Triangle::area).sum();
        assert!((area - star.area()).abs() < 1e-9);
    }

    #[test]
    fn degenerate_input_terminates() {
        let line = polygon(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        assert_eq!(line.triangulated().len(), 2);
        assert!(polygon(&[(0.0, 0.0), (1.0, 1.0)]).triangulated().is_empty());
    }
}
