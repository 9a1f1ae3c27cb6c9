use shapevg_core::Vector2;

use crate::polygon::ConvexPolygon;
use crate::shape::Polygonal;
use crate::vertices::VertexCollection;

/// Returns `true` if the two shapes overlap or touch.
///
/// Both shapes are broken into convex pieces and the shapes collide if any
/// pair of pieces collides.
pub fn collision<A, B>(a: &A, b: &B) -> bool
where
    A: Polygonal + ?Sized,
    B: Polygonal + ?Sized,
{
    let a_pieces = a.convex_decomposition();
    let b_pieces = b.convex_decomposition();
    a_pieces
        .iter()
        .any(|p| b_pieces.iter().any(|q| convex_collision(p, q)))
}

/// Separating axis test between two convex polygons.
pub fn convex_collision(a: &ConvexPolygon, b: &ConvexPolygon) -> bool {
    let a = a.vertices();
    let b = b.vertices();
    a.axes()
        .into_iter()
        .chain(b.axes())
        .all(|axis| overlaps(project(&a, axis), project(&b, axis)))
}

fn project(vertices: &VertexCollection, axis: Vector2) -> (f64, f64) {
    vertices
        .iter()
        .map(|p| axis.dot(Vector2::from(*p)))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), d| {
            (min.min(d), max.max(d))
        })
}

#[inline]
fn overlaps((a_min, a_max): (f64, f64), (b_min, b_max): (f64, f64)) -> bool {
    !(b_max < a_min || a_max < b_min)
}
