pub mod collision;
pub mod triangulation;

mod ellipse;
mod error;
mod line;
mod polygon;
mod polyline;
mod ray;
mod rectangle;
mod shape;
mod triangle;
mod vertices;

pub use collision::{collision, convex_collision};
pub use ellipse::Ellipse;
pub use error::PolygonError;
pub use line::{Line, Segment};
pub use polygon::{ConvexPolygon, Polygon};
pub use polyline::Polyline;
pub use ray::Ray;
pub use shape::{contains_even_odd, Polygonal, Shape};
pub use triangle::Triangle;
pub use triangulation::triangulate;
pub use vertices::{orientation, wrap_index, Rotation, VertexCollection};
