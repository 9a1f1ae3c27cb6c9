#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PolygonError {
    #[error("expected {expected} vertices, found {found}")]
    InvalidVertexCount { expected: usize, found: usize },

    #[error("vertex {index} has an angle of {degrees} degrees")]
    InvalidAngle { index: usize, degrees: f64 },

    #[error("edge {index} is not aligned with an axis")]
    NotAxisAligned { index: usize },

    #[error("vertices do not form a convex polygon")]
    NotConvex,
}
