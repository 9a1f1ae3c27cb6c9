#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    #[error("a bezier curve requires 2, 3 or 4 points, got {found}")]
    InvalidPointCount { found: usize },
}
