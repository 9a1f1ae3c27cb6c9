pub mod bezier;
pub mod roots;

mod element;
mod error;
mod path;

pub use bezier::{
    ApproxOpts, BezierCurve, Order, DEFAULT_BOUNDING_BOX_SEGMENTS, DEFAULT_LENGTH_SAMPLES,
};
pub use element::PathElement;
pub use error::CurveError;
pub use path::{Closed, Drawing, Empty, Path, PathBuilder};

pub use lyon::path as lyon_path;
