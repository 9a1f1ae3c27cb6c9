mod composite;
mod fill;
mod group;
mod item;
mod stroke;
mod styled_path;
mod styling;

pub use composite::{Composite, Leaves};
pub use fill::{Fill, FillRule};
pub use group::Group;
pub use item::Item;
pub use stroke::{Dashes, LineCap, LineJoin, Stroke, DEFAULT_MITER_LIMIT};
pub use styled_path::StyledPath;
pub use styling::Styling;

pub use shapevg_core::*;

pub use shapevg_geometry as geometry;

pub use shapevg_path as path;
