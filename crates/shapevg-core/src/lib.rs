pub mod color;
pub mod math;

mod angle;
mod insets;
mod point;
mod rectangle;
mod size;
mod vector;

pub use insets::Insets;
pub use math::{Angle, Point, Rectangle, Size, Transform, Vector2};
