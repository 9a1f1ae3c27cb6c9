use crate::fill::Fill;
use crate::stroke::Stroke;

/// How a path is painted.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Styling {
    pub fill: Fill,
    pub stroke: Stroke,
}

impl Styling {
    pub const fn new(fill: Fill, stroke: Stroke) -> Self {
        Self { fill, stroke }
    }

    /// The same styling with the stroke width multiplied by `amount`.
    pub fn scaled(&self, amount: f64) -> Self {
        Self {
            fill: self.fill,
            stroke: self.stroke.scaled(amount),
        }
    }
}

impl From<Fill> for Styling {
    fn from(fill: Fill) -> Self {
        Self {
            fill,
            ..Default::default()
        }
    }
}

impl From<Stroke> for Styling {
    fn from(stroke: Stroke) -> Self {
        Self {
            stroke,
            ..Default::default()
        }
    }
}
