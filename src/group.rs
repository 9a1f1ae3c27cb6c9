use shapevg_core::{Point, Rectangle};

/// The data carried by a branch of a [`Composite`](crate::Composite).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    pub identifier: String,
    /// The frame of the group in the coordinate space of its parent.
    /// Children are placed relative to its origin.
    pub frame: Rectangle,
}

impl Default for Group {
    fn default() -> Self {
        Self::new("root", Rectangle::ZERO)
    }
}

impl Group {
    pub fn new(identifier: impl Into<String>, frame: Rectangle) -> Self {
        Self {
            identifier: identifier.into(),
            frame,
        }
    }

    pub fn translated(&self, by: Point) -> Self {
        Self {
            identifier: self.identifier.clone(),
            frame: self.frame.translated(by),
        }
    }
}
