use shapevg_core::{Point, Rectangle};

use crate::styled_path::StyledPath;

/// The content of a leaf in a [`Composite`](crate::Composite).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Item {
    Path(StyledPath),
}

impl Item {
    pub fn frame(&self) -> Rectangle {
        match self {
            Self::Path(path) => path.frame,
        }
    }

    pub fn resized_to_fit_contents(&self) -> Self {
        match self {
            Self::Path(path) => Self::Path(path.resized_to_fit_contents()),
        }
    }

    pub fn translated(&self, by: Point) -> Self {
        match self {
            Self::Path(path) => Self::Path(path.translated(by)),
        }
    }

    /// The bounding box of the content in the parent's coordinate space.
    pub fn axis_aligned_bounding_box(&self) -> Rectangle {
        match self {
            Self::Path(path) => path.axis_aligned_bounding_box(),
        }
    }
}

impl From<StyledPath> for Item {
    fn from(path: StyledPath) -> Self {
        Self::Path(path)
    }
}
