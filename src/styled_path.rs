use shapevg_core::{Point, Rectangle};
use shapevg_path::Path;

use crate::styling::Styling;

/// A path painted with a [`Styling`] and placed by its `frame` in the
/// coordinate space of its parent.
///
/// The path is expressed relative to the frame origin.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyledPath {
    pub frame: Rectangle,
    pub path: Path,
    pub styling: Styling,
}

impl StyledPath {
    pub fn new(frame: Rectangle, path: Path, styling: Styling) -> Self {
        Self {
            frame,
            path,
            styling,
        }
    }

    /// A path with a zero frame.
    pub fn from_path(path: Path, styling: Styling) -> Self {
        Self::new(Rectangle::ZERO, path, styling)
    }

    /// Shrinks the frame onto the bounding box of the path.
    ///
    /// The path is moved so its bounding box starts at the frame origin, and
    /// the frame is moved by the same amount the other way, so the path does
    /// not move in the parent's coordinate space.
    pub fn resized_to_fit_contents(&self) -> Self {
        let bbox = self.path.axis_aligned_bounding_box();
        Self {
            frame: bbox.translated(self.frame.origin),
            path: self.path.translated(-bbox.origin),
            styling: self.styling.clone(),
        }
    }

    /// Moves the frame. The path is left untouched.
    pub fn translated(&self, by: Point) -> Self {
        Self {
            frame: self.frame.translated(by),
            ..self.clone()
        }
    }

    /// Scales the path about its local origin and the stroke width with it.
    pub fn scaled(&self, amount: f64) -> Self {
        Self {
            frame: self.frame,
            path: self.path.scaled(amount, Point::ZERO),
            styling: self.styling.scaled(amount),
        }
    }

    /// The bounding box of the path in the parent's coordinate space.
    pub fn axis_aligned_bounding_box(&self) -> Rectangle {
        self.path
            .axis_aligned_bounding_box()
            .translated(self.frame.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::Stroke;
    use shapevg_core::math::{point, rect};

    #[test]
    fn resize_keeps_path_in_place() {
        let styled = StyledPath::new(
            rect(5.0, 5.0, 100.0, 100.0),
            Path::rectangle(&rect(10.0, 20.0, 30.0, 40.0)),
            Styling::default(),
        );
        let before = styled.axis_aligned_bounding_box();

        let fitted = styled.resized_to_fit_contents();
        assert_eq!(fitted.frame, rect(15.0, 25.0, 30.0, 40.0));
        assert_eq!(
            fitted.path.axis_aligned_bounding_box(),
            rect(0.0, 0.0, 30.0, 40.0)
        );
        assert_eq!(fitted.axis_aligned_bounding_box(), before);
    }

    #[test]
    fn translation_moves_only_the_frame() {
        let styled = StyledPath::from_path(Path::square(point(0.0, 0.0), 2.0), Styling::default());
        let moved = styled.translated(point(3.0, 4.0));
        assert_eq!(moved.frame.origin, point(3.0, 4.0));
        assert_eq!(moved.path, styled.path);
    }

    #[test]
    fn scaling_scales_stroke_width() {
        let styling = Styling::from(Stroke::new().width(2.0));
        let styled = StyledPath::from_path(Path::square(point(1.0, 1.0), 2.0), styling);
        let scaled = styled.scaled(3.0);
        assert_eq!(scaled.styling.stroke.width, 6.0);
        assert_eq!(
            scaled.path.axis_aligned_bounding_box(),
            rect(0.0, 0.0, 6.0, 6.0)
        );
    }
}
