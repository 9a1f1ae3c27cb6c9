use shapevg_core::Point;

use crate::line::Segment;

/// An open chain of connected straight segments.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polyline {
    pub points: Vec<Point>,
}

impl Polyline {
    pub fn new<I: IntoIterator<Item = Point>>(points: I) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    pub fn segments(&self) -> Vec<Segment> {
        self.points
            .windows(2)
            .map(|pair| Segment::new(pair[0], pair[1]))
            .collect()
    }

    pub fn length(&self) -> f64 {
        self.segments().iter().map(Segment::length).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapevg_core::math::point;

    #[test]
    fn open_chain() {
        let line = Polyline::new([point(0.0, 0.0), point(3.0, 4.0), point(3.0, 0.0)]);
        assert_eq!(line.segments().len(), 2);
        assert_eq!(line.length(), 9.0);
    }
}
