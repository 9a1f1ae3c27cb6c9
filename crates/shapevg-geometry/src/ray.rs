use shapevg_core::{Point, Vector2};

use crate::line::Segment;

/// A half-line starting at a point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ray {
    Up(Point),
    Down(Point),
    Left(Point),
    Right(Point),
    /// Heads along the unit vector `direction`.
    Slanted { point: Point, direction: Vector2 },
}

impl Ray {
    /// The ray starting at the segment's start and heading through its end.
    pub fn from_segment(segment: &Segment) -> Self {
        let Segment { start, end } = *segment;
        if start.y == end.y {
            if start.x < end.x {
                Self::Right(start)
            } else {
                Self::Left(start)
            }
        } else if start.x == end.x {
            if start.y < end.y {
                Self::Up(start)
            } else {
                Self::Down(start)
            }
        } else {
            Self::Slanted {
                point: start,
                direction: Vector2::between(start, end).normalized(),
            }
        }
    }

    pub fn origin(&self) -> Point {
        match *self {
            Self::Up(p) | Self::Down(p) | Self::Left(p) | Self::Right(p) => p,
            Self::Slanted { point, .. } => point,
        }
    }

    /// The point `distance` away from the origin along the ray.
    pub fn point_at(&self, distance: f64) -> Point {
        match *self {
            Self::Up(p) => Point::new(p.x, p.y + distance),
            Self::Down(p) => Point::new(p.x, p.y - distance),
            Self::Left(p) => Point::new(p.x - distance, p.y),
            Self::Right(p) => Point::new(p.x + distance, p.y),
            Self::Slanted { point, direction } => Point::new(
                point.x + distance * direction.x,
                point.y + distance * direction.y,
            ),
        }
    }
}

impl From<Segment> for Ray {
    fn from(segment: Segment) -> Self {
        Self::from_segment(&segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapevg_core::math::{approx_eq_point, point};

    #[test]
    fn axis_aligned_rays() {
        let origin = point(1.0, 1.0);
        assert_eq!(
            Ray::from_segment(&Segment::new(origin, point(1.0, 5.0))),
            Ray::Up(origin)
        );
        assert_eq!(
            Ray::from(Segment::new(origin, point(-3.0, 1.0))),
            Ray::Left(origin)
        );
        assert_eq!(Ray::Down(origin).point_at(2.0), point(1.0, -1.0));
        assert_eq!(Ray::Right(origin).point_at(2.0), point(3.0, 1.0));
    }

    #[test]
    fn slanted_ray_distance() {
        let ray = Ray::from_segment(&Segment::new(point(0.0, 0.0), point(3.0, 4.0)));
        assert!(approx_eq_point(ray.point_at(5.0), point(3.0, 4.0), 1e-12));
        assert_eq!(ray.origin(), point(0.0, 0.0));
    }

    #[test]
    fn slanted_ray_heads_through_segment_end() {
        let segment = Segment::new(point(1.0, 1.0), point(0.0, 0.0));
        let ray = Ray::from_segment(&segment);
        let length = 2.0_f64.sqrt();
        assert!(approx_eq_point(ray.point_at(length), point(0.0, 0.0), 1e-12));
        assert!(approx_eq_point(
            ray.point_at(2.0 * length),
            point(-1.0, -1.0),
            1e-12
        ));
    }
}
