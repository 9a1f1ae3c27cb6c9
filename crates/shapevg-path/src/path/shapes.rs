use std::f64::consts::SQRT_2;

use shapevg_core::{Angle, Point, Rectangle};
use shapevg_geometry::{Ellipse, Polygon, Polygonal, Polyline, Segment, Triangle};

use super::{Path, PathBuilder};
use crate::bezier::BezierCurve;

/// Distance of a cubic control point from the endpoint, relative to the
/// radius, for a quarter circle.
const KAPPA: f64 = 4.0 * (SQRT_2 - 1.0) / 3.0;

impl Path {
    /// A single straight line.
    pub fn segment(segment: &Segment) -> Self {
        Self::from_curves(vec![BezierCurve::from(*segment)])
    }

    /// A closed path through the four corners, counter-clockwise from the
    /// top left.
    pub fn rectangle(rect: &Rectangle) -> Self {
        Self::closed_polygon(rect.vertices().as_slice())
    }

    /// An axis-aligned square of side `width` centered on `center`.
    pub fn square(center: Point, width: f64) -> Self {
        let half = width / 2.0;
        let top_left = Point::new(center.x - half, center.y + half);
        PathBuilder::new()
            .move_to(top_left)
            .line_to(top_left.translated_by(width, 0.0))
            .line_to(top_left.translated_by(width, -width))
            .line_to(top_left.translated_by(0.0, -width))
            .close()
            .build()
    }

    /// The ellipse inscribed in `rect`, as four cubic curves running
    /// clockwise from the top.
    pub fn ellipse(rect: &Rectangle) -> Self {
        Self::from(&Ellipse::inscribed(rect))
    }

    pub fn circle(center: Point, radius: f64) -> Self {
        Self::from(&Ellipse::circle(center, radius))
    }

    /// An arrowhead pointing at `tip`.
    ///
    /// Unrotated, the arrow points down the y axis with its base `height`
    /// above the tip. The base is notched toward the tip by
    /// `barb_proportion * height`.
    pub fn arrowhead(
        tip: Point,
        height: f64,
        width: f64,
        barb_proportion: f64,
        rotation: Angle,
    ) -> Self {
        let half = width / 2.0;
        let path = PathBuilder::new()
            .move_to(tip)
            .line_to(tip.translated_by(half, height))
            .line_to(tip.translated_by(0.0, height - barb_proportion * height))
            .line_to(tip.translated_by(-half, height))
            .close()
            .build();

        if rotation == Angle::ZERO {
            path
        } else {
            path.rotated(rotation, tip)
        }
    }

    /// A parallelogram with vertical sides of length `height`, `width` apart.
    ///
    /// The top and bottom edges rise by `slope` per unit of x and pass
    /// through `center` at mid height.
    pub fn parallelogram(center: Point, height: f64, width: f64, slope: f64) -> Self {
        let half_width = width / 2.0;
        let half_height = height / 2.0;
        let left = Point::new(center.x - half_width, center.y - slope * half_width);
        let right = Point::new(center.x + half_width, center.y + slope * half_width);

        Self::closed_polygon(&[
            left.translated_by(0.0, half_height),
            left.translated_by(0.0, -half_height),
            right.translated_by(0.0, -half_height),
            right.translated_by(0.0, half_height),
        ])
    }

    /// An open chain of straight lines.
    pub fn polyline(polyline: &Polyline) -> Self {
        Self::from_curves(
            polyline
                .segments()
                .into_iter()
                .map(BezierCurve::from)
                .collect(),
        )
    }

    pub fn polygon(polygon: &Polygon) -> Self {
        Self::closed_polygon(polygon.vertices().as_slice())
    }

    pub fn triangle(triangle: &Triangle) -> Self {
        Self::closed_polygon(triangle.vertices().as_slice())
    }

    fn closed_polygon(points: &[Point]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::new();
        };
        rest.iter()
            .fold(PathBuilder::new().move_to(*first), |builder, p| {
                builder.line_to(*p)
            })
            .close()
            .build()
    }
}

impl From<&Ellipse> for Path {
    fn from(ellipse: &Ellipse) -> Self {
        let Point { x: cx, y: cy } = ellipse.center;
        let rx = ellipse.size.width / 2.0;
        let ry = ellipse.size.height / 2.0;
        let (kx, ky) = (KAPPA * rx, KAPPA * ry);

        let top = Point::new(cx, cy + ry);
        let right = Point::new(cx + rx, cy);
        let bottom = Point::new(cx, cy - ry);
        let left = Point::new(cx - rx, cy);

        PathBuilder::new()
            .move_to(top)
            .curve_to(right, Point::new(cx + kx, cy + ry), Point::new(cx + rx, cy + ky))
            .curve_to(bottom, Point::new(cx + rx, cy - ky), Point::new(cx + kx, cy - ry))
            .curve_to(left, Point::new(cx - kx, cy - ry), Point::new(cx - rx, cy - ky))
            .curve_to(top, Point::new(cx - rx, cy + ky), Point::new(cx - kx, cy + ry))
            .build()
    }
}

impl From<&Rectangle> for Path {
    fn from(rect: &Rectangle) -> Self {
        Self::rectangle(rect)
    }
}

impl From<&Polygon> for Path {
    fn from(polygon: &Polygon) -> Self {
        Self::polygon(polygon)
    }
}

impl From<&Triangle> for Path {
    fn from(triangle: &Triangle) -> Self {
        Self::triangle(triangle)
    }
}

impl From<&Polyline> for Path {
    fn from(polyline: &Polyline) -> Self {
        Self::polyline(polyline)
    }
}

impl From<&Segment> for Path {
    fn from(segment: &Segment) -> Self {
        Self::segment(segment)
    }
}
