//! Closed-form polynomial root solvers used for curve/line intersection.

use std::f64::consts::TAU;

use smallvec::SmallVec;

use shapevg_core::math::EPSILON;
use shapevg_core::Point;
use shapevg_geometry::Segment;

/// Up to three real roots.
pub type Roots = SmallVec<[f64; 3]>;

/// Real roots of `a·t² + b·t + c = 0`.
///
/// Falls back to the linear solution when `a` vanishes. A repeated root is
/// reported once.
pub fn quadratic(a: f64, b: f64, c: f64) -> Roots {
    let mut roots = Roots::new();

    if a.abs() < EPSILON {
        if b.abs() >= EPSILON {
            roots.push(-c / b);
        }
        return roots;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return roots;
    }
    if discriminant == 0.0 {
        roots.push(-b / (2.0 * a));
        return roots;
    }

    let sd = discriminant.sqrt();
    roots.push((-b + sd) / (2.0 * a));
    roots.push((-b - sd) / (2.0 * a));
    roots
}

/// Real roots of the cubic whose Bernstein coefficients are `pa`..`pd`, that
/// is the `t` for which
/// `pa·(1-t)³ + 3·pb·(1-t)²·t + 3·pc·(1-t)·t² + pd·t³ = 0`.
///
/// A vanishing cubic term degrades to the quadratic solver.
pub fn cubic_bernstein(pa: f64, pb: f64, pc: f64, pd: f64) -> Roots {
    let d = -pa + 3.0 * pb - 3.0 * pc + pd;

    if d.abs() < EPSILON {
        log::trace!("degenerate cubic, solving as quadratic");
        return quadratic(3.0 * pa - 6.0 * pb + 3.0 * pc, 3.0 * pb - 3.0 * pa, pa);
    }

    let a = (3.0 * pa - 6.0 * pb + 3.0 * pc) / d;
    let b = (-3.0 * pa + 3.0 * pb) / d;
    let c = pa / d;

    depressed_cubic(a, b, c)
}

/// Real roots of the monic cubic `t³ + a·t² + b·t + c = 0`, found through the
/// depressed form `u³ + p·u + q = 0` with `t = u - a/3`.
pub fn depressed_cubic(a: f64, b: f64, c: f64) -> Roots {
    let p = (3.0 * b - a * a) / 3.0;
    let p3 = p / 3.0;
    let q = (2.0 * a * a * a - 9.0 * a * b + 27.0 * c) / 27.0;
    let q2 = q / 2.0;
    let discriminant = q2 * q2 + p3 * p3 * p3;
    let shift = a / 3.0;

    let mut roots = Roots::new();

    if discriminant < 0.0 {
        // Three distinct real roots.
        let mp3 = -p / 3.0;
        let r = (mp3 * mp3 * mp3).sqrt();
        let cos_phi = (-q / (2.0 * r)).clamp(-1.0, 1.0);
        let phi = cos_phi.acos();
        let t1 = 2.0 * cube_root(r);
        roots.push(t1 * (phi / 3.0).cos() - shift);
        roots.push(t1 * ((phi + TAU) / 3.0).cos() - shift);
        roots.push(t1 * ((phi + 2.0 * TAU) / 3.0).cos() - shift);
    } else if discriminant == 0.0 {
        let u1 = -cube_root(q2);
        roots.push(2.0 * u1 - shift);
        roots.push(-u1 - shift);
    } else {
        let sd = discriminant.sqrt();
        roots.push(cube_root(sd - q2) - cube_root(sd + q2) - shift);
    }

    roots
}

/// Cube root that keeps the sign of its input.
#[inline]
pub fn cube_root(value: f64) -> f64 {
    value.cbrt()
}

/// The signed distance of each point from `line`, measured in a frame where
/// the line runs along the positive x axis from its start.
pub fn aligned_distances(points: &[Point], line: &Segment) -> SmallVec<[f64; 4]> {
    let angle = -(line.end.y - line.start.y).atan2(line.end.x - line.start.x);
    let (sin, cos) = angle.sin_cos();
    points
        .iter()
        .map(|p| (p.x - line.start.x) * sin + (p.y - line.start.y) * cos)
        .collect()
}

/// Keeps the roots lying in `[0, 1]`, allowing for rounding error at both
/// ends. Returned roots are clamped into the interval, sorted and
/// de-duplicated.
pub fn in_unit_interval(roots: Roots) -> Roots {
    const TOLERANCE: f64 = 1e-9;

    let mut kept: Roots = roots
        .into_iter()
        .filter(|t| t.is_finite() && (-TOLERANCE..=1.0 + TOLERANCE).contains(t))
        .map(|t| t.clamp(0.0, 1.0))
        .collect();
    kept.sort_by(f64::total_cmp);
    kept.dedup_by(|a, b| (*a - *b).abs() < TOLERANCE);
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapevg_core::math::point;

    fn sorted(mut roots: Roots) -> Vec<f64> {
        roots.sort_by(f64::total_cmp);
        roots.into_vec()
    }

    fn assert_roots(actual: Roots, expected: &[f64]) {
        let actual = sorted(actual);
        assert_eq!(actual.len(), expected.len(), "roots: {:?}", actual);
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{} != {}", a, e);
        }
    }

    #[test]
    fn quadratic_cases() {
        assert_roots(quadratic(1.0, -3.0, 2.0), &[1.0, 2.0]);
        assert_roots(quadratic(1.0, -2.0, 1.0), &[1.0]);
        assert_roots(quadratic(1.0, 0.0, 1.0), &[]);
        assert_roots(quadratic(0.0, 2.0, -1.0), &[0.5]);
        assert_roots(quadratic(0.0, 0.0, 1.0), &[]);
    }

    #[test]
    fn three_real_roots() {
        // (t - 1)(t - 2)(t - 3)
        assert_roots(depressed_cubic(-6.0, 11.0, -6.0), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn repeated_root() {
        // (t - 1)²(t + 2)
        assert_roots(depressed_cubic(0.0, -3.0, 2.0), &[-2.0, 1.0]);
    }

    #[test]
    fn single_real_root() {
        // (t - 1)(t² + 1)
        assert_roots(depressed_cubic(-1.0, 1.0, -1.0), &[1.0]);
    }

    #[test]
    fn cube_root_keeps_sign() {
        assert_eq!(cube_root(-8.0), -2.0);
        assert_eq!(cube_root(27.0), 3.0);
    }

    #[test]
    fn bernstein_cubic_falls_back_to_quadratic() {
        // Bernstein coefficients of the quadratic 1 - 2t, elevated to degree three.
        let roots = cubic_bernstein(1.0, 1.0 / 3.0, -1.0 / 3.0, -1.0);
        assert_roots(in_unit_interval(roots), &[0.5]);
    }

    #[test]
    fn alignment_measures_distance_from_line() {
        let distances = aligned_distances(
            &[point(0.0, 3.0), point(5.0, -2.0)],
            &Segment::horizontal(1.0),
        );
        assert!((distances[0] - 2.0).abs() < 1e-12);
        assert!((distances[1] + 3.0).abs() < 1e-12);

        let distances = aligned_distances(&[point(3.0, 7.0)], &Segment::vertical(1.0));
        assert!((distances[0] + 2.0).abs() < 1e-12);
    }

    #[test]
    fn unit_interval_filter() {
        let roots: Roots = [-0.5, -1e-12, 0.25, 0.25 + 1e-13, 1.0 + 1e-12, 1.5].into_iter().collect();
        assert_eq!(in_unit_interval(roots).into_vec(), vec![0.0, 0.25, 1.0]);
    }
}
