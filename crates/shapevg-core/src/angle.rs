use std::f64::consts::{PI, TAU};
use std::ops::{Add, Mul, Neg, Sub};

/// An angle stored in radians.
///
/// Two angles are equal when their normalized values are equal, so `0` and
/// `2π` compare equal.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle {
    radians: f64,
}

impl Angle {
    pub const ZERO: Self = Self { radians: 0.0 };

    #[inline]
    pub const fn radians(radians: f64) -> Self {
        Self { radians }
    }

    #[inline]
    pub fn degrees(degrees: f64) -> Self {
        Self {
            radians: degrees.to_radians(),
        }
    }

    /// The raw value in radians, as constructed.
    #[inline]
    pub fn as_radians(&self) -> f64 {
        self.radians
    }

    #[inline]
    pub fn as_degrees(&self) -> f64 {
        self.radians.to_degrees()
    }

    /// Folds this angle into the range `(-π, π]`.
    pub fn normalized(&self) -> Self {
        let mut radians = self.radians % TAU;
        if radians > PI {
            radians -= TAU;
        } else if radians <= -PI {
            radians += TAU;
        }
        Self { radians }
    }

    pub fn sin(&self) -> f64 {
        self.radians.sin()
    }

    pub fn cos(&self) -> f64 {
        self.radians.cos()
    }

    pub fn tan(&self) -> f64 {
        self.radians.tan()
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        self.normalized().radians == other.normalized().radians
    }
}

impl Add for Angle {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::radians(self.radians + rhs.radians)
    }
}

impl Sub for Angle {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::radians(self.radians - rhs.radians)
    }
}

impl Mul<f64> for Angle {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::radians(self.radians * rhs)
    }
}

impl Neg for Angle {
    type Output = Self;
    fn neg(self) -> Self {
        Self::radians(-self.radians)
    }
}

impl From<Angle> for euclid::Angle<f64> {
    fn from(angle: Angle) -> Self {
        euclid::Angle::radians(angle.radians)
    }
}

impl From<euclid::Angle<f64>> for Angle {
    fn from(angle: euclid::Angle<f64>) -> Self {
        Self::radians(angle.radians)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_turn_equals_zero() {
        assert_eq!(Angle::radians(0.0), Angle::radians(TAU));
        assert_eq!(Angle::degrees(0.0), Angle::degrees(360.0));
        assert_ne!(Angle::degrees(90.0), Angle::degrees(180.0));
    }

    #[test]
    fn normalized_range() {
        assert_eq!(Angle::radians(PI).normalized().as_radians(), PI);
        assert_eq!(Angle::radians(-PI).normalized().as_radians(), PI);
        let wrapped = Angle::radians(1.5 * PI).normalized().as_radians();
        assert!((wrapped + 0.5 * PI).abs() < 1e-12);
    }

    #[test]
    fn degree_conversion() {
        assert!((Angle::degrees(90.0).as_radians() - 0.5 * PI).abs() < 1e-12);
        assert!((Angle::radians(PI).as_degrees() - 180.0).abs() < 1e-12);
    }
}
