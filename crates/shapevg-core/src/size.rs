use crate::math::EuclidSize;

/// A two-dimensional extent. Components may be negative.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn scaled(&self, amount: f64) -> Self {
        Self::new(self.width * amount, self.height * amount)
    }
}

impl From<EuclidSize> for Size {
    fn from(s: EuclidSize) -> Self {
        Self::new(s.width, s.height)
    }
}

impl From<Size> for EuclidSize {
    fn from(s: Size) -> Self {
        EuclidSize::new(s.width, s.height)
    }
}
