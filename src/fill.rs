use std::fmt;

use crate::color::{self, Color, RGB8, RGBA8};

/// The style used to fill the inside of a path.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fill {
    /// The color of the fill.
    ///
    /// By default, it is set to [`color::BLACK`].
    pub color: Color,

    /// The fill rule defines how to determine what is inside and what is
    /// outside of a shape.
    ///
    /// See the [SVG specification][1] for more details.
    ///
    /// By default, it is set to `NonZero`.
    ///
    /// [1]: https://www.w3.org/TR/SVG/painting.html#FillRuleProperty
    pub rule: FillRule,
}

impl Default for Fill {
    fn default() -> Self {
        Self::new(color::BLACK)
    }
}

impl Fill {
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            rule: FillRule::NonZero,
        }
    }

    pub const fn rule(mut self, rule: FillRule) -> Self {
        self.rule = rule;
        self
    }
}

impl From<Color> for Fill {
    fn from(color: Color) -> Fill {
        Fill::new(color)
    }
}

impl From<RGB8> for Fill {
    fn from(color: RGB8) -> Fill {
        Fill::new(color::from_rgb8(color))
    }
}

impl From<RGBA8> for Fill {
    fn from(color: RGBA8) -> Fill {
        Fill::new(color::from_rgba8(color))
    }
}

/// The fill rule defines how to determine what is inside and what is outside of
/// a shape.
///
/// See the [SVG specification][1].
///
/// [1]: https://www.w3.org/TR/SVG/painting.html#FillRuleProperty
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

impl fmt::Display for FillRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonZero => write!(f, "nonzero"),
            Self::EvenOdd => write!(f, "evenodd"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_opaque_black_non_zero() {
        let fill = Fill::default();
        assert_eq!(fill.color, color::BLACK);
        assert_eq!(fill.rule, FillRule::NonZero);
    }

    #[test]
    fn from_8_bit_colors() {
        let fill = Fill::from(color::named::RED).rule(FillRule::EvenOdd);
        assert_eq!(fill.color, color::rgba(1.0, 0.0, 0.0, 1.0));
        assert_eq!(fill.rule.to_string(), "evenodd");
    }
}
