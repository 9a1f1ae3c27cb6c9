use std::fmt;

use crate::color::{self, Color};

pub const DEFAULT_MITER_LIMIT: f64 = 10.0;

/// The style used to outline a path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stroke {
    /// The stroke width
    ///
    /// If `width <= 0.0`, then no stroke will be rendered.
    ///
    /// Defaults to `0.0` (no stroke).
    pub width: f64,

    /// The stroke color
    ///
    /// Defaults to [`color::BLACK`].
    pub color: Color,

    /// The line joining method
    ///
    /// Defaults to [`LineJoin::Miter`] with a limit of `10.0`.
    pub join: LineJoin,

    /// The line capping method
    ///
    /// Defaults to [`LineCap::Butt`].
    pub cap: LineCap,

    /// The dash pattern
    ///
    /// Defaults to `None` (a solid line).
    pub dashes: Option<Dashes>,
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new()
    }
}

impl Stroke {
    pub const fn new() -> Self {
        Self {
            width: 0.0,
            color: color::BLACK,
            join: LineJoin::Miter(DEFAULT_MITER_LIMIT),
            cap: LineCap::Butt,
            dashes: None,
        }
    }

    /// The stroke width
    ///
    /// If `width <= 0.0`, then no stroke will be rendered.
    ///
    /// Defaults to `0.0` (no stroke).
    pub const fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// The stroke color
    ///
    /// Defaults to [`color::BLACK`].
    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// The line joining method
    ///
    /// Defaults to [`LineJoin::Miter`] with a limit of `10.0`.
    pub const fn join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }

    /// The line capping method
    ///
    /// Defaults to [`LineCap::Butt`].
    pub const fn cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    /// The dash pattern
    ///
    /// Defaults to `None` (a solid line).
    pub fn dashes(mut self, dashes: Dashes) -> Self {
        self.dashes = Some(dashes);
        self
    }

    /// The same stroke with its width multiplied by `amount`.
    pub fn scaled(&self, amount: f64) -> Self {
        Self {
            width: self.width * amount,
            ..self.clone()
        }
    }
}

/// The shape used at the corners of a stroked path.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineJoin {
    /// A sharp corner, beveled once the miter length exceeds the limit
    /// times the stroke width.
    Miter(f64),
    Round,
    Bevel,
}

impl Default for LineJoin {
    fn default() -> Self {
        Self::Miter(DEFAULT_MITER_LIMIT)
    }
}

impl fmt::Display for LineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Miter(limit) => write!(f, "miter (limit {})", limit),
            Self::Round => write!(f, "round"),
            Self::Bevel => write!(f, "bevel"),
        }
    }
}

/// The shape used at the ends of open subpaths.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Butt => write!(f, "butt"),
            Self::Round => write!(f, "round"),
            Self::Square => write!(f, "square"),
        }
    }
}

/// Alternating lengths of drawn and skipped stroke.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dashes {
    pub pattern: Vec<f64>,
    /// The distance into the pattern at which the stroke starts.
    pub phase: f64,
}

impl Dashes {
    pub fn new(pattern: impl Into<Vec<f64>>, phase: f64) -> Self {
        Self {
            pattern: pattern.into(),
            phase,
        }
    }
}
