//! This module re-exports types from the `rgb` crate.

pub use rgb::*;

/// A color with `f64` components in the range `[0.0, 1.0]`.
pub type Color = RGBA<f64>;

/// The color black with full opacity
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};
/// The color white with full opacity
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};
/// A color with no opacity
pub const TRANSPARENT: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};

pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Color {
    Color { r, g, b, a }
}

/// Creates a [`Color`] from 8 bit components with full opacity.
pub fn from_rgb8(color: RGB8) -> Color {
    from_rgb8_alpha(color, 1.0)
}

/// Creates a [`Color`] from 8 bit components and an alpha component.
pub fn from_rgb8_alpha(color: RGB8, a: f64) -> Color {
    Color {
        r: f64::from(color.r) / 255.0,
        g: f64::from(color.g) / 255.0,
        b: f64::from(color.b) / 255.0,
        a,
    }
}

/// Creates a [`Color`] from 8 bit components including alpha.
pub fn from_rgba8(color: RGBA8) -> Color {
    from_rgb8_alpha(
        RGB8 {
            r: color.r,
            g: color.g,
            b: color.b,
        },
        f64::from(color.a) / 255.0,
    )
}

/// Creates a [`Color`] from a `0xRRGGBB` integer.
pub fn hex(hex: u32, a: f64) -> Color {
    from_rgb8_alpha(
        RGB8 {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        },
        a,
    )
}

/// Parses a `RRGGBB` or `#RRGGBB` string. Anything other than exactly six
/// hex digits is rejected.
pub fn hex_str(s: &str, a: f64) -> Option<Color> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok().map(|h| hex(h, a))
}

/// A shade of gray.
pub fn white(white: f64, a: f64) -> Color {
    rgba(white, white, white, a)
}

/// Creates a [`Color`] from a hue in degrees and saturation and value in the
/// range `[0.0, 1.0]`.
pub fn hsv(hue: f64, saturation: f64, value: f64, a: f64) -> Color {
    let hue = hue.rem_euclid(360.0);
    let c = value * saturation;
    let x = c * (1.0 - ((hue / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = value - c;

    let (r, g, b) = match hue {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    rgba(r + m, g + m, b + m, a)
}

/// Creates a [`Color`] from cyan, magenta, yellow and black components.
pub fn cmyk(cyan: f64, magenta: f64, yellow: f64, black: f64, a: f64) -> Color {
    rgba(
        (1.0 - cyan) * (1.0 - black),
        (1.0 - magenta) * (1.0 - black),
        (1.0 - yellow) * (1.0 - black),
        a,
    )
}

pub fn lerp_rgba(c0: Color, c1: Color, u: f64) -> Color {
    let u = u.clamp(0.0, 1.0);
    let one_minus_u = 1.0 - u;

    Color {
        r: c0.r * one_minus_u + c1.r * u,
        g: c0.g * one_minus_u + c1.g * u,
        b: c0.b * one_minus_u + c1.b * u,
        a: c0.a * one_minus_u + c1.a * u,
    }
}

/// A subset of the CSS named colors.
///
/// Convert with [`from_rgb8`](super::from_rgb8).
pub mod named {
    use super::RGB8;

    macro_rules! named_colors {
        ($($name:ident = $hex:literal;)*) => {
            $(
                pub const $name: RGB8 = RGB8 {
                    r: (($hex >> 16) & 0xFF) as u8,
                    g: (($hex >> 8) & 0xFF) as u8,
                    b: ($hex & 0xFF) as u8,
                };
            )*
        };
    }

    named_colors! {
        ALICE_BLUE = 0xF0F8FF;
        AQUA = 0x00FFFF;
        BEIGE = 0xF5F5DC;
        BLACK = 0x000000;
        BLUE = 0x0000FF;
        BROWN = 0xA52A2A;
        CORAL = 0xFF7F50;
        CRIMSON = 0xDC143C;
        CYAN = 0x00FFFF;
        DARK_BLUE = 0x00008B;
        DARK_GRAY = 0xA9A9A9;
        DARK_GREEN = 0x006400;
        FUCHSIA = 0xFF00FF;
        GOLD = 0xFFD700;
        GRAY = 0x808080;
        GREEN = 0x008000;
        INDIGO = 0x4B0082;
        IVORY = 0xFFFFF0;
        LAVENDER = 0xE6E6FA;
        LIGHT_GRAY = 0xD3D3D3;
        LIME = 0x00FF00;
        MAGENTA = 0xFF00FF;
        MAROON = 0x800000;
        NAVY = 0x000080;
        OLIVE = 0x808000;
        ORANGE = 0xFFA500;
        PINK = 0xFFC0CB;
        PURPLE = 0x800080;
        RED = 0xFF0000;
        SALMON = 0xFA8072;
        SILVER = 0xC0C0C0;
        SKY_BLUE = 0x87CEEB;
        TEAL = 0x008080;
        TOMATO = 0xFF6347;
        TURQUOISE = 0x40E0D0;
        VIOLET = 0xEE82EE;
        WHITE = 0xFFFFFF;
        YELLOW = 0xFFFF00;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Color, b: Color) -> bool {
        (a.r - b.r).abs() < 1e-9
            && (a.g - b.g).abs() < 1e-9
            && (a.b - b.b).abs() < 1e-9
            && (a.a - b.a).abs() < 1e-9
    }

    #[test]
    fn hex_components() {
        assert!(close(hex(0xFF8000, 1.0), rgba(1.0, 128.0 / 255.0, 0.0, 1.0)));
        assert_eq!(hex_str("#FF0000", 0.5), Some(rgba(1.0, 0.0, 0.0, 0.5)));
        assert_eq!(hex_str("00ff00", 1.0), Some(rgba(0.0, 1.0, 0.0, 1.0)));
        assert_eq!(hex_str("#zz0000", 1.0), None);
        assert_eq!(hex_str("#", 1.0), None);
    }

    #[test]
    fn hex_str_requires_six_digits() {
        assert_eq!(hex_str("fff", 1.0), None);
        assert_eq!(hex_str("#+fffff", 1.0), None);
        assert_eq!(hex_str("+fffff", 1.0), None);
        assert_eq!(hex_str("#0000fff", 1.0), None);
        assert_eq!(hex_str("#0000Ff", 1.0), Some(rgba(0.0, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn named_palette() {
        assert_eq!(from_rgb8(named::RED), rgba(1.0, 0.0, 0.0, 1.0));
        assert_eq!(from_rgb8(named::WHITE), WHITE);
    }

    #[test]
    fn hsv_primaries() {
        assert!(close(hsv(0.0, 1.0, 1.0, 1.0), rgba(1.0, 0.0, 0.0, 1.0)));
        assert!(close(hsv(120.0, 1.0, 1.0, 1.0), rgba(0.0, 1.0, 0.0, 1.0)));
        assert!(close(hsv(600.0, 1.0, 1.0, 1.0), rgba(0.0, 0.0, 1.0, 1.0)));
        assert!(close(hsv(42.0, 0.0, 0.5, 1.0), white(0.5, 1.0)));
    }

    #[test]
    fn cmyk_conversion() {
        assert!(close(cmyk(0.0, 0.0, 0.0, 1.0, 1.0), BLACK));
        assert!(close(cmyk(1.0, 0.0, 1.0, 0.0, 1.0), rgba(0.0, 1.0, 0.0, 1.0)));
    }

    #[test]
    fn lerp_clamps() {
        assert_eq!(lerp_rgba(BLACK, WHITE, 2.0), WHITE);
        assert!(close(lerp_rgba(BLACK, WHITE, 0.5), white(0.5, 1.0)));
    }
}
