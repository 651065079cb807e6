//! Makeup color model: hex parsing and shade derivation.
//!
//! Color parsing is deliberately fail-soft: cosmetic rendering should never
//! crash on a bad swatch string, so malformed input falls back to a fixed
//! default color instead of erroring.

use palette::{LinSrgb, Srgb};

/// Fallback color used for any string that does not parse as `#RRGGBB`.
pub const FALLBACK_COLOR: Rgb8 = Rgb8 {
    r: 255,
    g: 105,
    b: 180,
};

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#RRGGBB` or `RRGGBB` hex string (case-insensitive).
    ///
    /// Malformed input yields [`FALLBACK_COLOR`] rather than an error.
    pub fn parse_hex(hex: &str) -> Self {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return FALLBACK_COLOR;
        }
        // Length and digit checks above make these parses infallible.
        let r = u8::from_str_radix(&digits[0..2], 16).unwrap_or(FALLBACK_COLOR.r);
        let g = u8::from_str_radix(&digits[2..4], 16).unwrap_or(FALLBACK_COLOR.g);
        let b = u8::from_str_radix(&digits[4..6], 16).unwrap_or(FALLBACK_COLOR.b);
        Self { r, g, b }
    }

    /// Adds `amount` to every channel, clamped to 255.
    pub fn lighten(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_add(amount),
            g: self.g.saturating_add(amount),
            b: self.b.saturating_add(amount),
        }
    }

    /// Subtracts `amount` from every channel, clamped to 0.
    pub fn darken(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_sub(amount),
            g: self.g.saturating_sub(amount),
            b: self.b.saturating_sub(amount),
        }
    }

    /// Per-channel signed offset, clamped to [0, 255].
    ///
    /// The layer recipes shift channels asymmetrically (skin highlights gain
    /// more red than blue), so a uniform lighten/darken is not enough.
    pub fn shift(self, dr: i16, dg: i16, db: i16) -> Self {
        let clamp = |c: u8, d: i16| (c as i16 + d).clamp(0, 255) as u8;
        Self {
            r: clamp(self.r, dr),
            g: clamp(self.g, dg),
            b: clamp(self.b, db),
        }
    }

    /// Converts to linear-light RGB for blend arithmetic.
    pub fn to_linear(self) -> LinSrgb<f32> {
        Srgb::new(self.r, self.g, self.b)
            .into_format::<f32>()
            .into_linear()
    }

    /// Converts linear-light RGB back to 8-bit sRGB.
    pub fn from_linear(lin: LinSrgb<f32>) -> Self {
        let srgb: Srgb<u8> = Srgb::<f32>::from_linear(lin).into_format();
        Self {
            r: srgb.red,
            g: srgb.green,
            b: srgb.blue,
        }
    }
}
