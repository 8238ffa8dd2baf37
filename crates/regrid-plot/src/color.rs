// File: crates/regrid-plot/src/color.rs
// Summary: Plain ARGB color value for theme settings.

/// 8-bit-per-channel color with alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgba {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// `#rrggbb` form (alpha dropped), as consumed by most chart configs.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Mid gray used across the built-in themes.
pub const GRAY: Rgba = Rgba::from_argb(255, 128, 128, 128);
/// View background fill.
pub const WHITE: Rgba = Rgba::from_argb(255, 255, 255, 255);
