// SPDX-License-Identifier: MPL-2.0
//! Color scales: threshold scales over sequential schemes and an ordinal
//! scale for continents.

use std::fmt;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Builds a color from a `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for iced::Color {
    fn from(rgb: Rgb) -> Self {
        iced::Color::from_rgb8(rgb.r, rgb.g, rgb.b)
    }
}

// ==========================================================================
// Sequential schemes (9 steps, light to dark)
// ==========================================================================

pub const BLUES: [Rgb; 9] = [
    Rgb::hex(0xf7fbff),
    Rgb::hex(0xdeebf7),
    Rgb::hex(0xc6dbef),
    Rgb::hex(0x9ecae1),
    Rgb::hex(0x6baed6),
    Rgb::hex(0x4292c6),
    Rgb::hex(0x2171b5),
    Rgb::hex(0x08519c),
    Rgb::hex(0x08306b),
];

pub const GREENS: [Rgb; 9] = [
    Rgb::hex(0xf7fcf5),
    Rgb::hex(0xe5f5e0),
    Rgb::hex(0xc7e9c0),
    Rgb::hex(0xa1d99b),
    Rgb::hex(0x74c476),
    Rgb::hex(0x41ab5d),
    Rgb::hex(0x238b45),
    Rgb::hex(0x006d2c),
    Rgb::hex(0x00441b),
];

pub const ORANGES: [Rgb; 9] = [
    Rgb::hex(0xfff5eb),
    Rgb::hex(0xfee6ce),
    Rgb::hex(0xfdd0a2),
    Rgb::hex(0xfdae6b),
    Rgb::hex(0xfd8d3c),
    Rgb::hex(0xf16913),
    Rgb::hex(0xd94801),
    Rgb::hex(0xa63603),
    Rgb::hex(0x7f2704),
];

/// Maps a number to the color of the bin it falls in.
///
/// With thresholds `t₀ < t₁ < … < tₙ₋₁`, values below `t₀` get `colors[0]`
/// and values `≥ tᵢ` get `colors[i + 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdScale {
    thresholds: &'static [f64],
    colors: &'static [Rgb],
}

impl ThresholdScale {
    /// `colors` must hold exactly one more entry than `thresholds`.
    pub const fn new(thresholds: &'static [f64], colors: &'static [Rgb]) -> Self {
        assert!(colors.len() == thresholds.len() + 1);
        Self { thresholds, colors }
    }

    pub fn thresholds(&self) -> &'static [f64] {
        self.thresholds
    }

    pub fn colors(&self) -> &'static [Rgb] {
        self.colors
    }

    /// Index of the bin holding `value` (bisect right).
    pub fn bin(&self, value: f64) -> Option<usize> {
        if value.is_nan() {
            return None;
        }
        Some(self.thresholds.partition_point(|t| *t <= value))
    }

    pub fn color(&self, value: f64) -> Option<Rgb> {
        self.bin(value).map(|i| self.colors[i])
    }
}

/// Maps a fixed set of categories to colors; unknown categories have none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrdinalScale {
    entries: &'static [(&'static str, Rgb)],
}

impl OrdinalScale {
    pub const fn new(entries: &'static [(&'static str, Rgb)]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [(&'static str, Rgb)] {
        self.entries
    }

    pub fn color(&self, category: &str) -> Option<Rgb> {
        self.entries
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, color)| *color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLDS: [f64; 2] = [10.0, 20.0];
    const COLORS: [Rgb; 3] = [Rgb::hex(0xf7fbff), Rgb::hex(0xdeebf7), Rgb::hex(0xc6dbef)];
    const SCALE: ThresholdScale = ThresholdScale::new(&THRESHOLDS, &COLORS);

    #[test]
    fn hex_splits_channels() {
        let c = Rgb::hex(0x4292c6);
        assert_eq!((c.r, c.g, c.b), (0x42, 0x92, 0xc6));
        assert_eq!(c.to_string(), "#4292c6");
    }

    #[test]
    fn threshold_bins_are_right_closed() {
        assert_eq!(SCALE.bin(-5.0), Some(0));
        assert_eq!(SCALE.bin(9.99), Some(0));
        assert_eq!(SCALE.bin(10.0), Some(1));
        assert_eq!(SCALE.bin(19.0), Some(1));
        assert_eq!(SCALE.bin(20.0), Some(2));
        assert_eq!(SCALE.bin(f64::INFINITY), Some(2));
        assert_eq!(SCALE.bin(f64::NAN), None);
    }

    #[test]
    fn threshold_color_uses_bin() {
        assert_eq!(SCALE.color(15.0), Some(COLORS[1]));
    }

    #[test]
    fn ordinal_unknown_category_has_no_color() {
        const ENTRIES: [(&str, Rgb); 1] = [("Europe", Rgb::hex(0xF1C232))];
        const ORD: OrdinalScale = OrdinalScale::new(&ENTRIES);
        assert_eq!(ORD.color("Europe"), Some(Rgb::hex(0xF1C232)));
        assert_eq!(ORD.color("Antarctica"), None);
    }
}
