//! Color handling for Optika diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, and the visible-spectrum mapping used to color beams
//! by wavelength.

use std::str::FromStr;

use color::DynamicColor;

/// Shortest wavelength, in nanometers, that maps to a visible color.
pub const VISIBLE_MIN_NM: f64 = 380.0;

/// Longest wavelength, in nanometers, that maps to a visible color.
pub const VISIBLE_MAX_NM: f64 = 780.0;

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a CSS color string such as "#ff0000",
    /// "rgb(255, 0, 0)" or "red".
    ///
    /// # Examples
    ///
    /// ```
    /// use optika_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let gold = Color::new("gold").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Creates an opaque color from red, green and blue channels in `0.0..=1.0`.
    ///
    /// Channels outside the unit range are clamped.
    pub fn from_unit_rgb(red: f64, green: f64, blue: f64) -> Self {
        let [r, g, b] = [red, green, blue].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        Self::new(&format!("#{r:02x}{g:02x}{b:02x}")).expect("hex triplet is a valid CSS color")
    }

    /// Color of a beam of the given wavelength, or `None` outside the
    /// visible band.
    ///
    /// ```
    /// use optika_core::color::Color;
    ///
    /// assert!(Color::from_wavelength(532.0).is_some());
    /// assert!(Color::from_wavelength(1064.0).is_none());
    /// ```
    pub fn from_wavelength(wavelength_nm: f64) -> Option<Self> {
        wavelength_to_rgb(wavelength_nm).map(|[r, g, b]| Self::from_unit_rgb(r, g, b))
    }

    /// Creates a new color with the specified alpha (transparency) value,
    /// between 0.0 (fully transparent) and 1.0 (fully opaque).
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha (transparency) component of this color.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

/// Approximate RGB (each channel in `0.0..=1.0`) of monochromatic light.
///
/// The hue is piecewise linear across the violet, blue, cyan, green, yellow
/// and red bands, and the intensity fades to 30% towards both ends of the
/// visible range. Returns `None` for non-finite wavelengths and anything
/// outside [`VISIBLE_MIN_NM`]..=[`VISIBLE_MAX_NM`].
pub fn wavelength_to_rgb(wavelength_nm: f64) -> Option<[f64; 3]> {
    if !(VISIBLE_MIN_NM..=VISIBLE_MAX_NM).contains(&wavelength_nm) {
        return None;
    }
    let w = wavelength_nm;

    let (r, g, b) = if w < 440.0 {
        ((440.0 - w) / 60.0, 0.0, 1.0)
    } else if w < 490.0 {
        (0.0, (w - 440.0) / 50.0, 1.0)
    } else if w < 510.0 {
        (0.0, 1.0, (510.0 - w) / 20.0)
    } else if w < 580.0 {
        ((w - 510.0) / 70.0, 1.0, 0.0)
    } else if w < 645.0 {
        (1.0, (645.0 - w) / 65.0, 0.0)
    } else {
        (1.0, 0.0, 0.0)
    };

    let factor = if w < 420.0 {
        0.7f64.mul_add((w - 380.0) / 40.0, 0.3)
    } else if w < 700.0 {
        1.0
    } else {
        0.7f64.mul_add((780.0 - w) / 80.0, 0.3)
    };

    Some([r, g, b].map(|channel| (channel * factor).clamp(0.0, 1.0)))
}
