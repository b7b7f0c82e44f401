//! Configuration for rendering boards.
//!
//! All types implement [`serde::Deserialize`] and every section defaults
//! when absent, so a partial TOML file is valid.
//!
//! - [`AppConfig`] - Top-level configuration combining canvas and style settings.
//! - [`CanvasConfig`] - Scene-to-pixel scale, margin and minimum canvas size.
//! - [`StyleConfig`] - Background and fallback beam colors.
//!
//! ```
//! # use optika::config::AppConfig;
//! let config = AppConfig::from_toml_str(
//!     r#"
//!     [canvas]
//!     pixels_per_unit = 80.0
//!
//!     [style]
//!     background_color = "white"
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.canvas().pixels_per_unit(), 80.0);
//! assert!(config.style().background_color().unwrap().is_some());
//! ```

use std::{fs, path::Path};

use log::{debug, info};
use serde::Deserialize;

use optika_core::color::Color;

use crate::Error;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    canvas: CanvasConfig,

    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(canvas: CanvasConfig, style: StyleConfig) -> Self {
        Self { canvas, style }
    }

    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed TOML, unknown value types, or
    /// color strings that are not valid CSS colors.
    pub fn from_toml_str(content: &str) -> Result<Self, Error> {
        let config: AppConfig =
            toml::from_str(content).map_err(|err| Error::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IoFailure`] if the file cannot be read and
    /// [`Error::Config`] if its content is invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration");
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(config:?; "Configuration loaded");
        Ok(config)
    }

    /// Checks the canvas numbers and both style colors.
    ///
    /// Configurations built with [`AppConfig::new`] are not checked until
    /// this runs; rendering to SVG always does.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first invalid setting.
    pub fn validate(&self) -> Result<(), Error> {
        self.canvas.validate()?;
        self.style.background_color()?;
        self.style.fallback_beam_color()?;
        Ok(())
    }
}

/// Maps scene units onto the output canvas.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Output pixels per scene unit.
    pixels_per_unit: f64,

    /// Space around the scene bounds, in scene units.
    margin: f64,

    /// Smallest canvas width in pixels.
    min_width: f64,

    /// Smallest canvas height in pixels.
    min_height: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            pixels_per_unit: 100.0,
            margin: 0.5,
            min_width: 100.0,
            min_height: 100.0,
        }
    }
}

impl CanvasConfig {
    pub fn new(pixels_per_unit: f64, margin: f64, min_width: f64, min_height: f64) -> Self {
        Self {
            pixels_per_unit,
            margin,
            min_width,
            min_height,
        }
    }

    pub fn pixels_per_unit(&self) -> f64 {
        self.pixels_per_unit
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    pub fn min_width(&self) -> f64 {
        self.min_width
    }

    pub fn min_height(&self) -> f64 {
        self.min_height
    }

    /// Checks that the scale is finite and positive and that the margin and
    /// minimum sizes are finite and not negative.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the offending setting.
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.pixels_per_unit.is_finite() && self.pixels_per_unit > 0.0) {
            return Err(Error::Config(format!(
                "pixels_per_unit must be positive, got {}",
                self.pixels_per_unit
            )));
        }
        for (name, value) in [
            ("margin", self.margin),
            ("min_width", self.min_width),
            ("min_height", self.min_height),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::Config(format!("{name} must not be negative, got {value}")));
            }
        }
        Ok(())
    }
}

/// Colors that are not tied to a particular item.
///
/// Colors are kept as strings and parsed on access.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Canvas fill; transparent when unset.
    #[serde(default)]
    background_color: Option<String>,

    /// Beam color for wavelengths outside the visible band.
    #[serde(default)]
    fallback_beam_color: Option<String>,
}

impl StyleConfig {
    pub fn new(background_color: Option<String>, fallback_beam_color: Option<String>) -> Self {
        Self {
            background_color,
            fallback_beam_color,
        }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configured string is not a valid color.
    pub fn background_color(&self) -> Result<Option<Color>, Error> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| Error::Config(format!("invalid background color: {err}")))
    }

    /// Returns the color used for invisible wavelengths, gray by default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configured string is not a valid color.
    pub fn fallback_beam_color(&self) -> Result<Color, Error> {
        let color = self.fallback_beam_color.as_deref().unwrap_or("#808080");
        Color::new(color).map_err(|err| Error::Config(format!("invalid fallback beam color: {err}")))
    }
}
