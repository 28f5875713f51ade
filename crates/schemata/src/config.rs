//! Configuration types for Schemata diagram rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file. Every field has a default; an empty file is a valid config.
//!
//! - [`AppConfig`] - Top-level configuration combining canvas and style settings.
//! - [`CanvasConfig`] - Projection scale, margin, background and PNG pixel ratio.
//! - [`StyleConfig`] - Font families, title size and the default connector stroke.
//!
//! # Example
//!
//! ```
//! # use schemata::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.canvas().scale(), 80.0);
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;

use schemata_core::color::Color;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified canvas and style configurations.
    pub fn new(canvas: CanvasConfig, style: StyleConfig) -> Self {
        Self { canvas, style }
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Checks every value that can be wrong after deserialization.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first offending key.
    pub fn validate(&self) -> Result<(), String> {
        self.canvas.validate()?;
        self.style.validate()
    }
}

/// Canvas geometry and raster settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Pixels per diagram unit.
    scale: f32,
    /// Blank space around the content, in diagram units.
    margin: f32,
    background_color: Option<String>,
    /// PNG supersampling factor.
    pixel_ratio: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            scale: 80.0,
            margin: 0.5,
            background_color: None,
            pixel_ratio: 2.0,
        }
    }
}

impl CanvasConfig {
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    /// Returns the parsed background [`Color`], white if none is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Color, String> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map(|color| color.unwrap_or_else(Color::white))
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn with_pixel_ratio(mut self, pixel_ratio: f32) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    fn validate(&self) -> Result<(), String> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(format!("canvas.scale must be positive, got {}", self.scale));
        }
        if !(self.margin.is_finite() && self.margin >= 0.0) {
            return Err(format!(
                "canvas.margin must not be negative, got {}",
                self.margin
            ));
        }
        if !(self.pixel_ratio.is_finite() && self.pixel_ratio > 0.0) {
            return Err(format!(
                "canvas.pixel_ratio must be positive, got {}",
                self.pixel_ratio
            ));
        }
        self.background_color().map(|_| ())
    }
}

/// Text and connector styling.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    font_family: String,
    mono_font_family: String,
    /// Title size in points.
    title_font_size: u16,
    connector_color: String,
    /// Connector stroke width in pixels.
    connector_width: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            mono_font_family: "monospace".to_string(),
            title_font_size: 16,
            connector_color: "#2C3E50".to_string(),
            connector_width: 2.0,
        }
    }
}

impl StyleConfig {
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn mono_font_family(&self) -> &str {
        &self.mono_font_family
    }

    pub fn title_font_size(&self) -> u16 {
        self.title_font_size
    }

    pub fn connector_width(&self) -> f32 {
        self.connector_width
    }

    /// Returns the parsed default connector [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn connector_color(&self) -> Result<Color, String> {
        Color::new(&self.connector_color)
            .map_err(|err| format!("Invalid connector color in config: {err}"))
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn with_title_font_size(mut self, size: u16) -> Self {
        self.title_font_size = size;
        self
    }

    pub fn with_connector_color(mut self, color: impl Into<String>) -> Self {
        self.connector_color = color.into();
        self
    }

    fn validate(&self) -> Result<(), String> {
        if self.title_font_size == 0 {
            return Err("style.title_font_size must be positive".to_string());
        }
        if !(self.connector_width.is_finite() && self.connector_width > 0.0) {
            return Err(format!(
                "style.connector_width must be positive, got {}",
                self.connector_width
            ));
        }
        self.connector_color().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.canvas().scale(), 80.0);
        assert_eq!(config.canvas().margin(), 0.5);
        assert_eq!(config.canvas().pixel_ratio(), 2.0);
        assert_eq!(config.canvas().background_color().unwrap(), Color::white());
        assert_eq!(config.style().font_family(), "sans-serif");
        assert_eq!(config.style().mono_font_family(), "monospace");
        assert_eq!(config.style().title_font_size(), 16);
        assert_eq!(config.style().connector_width(), 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = AppConfig::new(
            CanvasConfig::default().with_scale(0.0),
            StyleConfig::default(),
        );
        assert!(config.validate().unwrap_err().contains("canvas.scale"));

        let config = AppConfig::new(
            CanvasConfig::default().with_margin(-1.0),
            StyleConfig::default(),
        );
        assert!(config.validate().unwrap_err().contains("canvas.margin"));

        let config = AppConfig::new(
            CanvasConfig::default().with_background_color("not-a-color"),
            StyleConfig::default(),
        );
        assert!(config.validate().unwrap_err().contains("background color"));

        let config = AppConfig::new(
            CanvasConfig::default(),
            StyleConfig::default().with_connector_color("#GGG"),
        );
        assert!(config.validate().unwrap_err().contains("connector color"));
    }

    #[test]
    fn test_background_override() {
        let canvas = CanvasConfig::default().with_background_color("#F5F5F5");
        assert_eq!(
            canvas.background_color().unwrap(),
            Color::new("#F5F5F5").unwrap()
        );
    }
}
