//! Chart defaults loadable from TOML or YAML.
//!
//! Every field is optional in a config file; missing fields take the
//! built-in defaults.
//!
//! ```toml
//! width = 512
//! height = 256
//! background = "white"
//! sample_color = "#636dfa"
//! ```

use crate::error::ConfigError;
use pixplot_core::{Color, ColorName, ColorSpec};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Size, margin and default styling of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Plot area width in pixels (margin excluded).
    pub width: u32,
    /// Plot area height in pixels (margin excluded).
    pub height: u32,
    /// Border around the plot area, in pixels.
    pub margin: u32,
    /// Color the whole canvas is cleared to.
    pub background: ColorSpec,
    /// Default color of sample markers.
    pub sample_color: ColorSpec,
    /// Default color of plotted lines.
    pub line_color: ColorSpec,
    /// Default thickness of plotted lines.
    pub line_thickness: u32,
    /// Default color of grid lines.
    pub grid_color: ColorSpec,
    /// Radius of the sample marker circle.
    pub marker_radius: u32,
}

impl ChartConfig {
    /// Default plot width.
    pub const DEFAULT_WIDTH: u32 = 240;
    /// Default plot height.
    pub const DEFAULT_HEIGHT: u32 = 240;
    /// Default margin.
    pub const DEFAULT_MARGIN: u32 = 8;
    /// Default line thickness.
    pub const DEFAULT_LINE_THICKNESS: u32 = 2;
    /// Default marker radius.
    pub const DEFAULT_MARKER_RADIUS: u32 = 1;
    /// Largest accepted marker radius.
    pub const MAX_MARKER_RADIUS: u32 = 1 << 15;

    /// Config with the given plot size and margin, other fields default.
    #[must_use]
    pub fn with_size(width: u32, height: u32, margin: u32) -> Self {
        Self {
            width,
            height,
            margin,
            ..Self::default()
        }
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from a YAML string.
    pub fn from_yaml(yaml_str: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml_ng::from_str(yaml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a TOML string.
    #[must_use]
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Load a config file, picking the format from its extension.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let contents = std::fs::read_to_string(path)?;
        match extension.as_str() {
            "toml" => Self::from_toml(&contents),
            "yaml" | "yml" => Self::from_yaml(&contents),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Full canvas size, plot area plus margin on every side.
    ///
    /// `None` when the plot area is empty or the size overflows `u32`.
    #[must_use]
    pub fn canvas_size(&self) -> Option<(u32, u32)> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let border = self.margin.checked_mul(2)?;
        Some((
            self.width.checked_add(border)?,
            self.height.checked_add(border)?,
        ))
    }

    /// Check that the config describes a drawable chart.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_size().is_none() {
            return Err(ConfigError::InvalidValue(format!(
                "plot area {}x{} with margin {} is empty or too large",
                self.width, self.height, self.margin
            )));
        }
        if self.marker_radius > Self::MAX_MARKER_RADIUS {
            return Err(ConfigError::InvalidValue(format!(
                "marker_radius {} exceeds {}",
                self.marker_radius,
                Self::MAX_MARKER_RADIUS
            )));
        }
        Ok(())
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            margin: Self::DEFAULT_MARGIN,
            background: ColorSpec::Named(ColorName::White),
            sample_color: ColorSpec::Named(ColorName::Blue),
            line_color: ColorSpec::Named(ColorName::Red),
            line_thickness: Self::DEFAULT_LINE_THICKNESS,
            grid_color: ColorSpec::from(Color::LIGHT_GRAY),
            marker_radius: Self::DEFAULT_MARKER_RADIUS,
        }
    }
}
