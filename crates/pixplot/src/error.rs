//! Error types for pixplot.

use pixplot_core::RasterError;
use thiserror::Error;

/// Errors that can occur while building, configuring or saving a chart.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Plot area is empty or the padded canvas does not fit in `u32`.
    #[error("invalid plot area {width}x{height} with margin {margin}")]
    InvalidPlotArea { width: u32, height: u32, margin: u32 },

    /// Underlying raster failure.
    #[error("raster error: {0}")]
    Raster(#[from] RasterError),

    /// Configuration could not be loaded or is invalid.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The image could not be persisted.
    #[error("sink error: {0}")]
    Sink(#[from] SinkError),
}

/// Errors from loading a [`ChartConfig`](crate::ChartConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML or YAML syntax / schema error.
    #[error("parse error: {0}")]
    Parse(String),

    /// File extension is not `.toml`, `.yaml` or `.yml`.
    #[error("unsupported config format: {0:?}")]
    UnsupportedFormat(String),

    /// A value is out of range.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Errors from an [`ImageSink`](crate::ImageSink).
#[derive(Debug, Error)]
pub enum SinkError {
    /// Writing the image failed.
    #[error("IO error writing {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Name is empty or would escape the sink's root.
    #[error("invalid image name {0:?}")]
    InvalidName(String),
}
