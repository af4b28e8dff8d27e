//! Error types for pixplot-core.

use thiserror::Error;

/// Errors raised while building or encoding a raster.
///
/// Drawing itself never fails; only construction and I/O do.
#[derive(Debug, Error)]
pub enum RasterError {
    /// Width or height is zero, or the pixel count does not fit in memory.
    #[error("invalid raster dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// IO error while writing an encoded image.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while decoding a plain PPM document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PpmError {
    /// The document does not start with `P3`.
    #[error("bad magic number: expected P3, found {0:?}")]
    BadMagic(String),

    /// A header field or sample is missing.
    #[error("unexpected end of document while reading {0}")]
    UnexpectedEof(&'static str),

    /// A token is not a decimal integer.
    #[error("invalid number {token:?} in {field}")]
    InvalidNumber { field: &'static str, token: String },

    /// Only 8-bit channels are supported.
    #[error("unsupported max channel value {0} (expected 255)")]
    UnsupportedMaxValue(u32),

    /// A channel sample is larger than the declared max value.
    #[error("channel value {0} out of range")]
    ChannelOutOfRange(u32),

    /// Header dimensions cannot hold a raster.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// More samples than the header declares.
    #[error("trailing data after {expected} samples")]
    TrailingData { expected: usize },
}
