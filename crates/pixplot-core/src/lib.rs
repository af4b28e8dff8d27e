//! Core raster types for pixplot.
//!
//! This crate provides the software rasterizer the charts are drawn on:
//! - Colors: packed 24-bit [`Color`], symbolic [`ColorSpec`], [`resolve`]
//! - Pixel geometry: [`PixelPoint`], [`PixelRect`], [`Stroke`]
//! - Drawing: the [`Canvas`] trait (lines, midpoint circles, filled discs)
//! - Storage: [`RasterBuffer`], a flat row-major pixel arena
//! - Serialization: the plain PPM codec in [`ppm`]
//!
//! Drawing never fails. Anything that lands outside the buffer is dropped.
//!
//! # Example
//!
//! ```
//! use pixplot_core::{Canvas, Color, PixelPoint, RasterBuffer, Stroke};
//!
//! let mut buffer = RasterBuffer::new(16, 16)?;
//! buffer.fill(Color::WHITE);
//! buffer.draw_line(PixelPoint::new(0, 0), PixelPoint::new(15, 15), Stroke::new(Color::RED));
//! buffer.draw_circle(PixelPoint::new(8, 8), 4, Color::BLUE);
//!
//! let ppm = buffer.to_ppm();
//! assert!(ppm.starts_with("P3 16 16 255\n"));
//! # Ok::<(), pixplot_core::RasterError>(())
//! ```

mod canvas;
mod color;
mod error;
mod geometry;
pub mod ppm;
mod raster;

pub use canvas::Canvas;
pub use color::{resolve, Color, ColorName, ColorParseError, ColorSpec};
pub use error::{PpmError, RasterError};
pub use geometry::{PixelPoint, PixelRect, Stroke};
pub use raster::RasterBuffer;
