//! pixplot: tiny raster charts for training curves and scatter plots.
//!
//! Charts are drawn in normalized coordinates (the unit square, origin
//! bottom-left) onto a software raster and exported as plain PPM text.
//!
//! - [`ChartSurface`]: margin, coordinate mapping, samples, lines, axis, grid
//! - [`ChartConfig`]: sizes and default colors, loadable from TOML or YAML
//! - [`ImageSink`]: where exported images go ([`FileSink`], [`MemorySink`])
//!
//! The raster primitives live in [`pixplot_core`] and are re-exported here.
//!
//! # Example
//!
//! ```
//! use pixplot::{save_chart, ChartSurface, MemorySink};
//!
//! let losses = [1.0, 0.6, 0.4, 0.3, 0.25];
//! let points: Vec<(f64, f64)> = losses
//!     .iter()
//!     .enumerate()
//!     .map(|(epoch, &loss)| (epoch as f64 / 4.0, loss))
//!     .collect();
//!
//! let mut chart = ChartSurface::new(240, 240, 8)?;
//! chart.plot_polyline(&points, None, None);
//! chart.draw_axis();
//!
//! let mut sink = MemorySink::new();
//! save_chart(&mut chart, &mut sink, "loss_curve.ppm")?;
//! assert!(sink.get("loss_curve.ppm").is_some());
//! # Ok::<(), pixplot::PlotError>(())
//! ```

mod chart;
mod config;
mod error;
mod sink;

pub use chart::{ChartState, ChartSurface, AXIS_THICKNESS, GRID_THICKNESS};
pub use config::ChartConfig;
pub use error::{ConfigError, PlotError, SinkError};
pub use sink::{save_chart, FileSink, ImageSink, MemorySink};

pub use pixplot_core::{
    ppm, resolve, Canvas, Color, ColorName, ColorParseError, ColorSpec, PixelPoint, PixelRect,
    PpmError, RasterBuffer, RasterError, Stroke,
};
