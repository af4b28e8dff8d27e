//! Normalized-coordinate charts on top of a [`RasterBuffer`].
//!
//! Plot calls take coordinates in the unit square `[0, 1] × [0, 1]` with the
//! origin in the lower-left corner. A point maps to pixels as
//!
//! ```text
//! px = margin + floor(x * plot_width)
//! py = margin + floor((1 - y) * plot_height)
//! ```
//!
//! Inputs are not clamped to the unit square; anything mapped off the canvas
//! is dropped by the raster. Points far outside are pulled in to a guard band
//! just beyond the canvas and line segments are clipped to it, so huge or
//! infinite coordinates stay off-canvas and cost no more than a
//! canvas-sized walk. NaN coordinates draw nothing.
//!
//! # Example
//!
//! ```
//! use pixplot::{ChartSurface, ColorName};
//!
//! let mut chart = ChartSurface::new(100, 100, 8)?;
//! chart.draw_grid(4, 4, None);
//! chart.plot_sample(0.5, 0.5, None);
//! chart.plot_line(0.0, 0.0, 1.0, 1.0, Some(ColorName::Green.into()), None);
//! chart.draw_axis();
//!
//! let ppm = chart.export_image();
//! assert!(ppm.starts_with("P3 116 116 255\n"));
//! # Ok::<(), pixplot::PlotError>(())
//! ```

use crate::config::ChartConfig;
use crate::error::PlotError;
use pixplot_core::{
    resolve, Canvas, Color, ColorSpec, PixelPoint, PixelRect, RasterBuffer, Stroke,
};
use tracing::{debug, trace};

/// Thickness of grid lines.
pub const GRID_THICKNESS: u32 = 1;

/// Thickness of the axis lines.
pub const AXIS_THICKNESS: u32 = 1;

/// Lifecycle of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartState {
    /// Accepting plot operations, never exported.
    #[default]
    Building,
    /// Exported at least once. Further drawing is allowed; the image already
    /// handed out just won't include it.
    Finalized,
}

/// A chart: plot area surrounded by a margin, backed by one raster.
#[derive(Debug, Clone)]
pub struct ChartSurface {
    config: ChartConfig,
    buffer: RasterBuffer,
    state: ChartState,
    unexported_changes: bool,
}

impl ChartSurface {
    /// Create a chart with the given plot size and margin and default styling.
    ///
    /// The canvas is `(plot_width + 2·margin) × (plot_height + 2·margin)` and
    /// starts out white.
    pub fn new(plot_width: u32, plot_height: u32, margin: u32) -> Result<Self, PlotError> {
        Self::with_config(&ChartConfig::with_size(plot_width, plot_height, margin))
    }

    /// Create a chart from a full config.
    pub fn with_config(config: &ChartConfig) -> Result<Self, PlotError> {
        let (width, height) = config.canvas_size().ok_or(PlotError::InvalidPlotArea {
            width: config.width,
            height: config.height,
            margin: config.margin,
        })?;
        config.validate()?;

        let mut buffer = RasterBuffer::new(width, height)?;
        buffer.fill(resolve(Some(config.background), None));

        debug!(
            plot_width = config.width,
            plot_height = config.height,
            margin = config.margin,
            "created chart"
        );

        Ok(Self {
            config: config.clone(),
            buffer,
            state: ChartState::Building,
            unexported_changes: true,
        })
    }

    /// Plot area width in pixels.
    #[must_use]
    pub const fn plot_width(&self) -> u32 {
        self.config.width
    }

    /// Plot area height in pixels.
    #[must_use]
    pub const fn plot_height(&self) -> u32 {
        self.config.height
    }

    /// Margin in pixels.
    #[must_use]
    pub const fn margin(&self) -> u32 {
        self.config.margin
    }

    /// The styling this chart was created with.
    #[must_use]
    pub const fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> ChartState {
        self.state
    }

    /// Whether anything was drawn since the last export.
    #[must_use]
    pub const fn has_unexported_changes(&self) -> bool {
        self.unexported_changes
    }

    /// The backing raster.
    #[must_use]
    pub const fn buffer(&self) -> &RasterBuffer {
        &self.buffer
    }

    /// Consume the chart, keeping the raster.
    #[must_use]
    pub fn into_buffer(self) -> RasterBuffer {
        self.buffer
    }

    /// Map a normalized point to pixel coordinates.
    ///
    /// Points beyond the guard band around the canvas are clamped onto it,
    /// where no marker or pen can reach a visible pixel.
    #[must_use]
    pub fn map(&self, x: f64, y: f64) -> PixelPoint {
        let reach = self.config.marker_radius.max(self.config.line_thickness);
        self.guard_band(reach).clamp(self.project(x, y))
    }

    /// Pixel-space position of a normalized point, floored but unbounded.
    fn project(&self, x: f64, y: f64) -> (f64, f64) {
        let margin = f64::from(self.config.margin);
        let px = margin + (x * f64::from(self.config.width)).floor();
        let py = margin + ((1.0 - y) * f64::from(self.config.height)).floor();
        (
            px.clamp(-PROJECTION_LIMIT, PROJECTION_LIMIT),
            py.clamp(-PROJECTION_LIMIT, PROJECTION_LIMIT),
        )
    }

    /// Box that a shape reaching `reach` pixels from its anchor cannot leave
    /// the canvas from.
    fn guard_band(&self, reach: u32) -> GuardBand {
        let (width, height) = self.buffer.dimensions();
        let pad = f64::from(reach) + 2.0;
        GuardBand {
            x0: -pad,
            y0: -pad,
            x1: f64::from(width) + pad,
            y1: f64::from(height) + pad,
        }
    }

    /// Plot a sample as a small circle marker.
    ///
    /// `None` uses the configured sample color (blue by default).
    pub fn plot_sample(&mut self, x: f64, y: f64, color: Option<ColorSpec>) {
        self.touch();
        let center = self.map(x, y);
        let color = resolve(color, Some(self.config.sample_color));
        let radius = i32::try_from(self.config.marker_radius).unwrap_or(i32::MAX);
        self.buffer.draw_circle(center, radius, color);
    }

    /// Plot every sample of `points` with the same color.
    pub fn plot_samples<I>(&mut self, points: I, color: Option<ColorSpec>)
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        for (x, y) in points {
            self.plot_sample(x, y, color);
        }
    }

    /// Plot a line segment between two normalized points.
    ///
    /// `None` uses the configured line color (red by default, so lines stay
    /// distinguishable from samples). A thickness of `None` or `Some(0)`
    /// uses the configured line thickness (2 by default).
    pub fn plot_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Option<ColorSpec>,
        thickness: Option<u32>,
    ) {
        self.touch();
        let thickness = match thickness {
            Some(t) if t > 0 => t,
            _ => self.config.line_thickness,
        };
        let (a, b) = (self.project(x1, y1), self.project(x2, y2));
        if [a.0, a.1, b.0, b.1].iter().any(|v| v.is_nan()) {
            return;
        }
        let Some((from, to)) = self.guard_band(thickness).clip(a, b) else {
            return;
        };
        let color = resolve(color, Some(self.config.line_color));
        self.buffer
            .draw_line(from, to, Stroke::new(color).with_thickness(thickness));
    }

    /// Connect consecutive points with line segments.
    ///
    /// Fewer than two points draw nothing.
    pub fn plot_polyline(
        &mut self,
        points: &[(f64, f64)],
        color: Option<ColorSpec>,
        thickness: Option<u32>,
    ) {
        for pair in points.windows(2) {
            let ((x1, y1), (x2, y2)) = (pair[0], pair[1]);
            self.plot_line(x1, y1, x2, y2, color, thickness);
        }
    }

    /// Draw the coordinate axes as a black "L".
    ///
    /// The vertical axis runs down the left margin edge, the horizontal one
    /// along the bottom margin edge, each spanning the full plot extent.
    pub fn draw_axis(&mut self) {
        self.touch();
        let (width, height) = self.buffer.dimensions();
        let margin = self.config.margin as i32;
        let bottom = height as i32 - margin;
        let right = width as i32 - margin;
        let stroke = Stroke::new(Color::BLACK).with_thickness(AXIS_THICKNESS);

        self.buffer.draw_line(
            PixelPoint::new(margin, margin),
            PixelPoint::new(margin, bottom),
            stroke,
        );
        self.buffer.draw_line(
            PixelPoint::new(margin, bottom),
            PixelPoint::new(right, bottom),
            stroke,
        );
    }

    /// Draw `cols + 1` vertical and `rows + 1` horizontal grid lines.
    ///
    /// Lines sit at `k / cols` and `k / rows` for integer `k`, so the last
    /// line always lands exactly on 1. A zero count draws no lines in that
    /// direction. `None` uses the configured grid color (light gray).
    pub fn draw_grid(&mut self, cols: u32, rows: u32, color: Option<ColorSpec>) {
        let color = Some(ColorSpec::from(resolve(color, Some(self.config.grid_color))));

        if cols > 0 {
            for k in 0..=cols {
                let x = f64::from(k) / f64::from(cols);
                self.plot_line(x, 0.0, x, 1.0, color, Some(GRID_THICKNESS));
            }
        }
        if rows > 0 {
            for k in 0..=rows {
                let y = f64::from(k) / f64::from(rows);
                self.plot_line(0.0, y, 1.0, y, color, Some(GRID_THICKNESS));
            }
        }
    }

    /// Fill the plot area (margin excluded) with a background color.
    ///
    /// Call it before drawing the grid and samples.
    pub fn fill_plot_area(&mut self, color: impl Into<ColorSpec>) {
        self.touch();
        let m = self.config.margin as i32;
        let rect = PixelRect::new(
            m,
            m,
            m + self.config.width as i32,
            m + self.config.height as i32,
        );
        self.buffer.fill_rect(rect, resolve(Some(color.into()), None));
    }

    /// Serialize the chart as a plain PPM document.
    ///
    /// Repeatable: exporting twice without drawing in between yields the same
    /// bytes.
    pub fn export_image(&mut self) -> String {
        trace!(
            width = self.buffer.width(),
            height = self.buffer.height(),
            "exporting chart"
        );
        self.state = ChartState::Finalized;
        self.unexported_changes = false;
        self.buffer.to_ppm()
    }

    fn touch(&mut self) {
        if self.state == ChartState::Finalized && !self.unexported_changes {
            debug!("drawing on a chart that was already exported");
        }
        self.unexported_changes = true;
    }
}

/// Largest magnitude kept by [`ChartSurface::project`]; differences of two
/// such values stay finite.
const PROJECTION_LIMIT: f64 = 1e300;

/// Axis-aligned pixel-space box, inclusive on all sides.
#[derive(Debug, Clone, Copy)]
struct GuardBand {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl GuardBand {
    /// Clamp a projected point into the band. NaN lands on the low edge.
    fn clamp(&self, (x, y): (f64, f64)) -> PixelPoint {
        let axis = |v: f64, lo: f64, hi: f64| if v.is_nan() { lo } else { v.clamp(lo, hi) };
        to_pixel((axis(x, self.x0, self.x1), axis(y, self.y0, self.y1)))
    }

    /// Liang-Barsky clip of the segment `a -> b`.
    ///
    /// Endpoints inside the band are returned unchanged; `None` when the
    /// segment misses the band entirely.
    fn clip(&self, a: (f64, f64), b: (f64, f64)) -> Option<(PixelPoint, PixelPoint)> {
        let (dx, dy) = (b.0 - a.0, b.1 - a.1);
        let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
        for (p, q) in [
            (-dx, a.0 - self.x0),
            (dx, self.x1 - a.0),
            (-dy, a.1 - self.y0),
            (dy, self.y1 - a.1),
        ] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
            } else if p < 0.0 {
                t0 = t0.max(q / p);
            } else {
                t1 = t1.min(q / p);
            }
        }
        if t0 > t1 {
            return None;
        }
        let at = |t: f64| (a.0 + t * dx, a.1 + t * dy);
        let from = if t0 > 0.0 { at(t0) } else { a };
        let to = if t1 < 1.0 { at(t1) } else { b };
        Some((to_pixel(from), to_pixel(to)))
    }
}

fn to_pixel((x, y): (f64, f64)) -> PixelPoint {
    PixelPoint::new(x.round() as i32, y.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixplot_core::ColorName;
    use proptest::prelude::*;

    fn chart_100() -> ChartSurface {
        ChartSurface::new(100, 100, 8).unwrap()
    }

    fn lit(chart: &ChartSurface, color: Color) -> Vec<(i32, i32)> {
        let width = chart.buffer().width() as usize;
        chart
            .buffer()
            .pixels()
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == color)
            .map(|(i, _)| ((i % width) as i32, (i / width) as i32))
            .collect()
    }

    // =========================================================================
    // Construction Tests
    // =========================================================================

    #[test]
    fn test_new_sizes_buffer_with_margin() {
        let chart = ChartSurface::new(512, 256, 8).unwrap();
        assert_eq!(chart.buffer().width(), 528);
        assert_eq!(chart.buffer().height(), 272);
        assert_eq!(chart.state(), ChartState::Building);
    }

    #[test]
    fn test_new_clears_to_white() {
        let chart = ChartSurface::new(10, 10, 2).unwrap();
        assert_eq!(chart.buffer().count(Color::WHITE), 14 * 14);
    }

    #[test]
    fn test_new_rejects_empty_plot_area() {
        assert!(matches!(
            ChartSurface::new(0, 10, 8),
            Err(PlotError::InvalidPlotArea { .. })
        ));
        assert!(ChartSurface::new(10, 0, 0).is_err());
    }

    #[test]
    fn test_new_rejects_overflowing_margin() {
        assert!(ChartSurface::new(10, 10, u32::MAX).is_err());
    }

    #[test]
    fn test_with_config_error_kinds() {
        let empty = ChartConfig::with_size(0, 10, 8);
        assert!(matches!(
            ChartSurface::with_config(&empty),
            Err(PlotError::InvalidPlotArea {
                width: 0,
                height: 10,
                margin: 8
            })
        ));
        let huge_marker = ChartConfig {
            marker_radius: ChartConfig::MAX_MARKER_RADIUS + 1,
            ..ChartConfig::default()
        };
        assert!(matches!(
            ChartSurface::with_config(&huge_marker),
            Err(PlotError::Config(_))
        ));
    }

    #[test]
    fn test_default_config_chart() {
        let chart = ChartSurface::with_config(&ChartConfig::default()).unwrap();
        assert_eq!(chart.buffer().dimensions(), (256, 256));
    }

    #[test]
    fn test_background_from_config() {
        let config = ChartConfig {
            background: ColorSpec::Rgb(0x101010),
            ..ChartConfig::with_size(4, 4, 1)
        };
        let chart = ChartSurface::with_config(&config).unwrap();
        assert_eq!(chart.buffer().count(Color::from_u32(0x101010)), 36);
    }

    // =========================================================================
    // Mapping Tests
    // =========================================================================

    #[test]
    fn test_map_corners() {
        let chart = chart_100();
        assert_eq!(chart.map(0.0, 0.0), PixelPoint::new(8, 108));
        assert_eq!(chart.map(1.0, 1.0), PixelPoint::new(108, 8));
        assert_eq!(chart.map(0.5, 0.5), PixelPoint::new(58, 58));
    }

    #[test]
    fn test_map_floors() {
        let chart = ChartSurface::new(3, 3, 0).unwrap();
        assert_eq!(chart.map(0.99, 0.01), PixelPoint::new(2, 2));
    }

    // =========================================================================
    // Sample Tests
    // =========================================================================

    #[test]
    fn test_plot_sample_centered_on_mapped_point() {
        let mut chart = chart_100();
        chart.plot_sample(0.5, 0.5, None);
        let pixels = lit(&chart, Color::BLUE);
        assert_eq!(pixels.len(), 4);
        let (sx, sy) = pixels
            .iter()
            .fold((0, 0), |(ax, ay), (x, y)| (ax + x, ay + y));
        assert_eq!((sx / 4, sy / 4), (58, 58));
        for p in [(57, 58), (59, 58), (58, 57), (58, 59)] {
            assert!(pixels.contains(&p), "{p:?} missing");
        }
    }

    #[test]
    fn test_plot_sample_color_override() {
        let mut chart = chart_100();
        chart.plot_sample(0.2, 0.2, Some(ColorSpec::Rgb(0xef563b)));
        assert_eq!(lit(&chart, Color::from_u32(0xef563b)).len(), 4);
        assert!(lit(&chart, Color::BLUE).is_empty());
    }

    #[test]
    fn test_plot_sample_on_border_is_clipped() {
        let mut chart = ChartSurface::new(10, 10, 0).unwrap();
        chart.plot_sample(0.0, 1.0, None);
        // center (0, 0): only the right and lower arms are on the canvas
        assert_eq!(lit(&chart, Color::BLUE), vec![(1, 0), (0, 1)]);
    }

    #[test]
    fn test_plot_samples_batch() {
        let mut chart = chart_100();
        chart.plot_samples([(0.1, 0.1), (0.9, 0.9)], Some(ColorName::Green.into()));
        assert_eq!(lit(&chart, Color::GREEN).len(), 8);
    }

    #[test]
    fn test_marker_radius_from_config() {
        let config = ChartConfig {
            marker_radius: 0,
            ..ChartConfig::with_size(10, 10, 0)
        };
        let mut chart = ChartSurface::with_config(&config).unwrap();
        chart.plot_sample(0.5, 0.5, None);
        assert_eq!(
            lit(&chart, Color::BLUE),
            vec![(4, 4), (6, 4), (5, 5), (4, 6), (6, 6)]
        );
    }

    // =========================================================================
    // Line Tests
    // =========================================================================

    #[test]
    fn test_plot_line_defaults_red_thickness_two() {
        let mut chart = chart_100();
        chart.plot_line(0.0, 0.5, 1.0, 0.5, None, None);
        // 101 samples, each a 2x2 stamp starting at the sample
        assert_eq!(lit(&chart, Color::RED).len(), 102 * 2);
        assert!(lit(&chart, Color::RED).contains(&(109, 59)));
    }

    #[test]
    fn test_plot_line_zero_thickness_means_default() {
        let mut a = chart_100();
        a.plot_line(0.1, 0.1, 0.8, 0.4, None, Some(0));
        let mut b = chart_100();
        b.plot_line(0.1, 0.1, 0.8, 0.4, None, None);
        assert_eq!(a.buffer(), b.buffer());
    }

    #[test]
    fn test_plot_line_explicit_thickness() {
        let mut chart = chart_100();
        chart.plot_line(0.5, 0.0, 0.5, 1.0, Some(ColorName::Black.into()), Some(1));
        assert_eq!(lit(&chart, Color::BLACK).len(), 101);
    }

    #[test]
    fn test_plot_polyline() {
        let mut chart = chart_100();
        chart.plot_polyline(&[(0.0, 0.0), (0.5, 0.0), (0.5, 0.5)], None, Some(1));
        let pixels = lit(&chart, Color::RED);
        assert!(pixels.contains(&(8, 108)));
        assert!(pixels.contains(&(58, 108)));
        assert!(pixels.contains(&(58, 58)));
        // shared corner is drawn once
        assert_eq!(pixels.len(), 51 + 50);
    }

    #[test]
    fn test_plot_polyline_single_point_draws_nothing() {
        let mut chart = chart_100();
        chart.plot_polyline(&[(0.5, 0.5)], None, None);
        assert!(lit(&chart, Color::RED).is_empty());
    }

    // =========================================================================
    // Axis / Grid / Area Tests
    // =========================================================================

    #[test]
    fn test_draw_axis_is_an_l() {
        let mut chart = chart_100();
        chart.draw_axis();
        let pixels = lit(&chart, Color::BLACK);
        // vertical: x=8, y in 8..=108; horizontal: y=108, x in 8..=108
        assert_eq!(pixels.len(), 101 + 100);
        assert!(pixels.iter().all(|&(x, y)| x == 8 || y == 108));
        assert!(pixels.contains(&(8, 8)));
        assert!(pixels.contains(&(108, 108)));
    }

    #[test]
    fn test_far_and_infinite_coordinates_stay_off_canvas() {
        let mut chart = chart_100();
        let before = chart.buffer().clone();
        for v in [1e12, -1e12, f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            chart.plot_sample(v, 0.5, None);
            chart.plot_sample(0.5, v, None);
            chart.plot_sample(v, v, None);
            chart.plot_line(v, v, v, -v, None, Some(3));
            chart.plot_line(v, 2.0, -v, 2.0, None, None);
        }
        assert_eq!(chart.buffer(), &before);
    }

    #[test]
    fn test_far_line_endpoint_keeps_visible_part() {
        let mut chart = chart_100();
        chart.plot_line(0.5, 0.5, 0.5, -1e12, Some(ColorName::Black.into()), Some(1));
        let pixels = lit(&chart, Color::BLACK);
        // x = 58 from the sample at y = 58 down to the bottom edge
        assert!(pixels.iter().all(|&(x, _)| x == 58));
        assert_eq!(pixels.len(), 116 - 58);

        let mut infinite = chart_100();
        infinite.plot_line(0.5, 0.5, 0.5, f64::NEG_INFINITY, Some(ColorName::Black.into()), Some(1));
        assert_eq!(lit(&infinite, Color::BLACK), pixels);
    }

    #[test]
    fn test_far_diagonal_keeps_its_slope() {
        let mut near = chart_100();
        near.plot_line(0.0, 0.0, 1.0, 1.0, Some(ColorName::Black.into()), Some(1));
        let mut far = chart_100();
        far.plot_line(-1e9, -1e9, 1e9, 1e9, Some(ColorName::Black.into()), Some(1));
        let on_diagonal = |pixels: &[(i32, i32)]| {
            pixels.iter().all(|&(x, y)| (x + y - 116).abs() <= 1)
        };
        let far_pixels = lit(&far, Color::BLACK);
        assert!(on_diagonal(&lit(&near, Color::BLACK)));
        assert!(on_diagonal(&far_pixels));
        assert!(far_pixels.contains(&(58, 58)));
    }

    #[test]
    fn test_map_clamps_to_guard_band() {
        let chart = chart_100();
        let far = chart.map(1e12, -1e12);
        assert!(far.x > 116 && far.x < 116 + 10);
        assert!(far.y > 116 && far.y < 116 + 10);
        let nan = chart.map(f64::NAN, 0.5);
        assert!(nan.x < 0);
    }

    #[test]
    fn test_draw_grid_default_color() {
        let mut chart = ChartSurface::new(4, 4, 0).unwrap();
        chart.draw_grid(1, 1, None);
        // vertical at x=0 and x=4 (off canvas), horizontal at y=4 (off) and y=0
        let pixels = lit(&chart, Color::LIGHT_GRAY);
        assert_eq!(pixels.len(), 4 + 4 - 1);
    }

    #[test]
    fn test_draw_grid_positions() {
        let mut chart = chart_100();
        chart.draw_grid(4, 4, Some(ColorName::Black.into()));
        let pixels = lit(&chart, Color::BLACK);
        let mut columns: Vec<i32> = pixels
            .iter()
            .filter(|&&(_, y)| y == 30)
            .map(|&(x, _)| x)
            .collect();
        columns.sort_unstable();
        assert_eq!(columns, vec![8, 33, 58, 83, 108]);
        let mut rows: Vec<i32> = pixels
            .iter()
            .filter(|&&(x, _)| x == 20)
            .map(|&(_, y)| y)
            .collect();
        rows.sort_unstable();
        assert_eq!(rows, vec![8, 33, 58, 83, 108]);
    }

    #[test]
    fn test_draw_grid_zero_counts() {
        let mut chart = chart_100();
        chart.draw_grid(0, 0, Some(ColorName::Black.into()));
        assert!(lit(&chart, Color::BLACK).is_empty());
    }

    #[test]
    fn test_fill_plot_area_leaves_margin() {
        let mut chart = ChartSurface::new(10, 6, 3).unwrap();
        chart.fill_plot_area(0xe5ecf6_u32);
        let fill = Color::from_u32(0xe5ecf6);
        assert_eq!(chart.buffer().count(fill), 60);
        assert_eq!(chart.buffer().pixel(PixelPoint::new(2, 3)), Some(Color::WHITE));
        assert_eq!(chart.buffer().pixel(PixelPoint::new(3, 3)), Some(fill));
        assert_eq!(chart.buffer().pixel(PixelPoint::new(12, 8)), Some(fill));
        assert_eq!(chart.buffer().pixel(PixelPoint::new(13, 8)), Some(Color::WHITE));
    }

    // =========================================================================
    // Export Tests
    // =========================================================================

    #[test]
    fn test_export_is_repeatable() {
        let mut chart = chart_100();
        chart.plot_sample(0.3, 0.7, None);
        let first = chart.export_image();
        assert_eq!(chart.state(), ChartState::Finalized);
        assert!(!chart.has_unexported_changes());
        assert_eq!(chart.export_image(), first);
    }

    #[test]
    fn test_draw_after_export_is_allowed() {
        let mut chart = chart_100();
        let first = chart.export_image();
        chart.plot_sample(0.3, 0.7, None);
        assert!(chart.has_unexported_changes());
        assert_eq!(chart.state(), ChartState::Finalized);
        assert_ne!(chart.export_image(), first);
    }

    proptest! {
        #[test]
        fn prop_map_stays_in_canvas_for_unit_square(
            w in 1u32..300, h in 1u32..300, m in 0u32..20, x in 0.0f64..=1.0, y in 0.0f64..=1.0
        ) {
            let chart = ChartSurface::new(w, h, m).unwrap();
            let p = chart.map(x, y);
            prop_assert!(p.x >= m as i32 && p.x <= (m + w) as i32);
            prop_assert!(p.y >= m as i32 && p.y <= (m + h) as i32);
        }
    }
}
