//! The `Canvas` trait and the rasterization algorithms built on it.
//!
//! Implementors only provide [`Canvas::dimensions`] and [`Canvas::set_pixel`];
//! every shape primitive is a provided method, so all targets share one
//! clipping policy: pixels outside the canvas are dropped without error.

use crate::geometry::{PixelPoint, PixelRect, Stroke};
use crate::Color;

/// Round half toward positive infinity (`2.5 -> 3`, `-2.5 -> -2`).
pub(crate) fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// A writable pixel surface.
pub trait Canvas {
    /// Canvas size as `(width, height)`.
    fn dimensions(&self) -> (u32, u32);

    /// Write one pixel. Out-of-bounds writes must be silently ignored.
    fn set_pixel(&mut self, point: PixelPoint, color: Color);

    /// Rectangle covering the whole canvas.
    fn bounds(&self) -> PixelRect {
        let (width, height) = self.dimensions();
        PixelRect::from_size(width, height)
    }

    /// Fill the half-open rectangle, clipped to the canvas.
    fn fill_rect(&mut self, rect: PixelRect, color: Color) {
        let Some(clipped) = rect.intersection(&self.bounds()) else {
            return;
        };
        for y in clipped.y0..clipped.y1 {
            for x in clipped.x0..clipped.x1 {
                self.set_pixel(PixelPoint::new(x, y), color);
            }
        }
    }

    /// Fill the whole canvas.
    fn fill(&mut self, color: Color) {
        let bounds = self.bounds();
        self.fill_rect(bounds, color);
    }

    /// Draw a straight segment with a square pen.
    ///
    /// Walks `max(|dx|, |dy|) + 1` evenly spaced samples from `from` to `to`
    /// and stamps a `pen × pen` square at each rounded sample.
    fn draw_line(&mut self, from: PixelPoint, to: PixelPoint, stroke: Stroke) {
        let pen = stroke.pen();
        let dx = f64::from(to.x) - f64::from(from.x);
        let dy = f64::from(to.y) - f64::from(from.y);
        let steps = round_half_up(dx.abs().max(dy.abs())) as i64;

        if steps == 0 {
            self.fill_rect(PixelRect::square_around(from, pen), stroke.color);
            return;
        }

        let (step_x, step_y) = (dx / steps as f64, dy / steps as f64);
        let (mut x, mut y) = (f64::from(from.x), f64::from(from.y));
        for _ in 0..=steps {
            let sample = PixelPoint::new(round_half_up(x) as i32, round_half_up(y) as i32);
            self.fill_rect(PixelRect::square_around(sample, pen), stroke.color);
            x += step_x;
            y += step_y;
        }
    }

    /// Draw a circle outline with the midpoint algorithm.
    ///
    /// The octant is plotted once at the start and again after every step,
    /// including the step that ends the loop. For `r = 0` that last step
    /// lands on `(1, -1)`, so the center and its four diagonal neighbours are
    /// lit. A negative radius draws nothing.
    fn draw_circle(&mut self, center: PixelPoint, radius: i32, color: Color) {
        if radius < 0 {
            return;
        }

        let mut plot_octants = |x: i32, y: i32| {
            for (ox, oy) in [
                (x, y),
                (-x, y),
                (x, -y),
                (-x, -y),
                (y, x),
                (-y, x),
                (y, -x),
                (-y, -x),
            ] {
                let p = PixelPoint::new(center.x.saturating_add(ox), center.y.saturating_add(oy));
                self.set_pixel(p, color);
            }
        };

        let (mut x, mut y) = (0_i32, radius);
        let mut d = 3 - 2 * i64::from(radius);
        plot_octants(x, y);
        while y >= x {
            if d > 0 {
                y -= 1;
                d += 4 * (i64::from(x) - i64::from(y)) + 10;
            } else {
                d += 4 * i64::from(x) + 6;
            }
            x += 1;
            plot_octants(x, y);
        }
    }

    /// Draw a filled disc, one horizontal span per row.
    ///
    /// Row `cy + y` covers `[cx - s, cx + s]` with `s = round(sqrt(r² - y²))`.
    /// This is independent of [`Canvas::draw_circle`]; the two boundaries
    /// need not coincide.
    fn draw_filled_circle(&mut self, center: PixelPoint, radius: i32, color: Color) {
        if radius < 0 {
            return;
        }

        let r2 = i64::from(radius) * i64::from(radius);
        for dy in -radius..=radius {
            let span = round_half_up(((r2 - i64::from(dy) * i64::from(dy)) as f64).sqrt()) as i32;
            let row = center.y.saturating_add(dy);
            self.fill_rect(
                PixelRect::new(
                    center.x.saturating_sub(span),
                    row,
                    center.x.saturating_add(span).saturating_add(1),
                    row.saturating_add(1),
                ),
                color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    /// Sparse canvas recording every write, including repeated ones.
    struct RecordingCanvas {
        width: u32,
        height: u32,
        writes: BTreeMap<(i32, i32), Color>,
        write_count: usize,
    }

    impl RecordingCanvas {
        fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                writes: BTreeMap::new(),
                write_count: 0,
            }
        }
    }

    impl Canvas for RecordingCanvas {
        fn dimensions(&self) -> (u32, u32) {
            (self.width, self.height)
        }

        fn set_pixel(&mut self, point: PixelPoint, color: Color) {
            if self.bounds().contains(point) {
                self.writes.insert((point.x, point.y), color);
                self.write_count += 1;
            }
        }
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(1.49), 1.0);
    }

    #[test]
    fn test_fill_rect_goes_through_set_pixel() {
        let mut canvas = RecordingCanvas::new(4, 4);
        canvas.fill_rect(PixelRect::new(-2, -2, 2, 1), Color::RED);
        assert_eq!(canvas.write_count, 2);
        assert!(canvas.writes.contains_key(&(0, 0)));
        assert!(canvas.writes.contains_key(&(1, 0)));
    }

    #[test]
    fn test_fill_rect_fully_outside_is_noop() {
        let mut canvas = RecordingCanvas::new(4, 4);
        canvas.fill_rect(PixelRect::new(10, 10, 20, 20), Color::RED);
        assert_eq!(canvas.write_count, 0);
    }

    #[test]
    fn test_draw_circle_radius_zero_lights_center_and_diagonals() {
        let mut canvas = RecordingCanvas::new(5, 5);
        canvas.draw_circle(PixelPoint::new(2, 2), 0, Color::RED);
        let points: Vec<_> = canvas.writes.keys().copied().collect();
        assert_eq!(points, vec![(1, 1), (1, 3), (2, 2), (3, 1), (3, 3)]);
    }

    #[test]
    fn test_shapes_at_extreme_coordinates_do_not_overflow() {
        let mut canvas = RecordingCanvas::new(8, 8);
        for center in [
            PixelPoint::new(i32::MAX, i32::MAX),
            PixelPoint::new(i32::MIN, i32::MIN),
            PixelPoint::new(i32::MAX, 3),
        ] {
            canvas.draw_circle(center, 5, Color::RED);
            canvas.draw_filled_circle(center, 5, Color::RED);
            canvas.fill_rect(PixelRect::square_around(center, 3), Color::RED);
        }
        assert_eq!(canvas.write_count, 0);
    }

    #[test]
    fn test_draw_line_zero_length_draws_one_point() {
        let mut canvas = RecordingCanvas::new(8, 8);
        canvas.draw_line(
            PixelPoint::new(3, 3),
            PixelPoint::new(3, 3),
            Stroke::new(Color::BLUE),
        );
        assert_eq!(canvas.writes.len(), 1);
        assert_eq!(canvas.writes.get(&(3, 3)), Some(&Color::BLUE));
    }

    #[test]
    fn test_draw_line_diagonal_samples() {
        let mut canvas = RecordingCanvas::new(8, 8);
        canvas.draw_line(
            PixelPoint::new(0, 0),
            PixelPoint::new(4, 2),
            Stroke::new(Color::RED),
        );
        let points: Vec<_> = canvas.writes.keys().copied().collect();
        assert_eq!(points, vec![(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)]);
    }

    #[test]
    fn test_draw_line_thickness_stamps_squares() {
        let mut canvas = RecordingCanvas::new(8, 8);
        canvas.draw_line(
            PixelPoint::new(1, 1),
            PixelPoint::new(1, 1),
            Stroke::new(Color::RED).with_thickness(2),
        );
        let points: Vec<_> = canvas.writes.keys().copied().collect();
        assert_eq!(points, vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_draw_circle_radius_one_is_a_plus() {
        let mut canvas = RecordingCanvas::new(5, 5);
        canvas.draw_circle(PixelPoint::new(2, 2), 1, Color::BLUE);
        let points: Vec<_> = canvas.writes.keys().copied().collect();
        assert_eq!(points, vec![(1, 2), (2, 1), (2, 3), (3, 2)]);
    }

    #[test]
    fn test_draw_circle_negative_radius_draws_nothing() {
        let mut canvas = RecordingCanvas::new(5, 5);
        canvas.draw_circle(PixelPoint::new(2, 2), -1, Color::BLUE);
        canvas.draw_filled_circle(PixelPoint::new(2, 2), -3, Color::BLUE);
        assert_eq!(canvas.write_count, 0);
    }

    #[test]
    fn test_draw_filled_circle_radius_one() {
        let mut canvas = RecordingCanvas::new(5, 5);
        canvas.draw_filled_circle(PixelPoint::new(2, 2), 1, Color::GREEN);
        // rows -1 and +1 have span round(sqrt(0)) = 0, row 0 has span 1
        let points: Vec<_> = canvas.writes.keys().copied().collect();
        assert_eq!(points, vec![(1, 2), (2, 1), (2, 2), (2, 3), (3, 2)]);
    }
}
