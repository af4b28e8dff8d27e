//! Integer pixel geometry: `PixelPoint`, `PixelRect`, `Stroke`.

use crate::Color;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A pixel position. Origin is the top-left corner, y grows downward.
///
/// Coordinates are signed so that shapes may extend past the buffer edges;
/// the canvas drops whatever falls outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
}

impl PixelPoint {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    #[must_use]
    pub const fn distance_squared(&self, other: &Self) -> i64 {
        let dx = self.x as i64 - other.x as i64;
        let dy = self.y as i64 - other.y as i64;
        dx * dx + dy * dy
    }
}

impl Add for PixelPoint {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for PixelPoint {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl From<(i32, i32)> for PixelPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Half-open pixel rectangle `[x0, x1) × [y0, y1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelRect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl PixelRect {
    /// Create a rectangle from its corners.
    #[must_use]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Rectangle covering a whole `width × height` buffer.
    #[must_use]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width as i32, height as i32)
    }

    /// A `side × side` square centered on `center`.
    ///
    /// Even sides cannot be centered exactly; the extra pixel goes to the
    /// right and bottom, so side 1 and 2 both start at `center`. Corners
    /// saturate at the `i32` range.
    #[must_use]
    pub const fn square_around(center: PixelPoint, side: u32) -> Self {
        let side = if side > i32::MAX as u32 {
            i32::MAX
        } else {
            side as i32
        };
        let offset = side.saturating_sub(1) / 2;
        let x0 = center.x.saturating_sub(offset);
        let y0 = center.y.saturating_sub(offset);
        Self::new(x0, y0, x0.saturating_add(side), y0.saturating_add(side))
    }

    /// Width in pixels (zero if inverted).
    #[must_use]
    pub const fn width(&self) -> u32 {
        if self.x1 > self.x0 {
            self.x1.abs_diff(self.x0)
        } else {
            0
        }
    }

    /// Height in pixels (zero if inverted).
    #[must_use]
    pub const fn height(&self) -> u32 {
        if self.y1 > self.y0 {
            self.y1.abs_diff(self.y0)
        } else {
            0
        }
    }

    /// Check if the rectangle covers no pixels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.x1 <= self.x0 || self.y1 <= self.y0
    }

    /// Check if a point lies inside the rectangle.
    #[must_use]
    pub const fn contains(&self, p: PixelPoint) -> bool {
        p.x >= self.x0 && p.x < self.x1 && p.y >= self.y0 && p.y < self.y1
    }

    /// Intersection with another rectangle, `None` when they do not overlap.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let clipped = Self::new(
            self.x0.max(other.x0),
            self.y0.max(other.y0),
            self.x1.min(other.x1),
            self.y1.min(other.y1),
        );
        (!clipped.is_empty()).then_some(clipped)
    }
}

/// Line stroke: color plus square pen size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stroke {
    /// Stroke color
    pub color: Color,
    /// Side of the square pen; 0 behaves like 1
    pub thickness: u32,
}

impl Stroke {
    /// Default pen size.
    pub const DEFAULT_THICKNESS: u32 = 1;

    /// A one-pixel stroke.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            thickness: Self::DEFAULT_THICKNESS,
        }
    }

    /// Set the pen size.
    #[must_use]
    pub const fn with_thickness(mut self, thickness: u32) -> Self {
        self.thickness = thickness;
        self
    }

    /// Pen size with the zero case folded into the default.
    #[must_use]
    pub const fn pen(&self) -> u32 {
        if self.thickness == 0 {
            Self::DEFAULT_THICKNESS
        } else {
            self.thickness
        }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new(Color::BLACK)
    }
}
