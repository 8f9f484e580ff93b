use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Point in pixel or data space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn min_dimension(self) -> f64 {
        self.width.min(self.height)
    }
}

/// Pixel rectangle the series are drawn into, produced by the layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DrawMargin {
    pub origin: Point,
    pub size: Size,
}

impl DrawMargin {
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.origin.x.is_finite() || !self.origin.y.is_finite() {
            return Err(ChartError::InvalidData(
                "draw margin origin must be finite".to_owned(),
            ));
        }
        if !self.size.width.is_finite()
            || !self.size.height.is_finite()
            || self.size.width < 0.0
            || self.size.height < 0.0
        {
            return Err(ChartError::InvalidData(
                "draw margin size must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

/// 2D affine transform laid out as
/// `[scale_x skew_x translate_x; skew_y scale_y translate_y; 0 0 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub scale_x: f64,
    pub skew_x: f64,
    pub translate_x: f64,
    pub skew_y: f64,
    pub scale_y: f64,
    pub translate_y: f64,
}

impl Matrix {
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        skew_x: 0.0,
        translate_x: 0.0,
        skew_y: 0.0,
        scale_y: 1.0,
        translate_y: 0.0,
    };

    #[must_use]
    pub const fn translation(dx: f64, dy: f64) -> Self {
        Self {
            translate_x: dx,
            translate_y: dy,
            ..Self::IDENTITY
        }
    }

    #[must_use]
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self {
            scale_x: sx,
            scale_y: sy,
            ..Self::IDENTITY
        }
    }

    #[must_use]
    pub fn map_point(self, point: Point) -> Point {
        Point::new(
            self.scale_x * point.x + self.skew_x * point.y + self.translate_x,
            self.skew_y * point.x + self.scale_y * point.y + self.translate_y,
        )
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}
