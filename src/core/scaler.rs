use tracing::trace;

use crate::core::axis_limit::resolve_limits;
use crate::core::{AxisOrientation, CartesianAxis, DrawMargin};
use crate::error::{ChartError, ChartResult};

/// Linear mapping between data values of one cartesian axis and pixels.
///
/// `min_val` is the data value rendered at `min_px` (left edge for X, top
/// edge for Y) and `max_val` the one rendered at `max_px`. For a vertical,
/// non-inverted axis this means `min_val` holds the largest data value,
/// since pixel Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaler {
    orientation: AxisOrientation,
    min_px: f64,
    max_px: f64,
    min_val: f64,
    max_val: f64,
    m: f64,
    m_inv: f64,
}

impl Scaler {
    /// Builds the scaler for `axis` inside the draw margin.
    ///
    /// The data range is taken from the axis limits when any is set (a
    /// missing side falls back to the full data bounds), otherwise from the
    /// visible bounds when they were measured, otherwise from the data
    /// bounds. Limits are validated like [`crate::core::validate_limits`];
    /// an axis without measured data collapses to a flat scale.
    pub fn new(
        draw_margin: DrawMargin,
        axis: &CartesianAxis,
        use_previous_scale: bool,
    ) -> ChartResult<Self> {
        let axis_name = match axis.orientation {
            AxisOrientation::Unknown => return Err(ChartError::UnknownAxisOrientation),
            AxisOrientation::X => "x",
            AxisOrientation::Y => "y",
        };

        draw_margin.validate()?;
        let state = axis.scale.select(use_previous_scale);
        let data_bounds = state
            .data_bounds
            .ok_or(ChartError::MissingBounds { axis: axis_name })?;
        let visible_bounds = state
            .visible_data_bounds
            .ok_or(ChartError::MissingBounds { axis: axis_name })?;

        let (min_px, max_px) = match axis.orientation {
            AxisOrientation::X => (
                draw_margin.origin.x,
                draw_margin.origin.x + draw_margin.size.width,
            ),
            _ => (
                draw_margin.origin.y,
                draw_margin.origin.y + draw_margin.size.height,
            ),
        };

        if data_bounds.is_empty() {
            trace!(axis = axis_name, "unmeasured axis range, using flat scale");
            return Ok(Self::flat(axis.orientation, min_px, max_px));
        }

        let (low, high) = if state.has_limits() {
            resolve_limits(state.min_limit, state.max_limit, &data_bounds)
        } else if !visible_bounds.is_empty() {
            (visible_bounds.min(), visible_bounds.max())
        } else {
            (data_bounds.min(), data_bounds.max())
        };

        let delta = high - low;
        if delta.is_infinite() || delta.is_nan() {
            trace!(axis = axis_name, "unmeasured axis range, using flat scale");
            return Ok(Self::flat(axis.orientation, min_px, max_px));
        }

        let (min_val, max_val) = match (axis.orientation, axis.inverted) {
            (AxisOrientation::X, false) | (AxisOrientation::Y, true) => (low, high),
            _ => (high, low),
        };

        let mut m = (max_px - min_px) / (max_val - min_val);
        let mut m_inv = 1.0 / m;
        if !m.is_finite() || !m_inv.is_finite() {
            trace!(axis = axis_name, min_val, max_val, "zero axis range, using flat scale");
            m = 0.0;
            m_inv = 0.0;
        }

        Ok(Self {
            orientation: axis.orientation,
            min_px,
            max_px,
            min_val,
            max_val,
            m,
            m_inv,
        })
    }

    fn flat(orientation: AxisOrientation, min_px: f64, max_px: f64) -> Self {
        Self {
            orientation,
            min_px,
            max_px,
            min_val: 0.0,
            max_val: 0.0,
            m: 0.0,
            m_inv: 0.0,
        }
    }

    #[must_use]
    pub fn orientation(&self) -> AxisOrientation {
        self.orientation
    }

    /// Data value drawn at the start pixel.
    #[must_use]
    pub fn min_val(&self) -> f64 {
        self.min_val
    }

    /// Data value drawn at the end pixel.
    #[must_use]
    pub fn max_val(&self) -> f64 {
        self.max_val
    }

    #[must_use]
    pub fn pixel_range(&self) -> (f64, f64) {
        (self.min_px, self.max_px)
    }

    /// True when every value maps to the same pixel.
    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.m == 0.0
    }

    #[must_use]
    pub fn to_pixels(&self, value: f64) -> f64 {
        self.min_px + (value - self.min_val) * self.m
    }

    #[must_use]
    pub fn to_chart_values(&self, pixels: f64) -> f64 {
        self.min_val + (pixels - self.min_px) * self.m_inv
    }

    /// Signed pixel length of `value` measured from the zero baseline.
    ///
    /// Horizontal axes grow to the right and vertical axes grow upward, so a
    /// positive value yields a positive length on a non-inverted axis.
    #[must_use]
    pub fn measure_in_pixels(&self, value: f64) -> f64 {
        let baseline = self.to_pixels(0.0);
        let tip = self.to_pixels(value);
        match self.orientation {
            AxisOrientation::Y => baseline - tip,
            _ => tip - baseline,
        }
    }
}
