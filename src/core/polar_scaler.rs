use tracing::trace;

use crate::core::axis_limit::resolve_limits;
use crate::core::{AxisScaleState, Bounds, DrawMargin, Point, PolarAxis};
use crate::error::{ChartError, ChartResult};

const FULL_TURN_DEG: f64 = 360.0;

/// Maps `(angle, radius)` data pairs to pixels around the center of the
/// draw margin, and back.
///
/// Angles are laid out clockwise in screen space (pixel Y grows downward),
/// starting at `initial_rotation` degrees and spanning `total_angle`
/// degrees for the full angle range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarScaler {
    center: Point,
    inner_radius: f64,
    scalable_radius: f64,
    min_radius: f64,
    delta_radius: f64,
    min_angle: f64,
    delta_angle: f64,
    initial_rotation: f64,
    total_angle: f64,
}

impl PolarScaler {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        draw_margin: DrawMargin,
        angle_axis: &PolarAxis,
        radius_axis: &PolarAxis,
        inner_radius: f64,
        initial_rotation: f64,
        total_angle: f64,
        use_previous_scale: bool,
    ) -> ChartResult<Self> {
        draw_margin.validate()?;
        let angle_state = angle_axis.scale.select(use_previous_scale);
        let radius_state = radius_axis.scale.select(use_previous_scale);
        let (angle_data, _) = measured_bounds(angle_state, "angle")?;
        let (radius_data, radius_visible) = measured_bounds(radius_state, "radius")?;

        let radius_source = if radius_visible.is_empty() {
            radius_data
        } else {
            radius_visible
        };
        let (min_radius, delta_radius) = resolve_range(radius_state, &radius_data, &radius_source);
        let (min_angle, delta_angle) = resolve_range(angle_state, &angle_data, &angle_data);

        let size = draw_margin.size;
        let center = Point::new(
            draw_margin.origin.x + size.width * 0.5,
            draw_margin.origin.y + size.height * 0.5,
        );
        let scalable_radius = (size.min_dimension() * 0.5 - inner_radius).max(0.0);

        Ok(Self {
            center,
            inner_radius,
            scalable_radius,
            min_radius,
            delta_radius,
            min_angle,
            delta_angle,
            initial_rotation,
            total_angle,
        })
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// Pixel length available between the inner radius and the outer edge.
    #[must_use]
    pub fn scalable_radius(&self) -> f64 {
        self.scalable_radius
    }

    #[must_use]
    pub fn to_pixels(&self, angle: f64, radius: f64) -> Point {
        let radius_ratio = ratio(radius - self.min_radius, self.delta_radius);
        let r = self.inner_radius + self.scalable_radius * radius_ratio;

        let degrees = self.total_angle * ratio(angle - self.min_angle, self.delta_angle)
            + self.initial_rotation;
        let radians = degrees.to_radians();

        Point::new(
            self.center.x + radians.cos() * r,
            self.center.y + radians.sin() * r,
        )
    }

    /// Inverse of [`PolarScaler::to_pixels`], returning `(angle, radius)`.
    ///
    /// The recovered screen angle is wrapped into `[0, 360)` after removing
    /// the initial rotation, so the maximum angle of a full turn reads back
    /// as the minimum.
    #[must_use]
    pub fn to_chart_values(&self, x: f64, y: f64) -> (f64, f64) {
        let dx = x - self.center.x;
        let dy = y - self.center.y;

        let hyp = self.center.distance_to(Point::new(x, y)) - self.inner_radius;
        let radius_ratio = ratio(hyp, self.scalable_radius);

        let screen_angle = (quadrant_angle(dx, dy) - self.initial_rotation).rem_euclid(FULL_TURN_DEG);
        let angle_ratio = ratio(screen_angle, self.total_angle);

        (
            self.min_angle + angle_ratio * self.delta_angle,
            self.min_radius + radius_ratio * self.delta_radius,
        )
    }
}

fn measured_bounds(state: &AxisScaleState, axis: &'static str) -> ChartResult<(Bounds, Bounds)> {
    match (state.data_bounds, state.visible_data_bounds) {
        (Some(data), Some(visible)) => Ok((data, visible)),
        _ => Err(ChartError::MissingBounds { axis }),
    }
}

/// Returns `(min, delta)` of one polar axis, limits over `source`.
///
/// An axis without measured data collapses to `(0, 0)`.
fn resolve_range(state: &AxisScaleState, data: &Bounds, source: &Bounds) -> (f64, f64) {
    if data.is_empty() {
        trace!("unmeasured polar range, using flat scale");
        return (0.0, 0.0);
    }
    let (low, high) = resolve_limits(state.min_limit, state.max_limit, source);
    let delta = high - low;
    if delta.is_finite() {
        (low, delta)
    } else {
        trace!(low, high, "overflowing polar range, using flat scale");
        (0.0, 0.0)
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    let value = numerator / denominator;
    if value.is_finite() { value } else { 0.0 }
}

/// Angle in degrees of the vector `(dx, dy)` measured clockwise from +X in
/// screen space.
///
/// `atan(dy / dx)` only covers (-90°, 90°): points left of the center are
/// shifted by 180° and points right of it with `dy <= 0` by 360°.
pub(crate) fn quadrant_angle(dx: f64, dy: f64) -> f64 {
    if dx == 0.0 {
        return if dy > 0.0 {
            90.0
        } else if dy < 0.0 {
            270.0
        } else {
            0.0
        };
    }

    let angle = (dy / dx).atan().to_degrees();
    if dx < 0.0 {
        angle + 180.0
    } else if dy <= 0.0 {
        angle + 360.0
    } else {
        angle
    }
}

#[cfg(test)]
mod tests {
    use super::quadrant_angle;

    #[test]
    fn quadrant_table_offsets() {
        assert!((quadrant_angle(1.0, 1.0) - 45.0).abs() < 1e-9);
        assert!((quadrant_angle(-1.0, 1.0) - 135.0).abs() < 1e-9);
        assert!((quadrant_angle(-1.0, -1.0) - 225.0).abs() < 1e-9);
        assert!((quadrant_angle(1.0, -1.0) - 315.0).abs() < 1e-9);
    }

    #[test]
    fn positive_x_axis_reports_full_turn_before_wrapping() {
        assert_eq!(quadrant_angle(3.0, 0.0), 360.0);
        assert_eq!(quadrant_angle(-3.0, 0.0), 180.0);
    }

    #[test]
    fn vertical_and_origin_vectors_are_explicit() {
        assert_eq!(quadrant_angle(0.0, 2.0), 90.0);
        assert_eq!(quadrant_angle(0.0, -2.0), 270.0);
        assert_eq!(quadrant_angle(0.0, 0.0), 0.0);
    }
}
