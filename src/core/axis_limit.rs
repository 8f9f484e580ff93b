use serde::{Deserialize, Serialize};

use crate::core::Bounds;
use crate::core::dimensional_bounds::{SEED_MAX, SEED_MIN};

/// Resolved limits of an axis after measurement.
///
/// Unlike [`crate::core::Bounds`] this is a plain value: it carries the
/// limits the scaler should honor plus the raw data extremes they came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLimit {
    pub min: f64,
    pub max: f64,
    pub min_delta: f64,
    pub data_min: f64,
    pub data_max: f64,
}

impl AxisLimit {
    #[must_use]
    pub const fn new(min: f64, max: f64, min_delta: f64, data_min: f64, data_max: f64) -> Self {
        Self {
            min,
            max,
            min_delta,
            data_min,
            data_max,
        }
    }

    /// Returns a copy whose `min`/`max` went through [`validate_limits`].
    #[must_use]
    pub fn validated(self) -> Self {
        let (min, max) = validate_limits(self.min, self.max);
        Self { min, max, ..self }
    }
}

/// Whether `value` is the marker of an axis that was never measured.
#[must_use]
pub fn is_unmeasured_limit(value: f64) -> bool {
    !value.is_finite() || value == f64::MAX || value == f64::MIN
}

/// Normalizes a pair of limits before they reach a scaler.
///
/// If either side still holds the unmeasured sentinel both are reset to the
/// `0..10` placeholder range; otherwise an inverted pair is swapped.
#[must_use]
pub fn validate_limits(min: f64, max: f64) -> (f64, f64) {
    if is_unmeasured_limit(min) || is_unmeasured_limit(max) {
        return (SEED_MIN, SEED_MAX);
    }
    if min > max { (max, min) } else { (min, max) }
}

/// Applies explicit limits over `fallback` and validates the result.
///
/// A missing side takes the matching extreme of `fallback`.
pub(crate) fn resolve_limits(
    min_limit: Option<f64>,
    max_limit: Option<f64>,
    fallback: &Bounds,
) -> (f64, f64) {
    validate_limits(
        min_limit.unwrap_or(fallback.min()),
        max_limit.unwrap_or(fallback.max()),
    )
}

#[cfg(test)]
mod tests {
    use super::{AxisLimit, resolve_limits, validate_limits};
    use crate::core::Bounds;

    #[test]
    fn nan_is_treated_as_unmeasured() {
        assert_eq!(validate_limits(f64::NAN, 3.0), (0.0, 10.0));
    }

    #[test]
    fn validated_keeps_data_extremes() {
        let limit = AxisLimit::new(8.0, 1.0, 0.5, -4.0, 12.0).validated();
        assert_eq!((limit.min, limit.max), (1.0, 8.0));
        assert_eq!((limit.data_min, limit.data_max), (-4.0, 12.0));
    }

    #[test]
    fn partial_limit_takes_the_other_side_from_the_fallback() {
        let data = Bounds::from_range(-5.0, 20.0);
        assert_eq!(resolve_limits(Some(2.0), None, &data), (2.0, 20.0));
        assert_eq!(resolve_limits(None, Some(-8.0), &data), (-8.0, -5.0));
    }

    #[test]
    fn partial_limit_over_empty_bounds_resets_to_placeholder() {
        assert_eq!(resolve_limits(Some(0.0), None, &Bounds::new()), (0.0, 10.0));
    }
}
