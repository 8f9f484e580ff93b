use serde::{Deserialize, Serialize};

/// Observed range of a data set along one dimension.
///
/// Bounds only ever widen during a measurement pass: appending a value or
/// another bounds takes the union of both ranges. An empty bounds keeps the
/// `f64::MAX` / `f64::MIN` sentinels, so its [`Bounds::delta`] is infinite
/// and scalers treat it as "not measured yet".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    min: f64,
    max: f64,
    min_delta: f64,
    padding_min: f64,
    padding_max: f64,
    requested_geometry_size: f64,
    is_empty: bool,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: f64::MAX,
            max: f64::MIN,
            min_delta: f64::MAX,
            padding_min: f64::MAX,
            padding_max: f64::MAX,
            requested_geometry_size: 0.0,
            is_empty: true,
        }
    }
}

impl Bounds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a bounds already covering `min..=max`, in either order.
    #[must_use]
    pub fn from_range(min: f64, max: f64) -> Self {
        let mut bounds = Self::default();
        bounds.append_value(min);
        bounds.append_value(max);
        bounds
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// `max - min`; infinite while the bounds is empty.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn min_delta(&self) -> f64 {
        self.min_delta
    }

    #[must_use]
    pub fn padding_min(&self) -> f64 {
        self.padding_min
    }

    #[must_use]
    pub fn padding_max(&self) -> f64 {
        self.padding_max
    }

    #[must_use]
    pub fn requested_geometry_size(&self) -> f64 {
        self.requested_geometry_size
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_empty
    }

    pub fn set_min_delta(&mut self, min_delta: f64) {
        self.min_delta = self.min_delta.min(min_delta);
    }

    pub fn set_padding(&mut self, padding_min: f64, padding_max: f64) {
        self.padding_min = self.padding_min.min(padding_min);
        self.padding_max = self.padding_max.min(padding_max);
    }

    pub fn request_geometry_size(&mut self, size: f64) {
        self.requested_geometry_size = self.requested_geometry_size.max(size);
    }

    /// Widens the range so it contains `value`.
    pub fn append_value(&mut self, value: f64) {
        if value > self.max {
            self.max = value;
        }
        if value < self.min {
            self.min = value;
        }
        self.is_empty = false;
    }

    /// Merges another bounds into this one.
    ///
    /// Ranges are unioned; `min_delta` and paddings keep the smaller (more
    /// restrictive) value and the requested geometry size keeps the larger
    /// one. Merging an empty bounds changes nothing.
    pub fn append_bounds(&mut self, other: &Bounds) {
        if other.is_empty {
            return;
        }

        if other.max > self.max {
            self.max = other.max;
        }
        if other.min < self.min {
            self.min = other.min;
        }
        self.min_delta = self.min_delta.min(other.min_delta);
        self.padding_min = self.padding_min.min(other.padding_min);
        self.padding_max = self.padding_max.min(other.padding_max);
        self.requested_geometry_size = self
            .requested_geometry_size
            .max(other.requested_geometry_size);
        self.is_empty = false;
    }

    /// Whether both bounds would produce the same scale.
    #[must_use]
    pub fn has_same_limits(&self, other: &Bounds) -> bool {
        self.is_empty == other.is_empty && self.min == other.min && self.max == other.max
    }
}

#[cfg(test)]
mod tests {
    use super::Bounds;

    #[test]
    fn empty_bounds_has_infinite_delta() {
        let bounds = Bounds::new();
        assert!(bounds.is_empty());
        assert!(bounds.delta().is_infinite());
    }

    #[test]
    fn merging_empty_bounds_is_a_no_op() {
        let mut bounds = Bounds::from_range(2.0, 4.0);
        let before = bounds;
        bounds.append_bounds(&Bounds::new());
        assert_eq!(bounds, before);
    }
}
