use serde::{Deserialize, Serialize};

use crate::core::Bounds;

/// Placeholder range used when a chart has no measured data yet.
pub const SEED_MIN: f64 = 0.0;
pub const SEED_MAX: f64 = 10.0;
const SEED_TERTIARY: f64 = 1.0;

/// Per-series measurement result: one [`Bounds`] per logical dimension, each
/// with a "visible" counterpart restricted to the current viewport.
///
/// Primary is the value axis of a series (Y for cartesian, radius for
/// polar), secondary the index axis, tertiary the optional weight/size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DimensionalBounds {
    primary: Bounds,
    secondary: Bounds,
    tertiary: Bounds,
    visible_primary: Bounds,
    visible_secondary: Bounds,
    visible_tertiary: Bounds,
}

impl DimensionalBounds {
    /// Creates the six bounds. With `seed` set, primary/secondary (data and
    /// visible) start at `0..10` and tertiary at `1`, so an unmeasured
    /// chart still yields a finite, non-zero scale.
    #[must_use]
    pub fn new(seed: bool) -> Self {
        let mut bounds = Self::default();
        if !seed {
            return bounds;
        }

        for target in [
            &mut bounds.primary,
            &mut bounds.secondary,
            &mut bounds.visible_primary,
            &mut bounds.visible_secondary,
        ] {
            target.append_value(SEED_MIN);
            target.append_value(SEED_MAX);
        }
        bounds.tertiary.append_value(SEED_TERTIARY);
        bounds.visible_tertiary.append_value(SEED_TERTIARY);
        bounds
    }

    #[must_use]
    pub fn primary(&self) -> &Bounds {
        &self.primary
    }

    #[must_use]
    pub fn secondary(&self) -> &Bounds {
        &self.secondary
    }

    #[must_use]
    pub fn tertiary(&self) -> &Bounds {
        &self.tertiary
    }

    #[must_use]
    pub fn visible_primary(&self) -> &Bounds {
        &self.visible_primary
    }

    #[must_use]
    pub fn visible_secondary(&self) -> &Bounds {
        &self.visible_secondary
    }

    #[must_use]
    pub fn visible_tertiary(&self) -> &Bounds {
        &self.visible_tertiary
    }

    pub fn primary_mut(&mut self) -> &mut Bounds {
        &mut self.primary
    }

    pub fn secondary_mut(&mut self) -> &mut Bounds {
        &mut self.secondary
    }

    pub fn tertiary_mut(&mut self) -> &mut Bounds {
        &mut self.tertiary
    }

    pub fn visible_primary_mut(&mut self) -> &mut Bounds {
        &mut self.visible_primary
    }

    pub fn visible_secondary_mut(&mut self) -> &mut Bounds {
        &mut self.visible_secondary
    }

    pub fn visible_tertiary_mut(&mut self) -> &mut Bounds {
        &mut self.visible_tertiary
    }

    /// Records a sample that lies outside the viewport.
    pub fn append_point(&mut self, secondary: f64, primary: f64) {
        self.secondary.append_value(secondary);
        self.primary.append_value(primary);
    }

    /// Records a sample inside the viewport; it also widens the data bounds.
    pub fn append_visible_point(&mut self, secondary: f64, primary: f64) {
        self.append_point(secondary, primary);
        self.visible_secondary.append_value(secondary);
        self.visible_primary.append_value(primary);
    }

    /// Folds another series' measurement into this one, dimension by
    /// dimension.
    pub fn append_bounds(&mut self, other: &DimensionalBounds) {
        self.primary.append_bounds(&other.primary);
        self.secondary.append_bounds(&other.secondary);
        self.tertiary.append_bounds(&other.tertiary);
        self.visible_primary.append_bounds(&other.visible_primary);
        self.visible_secondary.append_bounds(&other.visible_secondary);
        self.visible_tertiary.append_bounds(&other.visible_tertiary);
    }
}
