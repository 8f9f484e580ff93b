use serde::{Deserialize, Serialize};

use crate::core::Bounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisOrientation {
    /// The axis has not been attached to a chart dimension yet.
    #[default]
    Unknown,
    X,
    Y,
}

/// What one measurement pass produced for an axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisScaleState {
    pub data_bounds: Option<Bounds>,
    pub visible_data_bounds: Option<Bounds>,
    #[serde(default)]
    pub min_limit: Option<f64>,
    #[serde(default)]
    pub max_limit: Option<f64>,
}

impl AxisScaleState {
    #[must_use]
    pub fn measured(data_bounds: Bounds, visible_data_bounds: Bounds) -> Self {
        Self {
            data_bounds: Some(data_bounds),
            visible_data_bounds: Some(visible_data_bounds),
            min_limit: None,
            max_limit: None,
        }
    }

    #[must_use]
    pub fn with_limits(mut self, min_limit: Option<f64>, max_limit: Option<f64>) -> Self {
        self.min_limit = min_limit;
        self.max_limit = max_limit;
        self
    }

    #[must_use]
    pub fn has_limits(&self) -> bool {
        self.min_limit.is_some() || self.max_limit.is_some()
    }
}

/// Keeps the current measurement and the one before it, so scalers can be
/// built against the previous scale to animate geometry from where it was.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScaleHistory {
    current: AxisScaleState,
    previous: Option<AxisScaleState>,
}

impl ScaleHistory {
    #[must_use]
    pub fn new(current: AxisScaleState) -> Self {
        Self {
            current,
            previous: None,
        }
    }

    #[must_use]
    pub fn current(&self) -> &AxisScaleState {
        &self.current
    }

    #[must_use]
    pub fn previous(&self) -> Option<&AxisScaleState> {
        self.previous.as_ref()
    }

    pub fn current_mut(&mut self) -> &mut AxisScaleState {
        &mut self.current
    }

    /// Replaces the current measurement; the old one becomes `previous`.
    pub fn commit_measure(&mut self, state: AxisScaleState) {
        self.previous = Some(std::mem::replace(&mut self.current, state));
    }

    /// Picks the state a scaler should read. An axis measured only once has
    /// no previous scale, so the current one is used instead.
    #[must_use]
    pub fn select(&self, use_previous_scale: bool) -> &AxisScaleState {
        if use_previous_scale {
            self.previous.as_ref().unwrap_or(&self.current)
        } else {
            &self.current
        }
    }
}

/// Cartesian axis configuration read by [`crate::core::Scaler`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CartesianAxis {
    pub orientation: AxisOrientation,
    #[serde(default)]
    pub inverted: bool,
    pub scale: ScaleHistory,
}

impl CartesianAxis {
    #[must_use]
    pub fn new(orientation: AxisOrientation) -> Self {
        Self {
            orientation,
            inverted: false,
            scale: ScaleHistory::default(),
        }
    }

    #[must_use]
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    #[must_use]
    pub fn with_state(mut self, state: AxisScaleState) -> Self {
        self.scale = ScaleHistory::new(state);
        self
    }

    pub fn commit_measure(&mut self, state: AxisScaleState) {
        self.scale.commit_measure(state);
    }
}

/// Angle or radius axis read by [`crate::core::PolarScaler`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarAxis {
    pub scale: ScaleHistory,
}

impl PolarAxis {
    #[must_use]
    pub fn new(state: AxisScaleState) -> Self {
        Self {
            scale: ScaleHistory::new(state),
        }
    }

    pub fn commit_measure(&mut self, state: AxisScaleState) {
        self.scale.commit_measure(state);
    }
}
