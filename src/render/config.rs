use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::motion::AnimationConfig;

pub const DEFAULT_TARGET_FPS: f64 = 60.0;
pub const DEFAULT_MIN_FRAME_INTERVAL_MS: f64 = 4.0;

/// Canvas-level configuration.
///
/// Serializable so hosts can persist chart setup alongside their own
/// settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Every property reports its target immediately and every task is
    /// valid after one frame. Stored transitions are left untouched.
    #[serde(default)]
    pub disable_animations: bool,
    #[serde(default = "default_target_fps")]
    pub target_fps: f64,
    /// Lower bound of the delay suggested between two frames.
    #[serde(default = "default_min_frame_interval_ms")]
    pub min_frame_interval_ms: f64,
    /// Animation series hand to the geometries they create.
    #[serde(default)]
    pub default_animation: AnimationConfig,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            disable_animations: false,
            target_fps: default_target_fps(),
            min_frame_interval_ms: default_min_frame_interval_ms(),
            default_animation: AnimationConfig::default(),
        }
    }
}

impl CanvasConfig {
    #[must_use]
    pub fn with_disable_animations(mut self, disable_animations: bool) -> Self {
        self.disable_animations = disable_animations;
        self
    }

    #[must_use]
    pub fn with_target_fps(mut self, target_fps: f64) -> Self {
        self.target_fps = target_fps;
        self
    }

    #[must_use]
    pub fn with_min_frame_interval_ms(mut self, min_frame_interval_ms: f64) -> Self {
        self.min_frame_interval_ms = min_frame_interval_ms;
        self
    }

    #[must_use]
    pub fn with_default_animation(mut self, default_animation: AnimationConfig) -> Self {
        self.default_animation = default_animation;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.target_fps.is_finite() || self.target_fps <= 0.0 {
            return Err(ChartError::InvalidData(
                "target fps must be finite and > 0".to_owned(),
            ));
        }
        if !self.min_frame_interval_ms.is_finite() || self.min_frame_interval_ms < 0.0 {
            return Err(ChartError::InvalidData(
                "min frame interval must be finite and >= 0".to_owned(),
            ));
        }
        self.default_animation.validate()
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse canvas config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize canvas config: {e}"))
        })
    }
}

fn default_target_fps() -> f64 {
    DEFAULT_TARGET_FPS
}

fn default_min_frame_interval_ms() -> f64 {
    DEFAULT_MIN_FRAME_INTERVAL_MS
}
