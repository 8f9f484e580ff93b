use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::motion::Easing;

pub const DEFAULT_DURATION_MS: u64 = 800;

/// How many extra cycles a transition plays after the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatCount {
    Times(u32),
    Infinite,
}

impl Default for RepeatCount {
    fn default() -> Self {
        Self::Times(0)
    }
}

impl RepeatCount {
    /// Whether a transition that finished `completed_cycles` cycles is done.
    #[must_use]
    pub fn is_exhausted(self, completed_cycles: u32) -> bool {
        match self {
            Self::Times(times) => completed_cycles > times,
            Self::Infinite => false,
        }
    }
}

/// Timing shared by the properties it is attached to.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    duration_ms: u64,
    easing: Easing,
    repeat: RepeatCount,
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_MS, Easing::default())
    }
}

impl Animation {
    #[must_use]
    pub fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
            repeat: RepeatCount::default(),
        }
    }

    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn with_repeat(mut self, repeat: RepeatCount) -> Self {
        self.repeat = repeat;
        self
    }

    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    #[must_use]
    pub fn easing(&self) -> &Easing {
        &self.easing
    }

    #[must_use]
    pub fn repeat(&self) -> RepeatCount {
        self.repeat
    }
}

/// Serializable description of an [`Animation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default)]
    pub repeat: RepeatCount,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            easing: Easing::default(),
            repeat: RepeatCount::default(),
        }
    }
}

impl AnimationConfig {
    pub fn validate(&self) -> ChartResult<()> {
        if let Easing::CubicBezier(x1, _, x2, _) = self.easing {
            if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
                return Err(ChartError::InvalidData(
                    "cubic bezier x control points must be in [0, 1]".to_owned(),
                ));
            }
        }
        Ok(())
    }

    pub fn to_animation(&self) -> ChartResult<Animation> {
        self.validate()?;
        Ok(Animation::new(self.duration_ms, self.easing.clone()).with_repeat(self.repeat))
    }
}

fn default_duration_ms() -> u64 {
    DEFAULT_DURATION_MS
}
