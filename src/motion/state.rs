/// Logical clock of one animatable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationClock {
    /// The animatable has not been drawn by a canvas yet.
    #[default]
    NotJoined,
    /// Time of the frame currently (or last) drawing the animatable.
    Joined(u64),
}

impl AnimationClock {
    #[must_use]
    pub fn time_ms(self) -> Option<u64> {
        match self {
            Self::NotJoined => None,
            Self::Joined(time_ms) => Some(time_ms),
        }
    }
}

/// Per-animatable bookkeeping shared by all of its motion properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionState {
    clock: AnimationClock,
    is_valid: bool,
    animations_disabled: bool,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            clock: AnimationClock::NotJoined,
            is_valid: true,
            animations_disabled: false,
        }
    }
}

impl MotionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State already joined at `time_ms`, for animatables driven outside a
    /// canvas.
    #[must_use]
    pub fn joined_at(time_ms: u64) -> Self {
        Self {
            clock: AnimationClock::Joined(time_ms),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn clock(&self) -> AnimationClock {
        self.clock
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    #[must_use]
    pub fn animations_disabled(&self) -> bool {
        self.animations_disabled
    }

    pub fn invalidate(&mut self) {
        self.is_valid = false;
    }

    pub fn mark_valid(&mut self) {
        self.is_valid = true;
    }

    pub fn set_time(&mut self, time_ms: u64) {
        self.clock = AnimationClock::Joined(time_ms);
    }

    /// Prepares the state for a draw pass at `time_ms`: the owner starts
    /// valid and property reads invalidate it while transitions run.
    pub fn begin_frame(&mut self, time_ms: u64, animations_disabled: bool) {
        self.clock = AnimationClock::Joined(time_ms);
        self.is_valid = true;
        self.animations_disabled = animations_disabled;
    }
}
