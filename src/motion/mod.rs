//! Time-based interpolation driving every visual mutation.
//!
//! A [`MotionProperty`] holds one tweened value. Its owner implements
//! [`Animatable`] and carries a [`MotionState`] with the logical clock set
//! by the canvas at the start of each frame.

pub mod animation;
pub mod clock;
pub mod easing;
pub mod interpolate;
pub mod property;
pub mod state;

pub use animation::{Animation, AnimationConfig, DEFAULT_DURATION_MS, RepeatCount};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use easing::Easing;
pub use interpolate::Interpolate;
pub use property::{Animatable, MotionProperty, MotionSlot};
pub use state::{AnimationClock, MotionState};
