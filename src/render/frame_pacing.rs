use std::time::Duration;

use tracing::debug;

use crate::render::CanvasConfig;

/// Suggests the delay before the next frame from a target frame rate.
///
/// Advisory only: the host's frame pump decides when to actually call the
/// canvas again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    target_interval: Duration,
    min_interval: Duration,
    frames: u64,
    jittered_frames: u64,
}

impl FramePacer {
    /// `target_fps` must be finite and positive; see
    /// [`CanvasConfig::validate`].
    #[must_use]
    pub fn new(target_fps: f64, min_frame_interval_ms: f64) -> Self {
        Self {
            target_interval: Duration::from_secs_f64(1.0 / target_fps),
            min_interval: Duration::from_secs_f64(min_frame_interval_ms / 1000.0),
            frames: 0,
            jittered_frames: 0,
        }
    }

    #[must_use]
    pub fn from_config(config: &CanvasConfig) -> Self {
        Self::new(config.target_fps, config.min_frame_interval_ms)
    }

    #[must_use]
    pub fn target_interval(&self) -> Duration {
        self.target_interval
    }

    #[must_use]
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frames whose remaining budget fell under half the target interval.
    #[must_use]
    pub fn jittered_frames(&self) -> u64 {
        self.jittered_frames
    }

    /// Records a frame that took `draw_elapsed` and returns the delay to
    /// wait before the next one.
    pub fn next_delay(&mut self, draw_elapsed: Duration) -> Duration {
        self.frames += 1;
        let remaining = self.target_interval.saturating_sub(draw_elapsed);
        if remaining < self.target_interval / 2 {
            self.jittered_frames += 1;
            debug!(
                draw_elapsed_ms = draw_elapsed.as_secs_f64() * 1000.0,
                jittered_frames = self.jittered_frames,
                "frame exceeded half of its budget"
            );
        }
        remaining.max(self.min_interval)
    }

    pub fn reset_counters(&mut self) {
        self.frames = 0;
        self.jittered_frames = 0;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::FramePacer;

    #[test]
    fn fast_frame_waits_for_the_rest_of_the_budget() {
        let mut pacer = FramePacer::new(50.0, 1.0);
        let delay = pacer.next_delay(Duration::from_millis(5));
        assert_eq!(delay, Duration::from_millis(15));
        assert_eq!(pacer.jittered_frames(), 0);
    }

    #[test]
    fn slow_frame_is_clamped_and_counted_as_jitter() {
        let mut pacer = FramePacer::new(50.0, 2.0);
        let delay = pacer.next_delay(Duration::from_millis(19));
        assert_eq!(delay, Duration::from_millis(2));
        assert_eq!(pacer.jittered_frames(), 1);
        assert_eq!(pacer.frames(), 1);
    }
}
