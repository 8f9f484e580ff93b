use crate::motion::{Animation, AnimationClock, Interpolate, MotionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransitionWindow {
    /// Set while the owner had not joined a canvas; anchored on first read.
    Pending,
    Active { start_ms: u64, end_ms: u64 },
}

impl TransitionWindow {
    fn starting_at(now_ms: u64, duration_ms: u64) -> Self {
        Self::Active {
            start_ms: now_ms,
            end_ms: now_ms.saturating_add(duration_ms),
        }
    }
}

/// A single value that transitions to a new target over time.
///
/// Reads and writes take the owner's [`MotionState`]: the clock decides
/// progress, and any read of an unfinished transition marks the owner
/// invalid so the canvas schedules another frame.
#[derive(Debug, Clone)]
pub struct MotionProperty<T> {
    from: Option<T>,
    to: T,
    window: TransitionWindow,
    animation: Option<Animation>,
    completed_cycles: u32,
    is_completed: bool,
}

impl<T: Interpolate> MotionProperty<T> {
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            from: None,
            to: initial,
            window: TransitionWindow::Pending,
            animation: None,
            completed_cycles: 0,
            is_completed: true,
        }
    }

    #[must_use]
    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = Some(animation);
        self
    }

    /// Replaces the animation; clearing it finishes any transition in flight.
    pub fn set_animation(&mut self, animation: Option<Animation>) {
        if animation.is_none() {
            self.is_completed = true;
        }
        self.animation = animation;
    }

    #[must_use]
    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    /// The value the current transition is heading to.
    #[must_use]
    pub fn target(&self) -> &T {
        &self.to
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Redirects the property to `value`, starting from wherever the
    /// current transition is at the owner's clock, so retargeting never
    /// jumps.
    pub fn set_movement(&mut self, value: T, state: &mut MotionState) {
        let current = self.get_movement(state);
        self.from = Some(current);
        self.to = value;

        if let Some(animation) = &self.animation {
            self.window = match state.clock() {
                AnimationClock::Joined(now_ms) => {
                    TransitionWindow::starting_at(now_ms, animation.duration_ms())
                }
                AnimationClock::NotJoined => TransitionWindow::Pending,
            };
            self.completed_cycles = 0;
            self.is_completed = false;
        } else {
            self.is_completed = true;
        }
        state.invalidate();
    }

    /// Interpolated value at the owner's current clock.
    ///
    /// Reading twice at the same clock returns the same value. The only
    /// state change happens when progress reaches 1: the cycle counter
    /// advances and the window either restarts (looping) or completes.
    pub fn get_movement(&mut self, state: &mut MotionState) -> T {
        if state.animations_disabled() || self.is_completed {
            return self.to.clone();
        }
        let (Some(animation), Some(from)) = (&self.animation, &self.from) else {
            return self.to.clone();
        };

        let AnimationClock::Joined(now_ms) = state.clock() else {
            state.invalidate();
            return from.clone();
        };

        let duration_ms = animation.duration_ms();
        let (start_ms, end_ms) = match self.window {
            TransitionWindow::Active { start_ms, end_ms } => (start_ms, end_ms),
            TransitionWindow::Pending => {
                self.window = TransitionWindow::starting_at(now_ms, duration_ms);
                (now_ms, now_ms.saturating_add(duration_ms))
            }
        };

        let progress = if end_ms <= start_ms {
            1.0
        } else {
            let elapsed = now_ms.saturating_sub(start_ms) as f64;
            (elapsed / (end_ms - start_ms) as f64).clamp(0.0, 1.0) as f32
        };

        if progress >= 1.0 {
            self.completed_cycles = self.completed_cycles.saturating_add(1);
            if animation.repeat().is_exhausted(self.completed_cycles) {
                self.is_completed = true;
            } else {
                self.window = TransitionWindow::starting_at(now_ms, duration_ms);
                state.invalidate();
            }
            return self.to.clone();
        }

        state.invalidate();
        let eased = animation.easing().evaluate(progress);
        T::interpolate(from, &self.to, eased)
    }

    /// Ends the transition: later reads report the target.
    pub fn complete(&mut self) {
        self.is_completed = true;
    }

    /// Takes over another property's full interpolation state.
    pub fn copy_from(&mut self, other: &Self) {
        self.clone_from(other);
    }
}

/// Type-erased view of a [`MotionProperty`] used to drive all properties
/// of an [`Animatable`] at once.
pub trait MotionSlot {
    fn set_animation(&mut self, animation: Option<&Animation>);
    fn complete(&mut self);
    fn is_completed(&self) -> bool;
}

impl<T: Interpolate> MotionSlot for MotionProperty<T> {
    fn set_animation(&mut self, animation: Option<&Animation>) {
        MotionProperty::set_animation(self, animation.cloned());
    }

    fn complete(&mut self) {
        MotionProperty::complete(self);
    }

    fn is_completed(&self) -> bool {
        MotionProperty::is_completed(self)
    }
}

/// An entity owning named motion properties and an aggregate validity flag.
pub trait Animatable {
    fn motion(&self) -> &MotionState;

    fn motion_mut(&mut self) -> &mut MotionState;

    /// Calls `visitor` once per motion property with its name.
    fn visit_properties(&mut self, visitor: &mut dyn FnMut(&'static str, &mut dyn MotionSlot));

    /// Attaches `animation` to the named properties, or to all of them when
    /// `names` is empty. `None` makes them jump to new targets.
    fn set_transition(&mut self, animation: Option<&Animation>, names: &[&str]) {
        self.visit_properties(&mut |name, slot| {
            if names.is_empty() || names.contains(&name) {
                slot.set_animation(animation);
            }
        });
    }

    /// Finishes the named transitions (all when `names` is empty).
    fn complete_transition(&mut self, names: &[&str]) {
        self.visit_properties(&mut |name, slot| {
            if names.is_empty() || names.contains(&name) {
                slot.complete();
            }
        });
    }

    fn is_valid(&self) -> bool {
        self.motion().is_valid()
    }

    /// Whether any property still has a transition in flight.
    fn is_animating(&mut self) -> bool {
        let mut animating = false;
        self.visit_properties(&mut |_, slot| animating |= !slot.is_completed());
        animating
    }
}
