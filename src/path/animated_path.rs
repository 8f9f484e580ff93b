use crate::error::{ChartError, ChartResult};
use crate::motion::{Animatable, Animation, MotionSlot, MotionState};
use crate::path::{PathSegment, SegmentSnapshot};

/// Generational index of a segment inside an [`AnimatedPath`].
///
/// Handle equality is the "same segment instance" identity; two different
/// handles may still carry the same segment key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentHandle {
    index: u32,
    generation: u32,
}

impl SegmentHandle {
    #[must_use]
    pub const fn index(self) -> u32 {
        self.index
    }

    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    segment: Option<PathSegment>,
}

/// A continuous drawable path whose segments tween independently.
///
/// Segments live in a slot arena; the draw order is a separate list of
/// handles that [`crate::path::SegmentManager`] reconciles each update.
#[derive(Debug, Clone, Default)]
pub struct AnimatedPath {
    slots: Vec<Slot>,
    free: Vec<u32>,
    order: Vec<SegmentHandle>,
    motion: MotionState,
    is_closed: bool,
    segment_animation: Option<Animation>,
}

impl AnimatedPath {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Animation given to every segment inserted afterwards.
    #[must_use]
    pub fn with_segment_animation(mut self, animation: Animation) -> Self {
        self.segment_animation = Some(animation);
        self
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    pub fn set_closed(&mut self, is_closed: bool) {
        self.is_closed = is_closed;
        self.motion.invalidate();
    }

    /// Stores a segment without placing it in the draw order yet.
    pub fn insert(&mut self, mut segment: PathSegment) -> SegmentHandle {
        if let Some(animation) = &self.segment_animation {
            segment.set_animation(Some(animation));
        }

        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.segment = Some(segment);
            return SegmentHandle {
                index,
                generation: slot.generation,
            };
        }

        let index = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
        self.slots.push(Slot {
            generation: 0,
            segment: Some(segment),
        });
        SegmentHandle {
            index,
            generation: 0,
        }
    }

    pub fn get(&self, handle: SegmentHandle) -> ChartResult<&PathSegment> {
        self.slots
            .get(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.segment.as_ref())
            .ok_or(ChartError::UnknownSegment {
                index: handle.index,
                generation: handle.generation,
            })
    }

    pub fn get_mut(&mut self, handle: SegmentHandle) -> ChartResult<&mut PathSegment> {
        self.slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.segment.as_mut())
            .ok_or(ChartError::UnknownSegment {
                index: handle.index,
                generation: handle.generation,
            })
    }

    #[must_use]
    pub fn contains(&self, handle: SegmentHandle) -> bool {
        self.get(handle).is_ok()
    }

    /// Removes a segment from both the draw order and the arena.
    pub fn remove(&mut self, handle: SegmentHandle) -> Option<PathSegment> {
        self.order.retain(|ordered| *ordered != handle);
        self.release(handle)
    }

    /// Ordered handles, first command first.
    #[must_use]
    pub fn order(&self) -> &[SegmentHandle] {
        &self.order
    }

    /// Number of segments in the draw order.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keys of the ordered segments.
    #[must_use]
    pub fn keys(&self) -> Vec<f64> {
        self.order
            .iter()
            .filter_map(|handle| self.get(*handle).ok())
            .map(|segment| segment.key().into_inner())
            .collect()
    }

    /// Evaluates every ordered segment at the path's clock.
    pub fn current_segments(&mut self) -> Vec<SegmentSnapshot> {
        let Self {
            slots,
            order,
            motion,
            ..
        } = self;
        let mut snapshots = Vec::with_capacity(order.len());
        for handle in order.iter() {
            let segment = slots
                .get_mut(handle.index as usize)
                .filter(|slot| slot.generation == handle.generation)
                .and_then(|slot| slot.segment.as_mut());
            if let Some(segment) = segment {
                snapshots.push(segment.current(motion));
            }
        }
        snapshots
    }

    /// Runs `f` with a segment and the path's motion state, typically to
    /// retarget it after a diff pass.
    pub fn with_segment<T>(
        &mut self,
        handle: SegmentHandle,
        f: impl FnOnce(&mut PathSegment, &mut MotionState) -> T,
    ) -> ChartResult<T> {
        let slot = self
            .slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.segment.as_mut())
            .ok_or(ChartError::UnknownSegment {
                index: handle.index,
                generation: handle.generation,
            })?;
        Ok(f(slot, &mut self.motion))
    }

    pub(crate) fn order_mut(&mut self) -> &mut Vec<SegmentHandle> {
        &mut self.order
    }

    /// Frees the slot of a handle that is no longer ordered.
    pub(crate) fn release(&mut self, handle: SegmentHandle) -> Option<PathSegment> {
        let slot = self
            .slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)?;
        let segment = slot.segment.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        Some(segment)
    }
}

impl Animatable for AnimatedPath {
    fn motion(&self) -> &MotionState {
        &self.motion
    }

    fn motion_mut(&mut self) -> &mut MotionState {
        &mut self.motion
    }

    fn visit_properties(&mut self, visitor: &mut dyn FnMut(&'static str, &mut dyn MotionSlot)) {
        for slot in &mut self.slots {
            if let Some(segment) = slot.segment.as_mut() {
                for (name, property) in segment.properties_mut() {
                    visitor(name, property);
                }
            }
        }
    }
}
