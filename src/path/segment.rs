use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::motion::{Animation, MotionProperty, MotionState};

/// Stable identity of a segment across frames, usually the index or x value
/// of the data point that produced it.
pub type SegmentKey = OrderedFloat<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentKind {
    MoveTo,
    Line,
    Step,
    CubicBezier,
}

/// Evaluated geometry of a segment at one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentSnapshot {
    pub key: f64,
    pub kind: SegmentKind,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

/// One command of an animated path. The start point is the end of the
/// previous segment; `control1`/`control2` only matter for bezier segments.
#[derive(Debug, Clone)]
pub struct PathSegment {
    key: SegmentKey,
    kind: SegmentKind,
    control1: MotionProperty<Point>,
    control2: MotionProperty<Point>,
    end: MotionProperty<Point>,
}

impl PathSegment {
    #[must_use]
    pub fn new(key: f64, kind: SegmentKind, end: Point) -> Self {
        Self {
            key: OrderedFloat(key),
            kind,
            control1: MotionProperty::new(end),
            control2: MotionProperty::new(end),
            end: MotionProperty::new(end),
        }
    }

    #[must_use]
    pub fn line(key: f64, end: Point) -> Self {
        Self::new(key, SegmentKind::Line, end)
    }

    #[must_use]
    pub fn cubic(key: f64, control1: Point, control2: Point, end: Point) -> Self {
        let mut segment = Self::new(key, SegmentKind::CubicBezier, end);
        segment.control1 = MotionProperty::new(control1);
        segment.control2 = MotionProperty::new(control2);
        segment
    }

    #[must_use]
    pub fn with_animation(mut self, animation: &Animation) -> Self {
        self.set_animation(Some(animation));
        self
    }

    #[must_use]
    pub fn key(&self) -> SegmentKey {
        self.key
    }

    #[must_use]
    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn set_animation(&mut self, animation: Option<&Animation>) {
        for property in [&mut self.control1, &mut self.control2, &mut self.end] {
            property.set_animation(animation.cloned());
        }
    }

    #[must_use]
    pub fn end_target(&self) -> Point {
        *self.end.target()
    }

    /// Moves the end point (and the controls onto it) for line-like segments.
    pub fn set_end(&mut self, end: Point, state: &mut MotionState) {
        self.set_target(end, end, end, state);
    }

    pub fn set_target(
        &mut self,
        control1: Point,
        control2: Point,
        end: Point,
        state: &mut MotionState,
    ) {
        self.control1.set_movement(control1, state);
        self.control2.set_movement(control2, state);
        self.end.set_movement(end, state);
    }

    pub fn current(&mut self, state: &mut MotionState) -> SegmentSnapshot {
        SegmentSnapshot {
            key: self.key.into_inner(),
            kind: self.kind,
            control1: self.control1.get_movement(state),
            control2: self.control2.get_movement(state),
            end: self.end.get_movement(state),
        }
    }

    /// Collapses every point onto the end of `previous`, so a segment added
    /// after it grows out of that point instead of popping in.
    pub fn follows(&mut self, previous: &PathSegment) {
        self.control1.copy_from(&previous.end);
        self.control2.copy_from(&previous.end);
        self.end.copy_from(&previous.end);
    }

    /// Takes over the interpolation state of `other`, keeping own key/kind.
    pub fn copy_from(&mut self, other: &PathSegment) {
        self.control1.copy_from(&other.control1);
        self.control2.copy_from(&other.control2);
        self.end.copy_from(&other.end);
    }

    pub(crate) fn properties_mut(&mut self) -> [(&'static str, &mut MotionProperty<Point>); 3] {
        [
            ("control1", &mut self.control1),
            ("control2", &mut self.control2),
            ("end", &mut self.end),
        ]
    }
}
