//! Animated paths for line and area series.

pub mod animated_path;
pub mod segment;
pub mod segment_manager;

pub use animated_path::{AnimatedPath, SegmentHandle};
pub use segment::{PathSegment, SegmentKey, SegmentKind, SegmentSnapshot};
pub use segment_manager::SegmentManager;
