use smallvec::SmallVec;
use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::motion::Animatable;
use crate::path::{AnimatedPath, SegmentHandle};

/// Reconciles the segments of an [`AnimatedPath`] with a new target
/// sequence, one segment at a time, preserving on-screen identity.
///
/// Replay the new sequence in key order through
/// [`SegmentManager::add_consecutive_segment`] and finish with
/// [`SegmentManager::end`]. Segments kept across updates keep tweening;
/// segments missing from the new sequence are deleted; new segments are
/// inserted where their key belongs.
pub struct SegmentManager<'a> {
    path: &'a mut AnimatedPath,
    cursor: usize,
}

impl<'a> SegmentManager<'a> {
    #[must_use]
    pub fn new(path: &'a mut AnimatedPath) -> Self {
        Self { path, cursor: 0 }
    }

    /// Places the next segment of the target sequence.
    ///
    /// When `follows_previous` is set, a segment that enters the path starts
    /// from the end of the segment before it, and a segment replacing an
    /// existing key inherits that segment's interpolation state.
    pub fn add_consecutive_segment(
        &mut self,
        handle: SegmentHandle,
        follows_previous: bool,
    ) -> ChartResult<()> {
        let key = self.path.get(handle)?.key();

        let mut found = None;
        let mut replace_candidate = None;
        for (position, ordered) in self.path.order().iter().enumerate().skip(self.cursor) {
            if *ordered == handle {
                found = Some(position);
                break;
            }
            if self.path.get(*ordered)?.key() == key {
                replace_candidate = Some(position);
            }
        }

        if let Some(position) = found {
            self.delete_range(self.cursor, position);
            self.cursor += 1;
            return Ok(());
        }

        if self.path.order()[..self.cursor].contains(&handle) {
            return Err(ChartError::SegmentOrderViolation {
                key: key.into_inner(),
            });
        }

        let last_key = match self.path.order().last() {
            Some(last) => Some(self.path.get(*last)?.key()),
            None => None,
        };

        match (last_key, replace_candidate) {
            (Some(last_key), Some(position)) if key <= last_key => {
                self.delete_range(self.cursor, position);
                let replaced = std::mem::replace(&mut self.path.order_mut()[self.cursor], handle);
                if let Some(previous) = self.path.release(replaced) {
                    if follows_previous {
                        self.path.get_mut(handle)?.copy_from(&previous);
                    }
                }
                trace!(key = key.into_inner(), "replaced path segment");
            }
            (Some(last_key), None) if key <= last_key => {
                self.path.order_mut().insert(self.cursor, handle);
                if follows_previous && self.cursor > 0 {
                    let predecessor = self.path.order()[self.cursor - 1];
                    self.seed(handle, predecessor)?;
                }
                trace!(key = key.into_inner(), position = self.cursor, "inserted path segment");
            }
            _ => {
                self.delete_range(self.cursor, self.path.len());
                let tail = self.path.order().last().copied();
                self.path.order_mut().push(handle);
                if let (true, Some(tail)) = (follows_previous, tail) {
                    self.seed(handle, tail)?;
                }
                trace!(key = key.into_inner(), "appended path segment");
            }
        }

        self.cursor += 1;
        Ok(())
    }

    /// Drops the segments the new sequence did not reach and marks the path
    /// invalid so the next frame redraws it.
    pub fn end(mut self) {
        let len = self.path.len();
        self.delete_range(self.cursor, len);
        self.path.motion_mut().invalidate();
    }

    fn seed(&mut self, target: SegmentHandle, source: SegmentHandle) -> ChartResult<()> {
        let source = self.path.get(source)?.clone();
        self.path.get_mut(target)?.follows(&source);
        Ok(())
    }

    fn delete_range(&mut self, start: usize, end: usize) {
        if start >= end {
            return;
        }
        let stale: SmallVec<[SegmentHandle; 8]> =
            self.path.order_mut().drain(start..end).collect();
        trace!(deleted = stale.len(), "deleted stale path segments");
        for handle in stale {
            self.path.release(handle);
        }
    }
}
