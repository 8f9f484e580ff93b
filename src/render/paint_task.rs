use serde::{Deserialize, Serialize};

use crate::render::{Drawable, DrawingContext, Paint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaintTaskId(u64);

impl PaintTaskId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// A paint plus the geometries drawn with it, composited at `z_index`.
pub struct PaintTask<C: DrawingContext> {
    pub(super) paint: Box<dyn Paint<C>>,
    pub(super) z_index: i32,
    pub(super) remove_on_completed: bool,
    pub(super) geometries: Vec<Box<dyn Drawable<C>>>,
}

impl<C: DrawingContext> PaintTask<C> {
    #[must_use]
    pub fn new(paint: Box<dyn Paint<C>>) -> Self {
        Self {
            paint,
            z_index: 0,
            remove_on_completed: false,
            geometries: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Drops the whole task once its paint finished animating.
    #[must_use]
    pub fn with_remove_on_completed(mut self, remove_on_completed: bool) -> Self {
        self.remove_on_completed = remove_on_completed;
        self
    }

    #[must_use]
    pub fn with_geometry(mut self, geometry: Box<dyn Drawable<C>>) -> Self {
        self.geometries.push(geometry);
        self
    }

    #[must_use]
    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    pub fn set_z_index(&mut self, z_index: i32) {
        self.z_index = z_index;
    }

    #[must_use]
    pub fn paint(&self) -> &dyn Paint<C> {
        self.paint.as_ref()
    }

    pub fn paint_mut(&mut self) -> &mut dyn Paint<C> {
        self.paint.as_mut()
    }

    pub fn add_geometry(&mut self, geometry: Box<dyn Drawable<C>>) {
        self.geometries.push(geometry);
    }

    #[must_use]
    pub fn geometry_count(&self) -> usize {
        self.geometries.len()
    }

    pub fn geometries_mut(&mut self) -> impl Iterator<Item = &mut (dyn Drawable<C> + 'static)> {
        self.geometries.iter_mut().map(|geometry| geometry.as_mut())
    }

    pub fn clear_geometries(&mut self) {
        self.geometries.clear();
    }
}
