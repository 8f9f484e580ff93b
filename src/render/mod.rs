mod canvas;
mod config;
mod frame_pacing;
mod null_context;
mod paint_task;

pub use canvas::{FrameReport, MotionCanvas};
pub use config::CanvasConfig;
pub use frame_pacing::FramePacer;
pub use null_context::NullDrawingContext;
pub use paint_task::{PaintTask, PaintTaskId};

use crate::motion::Animatable;

/// Backend drawing surface owned by the embedding renderer.
///
/// The canvas only brackets each pass; what a context can draw is between
/// the context and the geometries that use it.
pub trait DrawingContext {
    fn on_begin_draw(&mut self) {}

    fn on_end_draw(&mut self) {}
}

/// Stroke/fill style shared by the geometries of one paint task.
///
/// It is passed explicitly to [`Drawable::draw`] as the active paint.
pub trait Paint<C: DrawingContext>: Animatable {
    /// Called once per frame before the task's geometries are drawn.
    fn initialize(&mut self, _context: &mut C) {}

    /// Paused paints keep their geometries but skip drawing them.
    fn is_paused(&self) -> bool {
        false
    }
}

/// A shape that reads its motion properties and draws itself.
pub trait Drawable<C: DrawingContext>: Animatable {
    fn draw(&mut self, context: &mut C, paint: &dyn Paint<C>);

    /// Removed from its task once all its transitions completed, e.g. a
    /// point fading out after its data was deleted.
    fn remove_on_completed(&self) -> bool {
        false
    }
}
