use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::error::{ChartError, ChartResult};
use crate::motion::Clock;
use crate::render::{CanvasConfig, Drawable, DrawingContext, FramePacer, PaintTask, PaintTaskId};

/// Outcome of one [`MotionCanvas::draw_frame`] pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub frame_time_ms: u64,
    /// No drawn animatable has a transition in flight.
    pub is_valid: bool,
    pub tasks_drawn: usize,
    pub geometries_drawn: usize,
    pub next_frame_delay: Duration,
}

/// Retained set of paint tasks drawn at a shared frame time.
///
/// Hosts that mutate chart state from another thread lock [`Self::sync`]
/// first; `draw_frame` holds the same lock for the whole pass.
pub struct MotionCanvas<C: DrawingContext> {
    config: CanvasConfig,
    clock: Arc<dyn Clock>,
    tasks: IndexMap<PaintTaskId, PaintTask<C>>,
    next_task_id: u64,
    sync: Arc<Mutex<()>>,
    is_valid: bool,
    pacer: FramePacer,
}

impl<C: DrawingContext> MotionCanvas<C> {
    pub fn new(config: CanvasConfig, clock: Arc<dyn Clock>) -> ChartResult<Self> {
        config.validate()?;
        let pacer = FramePacer::from_config(&config);
        Ok(Self {
            config,
            clock,
            tasks: IndexMap::new(),
            next_task_id: 0,
            sync: Arc::new(Mutex::new(())),
            is_valid: true,
            pacer,
        })
    }

    #[must_use]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    #[must_use]
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    #[must_use]
    pub fn sync(&self) -> Arc<Mutex<()>> {
        Arc::clone(&self.sync)
    }

    #[must_use]
    pub fn pacer(&self) -> &FramePacer {
        &self.pacer
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Requests another frame even if nothing is animating.
    pub fn invalidate(&mut self) {
        self.is_valid = false;
    }

    #[must_use]
    pub fn animations_disabled(&self) -> bool {
        self.config.disable_animations
    }

    pub fn set_disable_animations(&mut self, disable_animations: bool) {
        if self.config.disable_animations != disable_animations {
            debug!(disable_animations, "canvas animation mode changed");
            self.config.disable_animations = disable_animations;
            self.invalidate();
        }
    }

    pub fn add_paint_task(&mut self, task: PaintTask<C>) -> PaintTaskId {
        let id = PaintTaskId::new(self.next_task_id);
        self.next_task_id += 1;
        trace!(task = id.raw(), z_index = task.z_index, "paint task added");
        self.tasks.insert(id, task);
        self.invalidate();
        id
    }

    pub fn remove_paint_task(&mut self, id: PaintTaskId) -> Option<PaintTask<C>> {
        let removed = self.tasks.shift_remove(&id);
        if removed.is_some() {
            self.invalidate();
        } else {
            warn!(task = id.raw(), "attempted to remove unknown paint task");
        }
        removed
    }

    pub fn add_geometry(&mut self, id: PaintTaskId, geometry: Box<dyn Drawable<C>>) -> ChartResult<()> {
        let task = self.tasks.get_mut(&id).ok_or_else(|| {
            ChartError::InvalidData(format!("unknown paint task {}", id.raw()))
        })?;
        task.add_geometry(geometry);
        self.invalidate();
        Ok(())
    }

    #[must_use]
    pub fn paint_task(&self, id: PaintTaskId) -> Option<&PaintTask<C>> {
        self.tasks.get(&id)
    }

    pub fn paint_task_mut(&mut self, id: PaintTaskId) -> Option<&mut PaintTask<C>> {
        self.tasks.get_mut(&id)
    }

    #[must_use]
    pub fn paint_task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Task ids in draw order: ascending z-index, ties by insertion.
    #[must_use]
    pub fn draw_order(&self) -> Vec<PaintTaskId> {
        let mut ordered: Vec<(i32, PaintTaskId)> = self
            .tasks
            .iter()
            .map(|(id, task)| (task.z_index, *id))
            .collect();
        ordered.sort_by_key(|(z_index, _)| *z_index);
        ordered.into_iter().map(|(_, id)| id).collect()
    }

    /// Draws every task once at a single frame time.
    pub fn draw_frame(&mut self, context: &mut C) -> FrameReport {
        let sync = Arc::clone(&self.sync);
        let _guard = sync.lock().unwrap_or_else(PoisonError::into_inner);

        context.on_begin_draw();
        let frame_time_ms = self.clock.now_ms();
        let disabled = self.config.disable_animations;

        let mut is_valid = true;
        let mut tasks_drawn = 0_usize;
        let mut geometries_drawn = 0_usize;
        let mut finished_tasks: SmallVec<[PaintTaskId; 4]> = SmallVec::new();

        for id in self.draw_order() {
            let Some(task) = self.tasks.get_mut(&id) else {
                continue;
            };
            let PaintTask {
                paint,
                remove_on_completed,
                geometries,
                ..
            } = task;

            paint.motion_mut().begin_frame(frame_time_ms, disabled);
            paint.initialize(context);
            let paused = paint.is_paused();

            for geometry in geometries.iter_mut() {
                geometry.motion_mut().begin_frame(frame_time_ms, disabled);
                if !paused {
                    geometry.draw(context, &**paint);
                    geometries_drawn += 1;
                }
                if disabled {
                    geometry.motion_mut().mark_valid();
                }
                is_valid &= geometry.is_valid();
            }

            let before = geometries.len();
            geometries.retain(|geometry| !(geometry.remove_on_completed() && geometry.is_valid()));
            if geometries.len() != before {
                trace!(
                    task = id.raw(),
                    removed = before - geometries.len(),
                    "completed geometries removed"
                );
            }

            if disabled {
                paint.motion_mut().mark_valid();
            }
            is_valid &= paint.is_valid();
            if *remove_on_completed && paint.is_valid() {
                finished_tasks.push(id);
            }
            tasks_drawn += 1;
        }

        for id in finished_tasks {
            self.tasks.shift_remove(&id);
            debug!(task = id.raw(), "completed paint task removed");
        }

        self.is_valid = is_valid;
        context.on_end_draw();

        let finished_ms = self.clock.now_ms();
        let elapsed = Duration::from_millis(finished_ms.saturating_sub(frame_time_ms));
        let next_frame_delay = self.pacer.next_delay(elapsed);

        trace!(
            frame_time_ms,
            tasks_drawn,
            geometries_drawn,
            is_valid,
            "frame drawn"
        );

        FrameReport {
            frame_time_ms,
            is_valid,
            tasks_drawn,
            geometries_drawn,
            next_frame_delay,
        }
    }

    /// Draws frames until the canvas is valid or `max_frames` passes ran,
    /// handing each suggested delay to `sleep`. Returns the frames drawn.
    pub fn run_drawing_loop(
        &mut self,
        context: &mut C,
        max_frames: usize,
        mut sleep: impl FnMut(Duration),
    ) -> usize {
        let mut frames = 0;
        while frames < max_frames {
            let report = self.draw_frame(context);
            frames += 1;
            if report.is_valid {
                break;
            }
            if frames < max_frames {
                sleep(report.next_frame_delay);
            }
        }
        debug!(frames, is_valid = self.is_valid, "drawing loop finished");
        frames
    }
}
