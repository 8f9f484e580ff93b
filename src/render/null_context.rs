use crate::render::DrawingContext;

/// No-op drawing context used by tests and headless hosts.
///
/// It still tracks pass bracketing so callers can catch unbalanced
/// begin/end calls before a real backend is wired in.
#[derive(Debug, Default)]
pub struct NullDrawingContext {
    pub passes_started: usize,
    pub passes_finished: usize,
    pub in_pass: bool,
}

impl DrawingContext for NullDrawingContext {
    fn on_begin_draw(&mut self) {
        self.passes_started += 1;
        self.in_pass = true;
    }

    fn on_end_draw(&mut self) {
        self.passes_finished += 1;
        self.in_pass = false;
    }
}
