//! chart-motion: the animated core of a retained-mode charting engine.
//!
//! Measurement (`core`) turns data into bounds and scalers, `motion` tweens
//! every visual property over time, `path` diffs line/area segments between
//! updates, and `render` drives the frame loop over an abstract drawing
//! context supplied by the host.

pub mod core;
pub mod error;
pub mod motion;
pub mod path;
pub mod render;
pub mod telemetry;

pub use error::{ChartError, ChartResult};
