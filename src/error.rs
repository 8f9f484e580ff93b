use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A cartesian scaler was requested for an axis that has not been
    /// assigned an orientation yet.
    #[error("axis orientation is unknown; the axis was not measured")]
    UnknownAxisOrientation,

    #[error("{axis} axis bounds are missing; the axis was not measured")]
    MissingBounds { axis: &'static str },

    #[error("segment handle {index}:{generation} does not belong to this path")]
    UnknownSegment { index: u32, generation: u32 },

    /// The caller replayed a segment that was already consumed during the
    /// current diff pass.
    #[error("segment with key {key} was replayed out of order")]
    SegmentOrderViolation { key: f64 },
}
