pub mod axis;
pub mod axis_limit;
pub mod bounds;
pub mod dimensional_bounds;
pub mod polar_scaler;
pub mod scaler;
pub mod types;

pub use axis::{AxisOrientation, AxisScaleState, CartesianAxis, PolarAxis, ScaleHistory};
pub use axis_limit::{AxisLimit, is_unmeasured_limit, validate_limits};
pub use bounds::Bounds;
pub use dimensional_bounds::DimensionalBounds;
pub use polar_scaler::PolarScaler;
pub use scaler::Scaler;
pub use types::{Color, DrawMargin, Matrix, Point, Size};
