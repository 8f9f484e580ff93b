use crate::core::{Color, Matrix, Point, Size};

/// Values a [`crate::motion::MotionProperty`] can tween.
///
/// `progress` is the eased progress: `0` yields `from`, `1` yields `to`,
/// and easing curves may push it outside `[0, 1]`.
pub trait Interpolate: Clone + PartialEq {
    fn interpolate(from: &Self, to: &Self, progress: f32) -> Self;
}

#[inline]
fn lerp(from: f64, to: f64, progress: f32) -> f64 {
    from + (to - from) * f64::from(progress)
}

impl Interpolate for f64 {
    fn interpolate(from: &Self, to: &Self, progress: f32) -> Self {
        lerp(*from, *to, progress)
    }
}

impl Interpolate for f32 {
    fn interpolate(from: &Self, to: &Self, progress: f32) -> Self {
        from + (to - from) * progress
    }
}

/// Optional values (e.g. an axis limit that may be unset) cannot tween from
/// or to "nothing", so any `None` side jumps straight to the target.
impl Interpolate for Option<f64> {
    fn interpolate(from: &Self, to: &Self, progress: f32) -> Self {
        match (from, to) {
            (Some(from), Some(to)) => Some(lerp(*from, *to, progress)),
            _ => *to,
        }
    }
}

impl Interpolate for Point {
    fn interpolate(from: &Self, to: &Self, progress: f32) -> Self {
        Point::new(
            lerp(from.x, to.x, progress),
            lerp(from.y, to.y, progress),
        )
    }
}

impl Interpolate for Size {
    fn interpolate(from: &Self, to: &Self, progress: f32) -> Self {
        Size::new(
            lerp(from.width, to.width, progress),
            lerp(from.height, to.height, progress),
        )
    }
}

impl Interpolate for Color {
    fn interpolate(from: &Self, to: &Self, progress: f32) -> Self {
        Color::rgba(
            lerp(from.red, to.red, progress),
            lerp(from.green, to.green, progress),
            lerp(from.blue, to.blue, progress),
            lerp(from.alpha, to.alpha, progress),
        )
    }
}

/// Component-wise; good enough for the translate/scale transforms charts
/// animate, not a decomposed rotation blend.
impl Interpolate for Matrix {
    fn interpolate(from: &Self, to: &Self, progress: f32) -> Self {
        Matrix {
            scale_x: lerp(from.scale_x, to.scale_x, progress),
            skew_x: lerp(from.skew_x, to.skew_x, progress),
            translate_x: lerp(from.translate_x, to.translate_x, progress),
            skew_y: lerp(from.skew_y, to.skew_y, progress),
            scale_y: lerp(from.scale_y, to.scale_y, progress),
            translate_y: lerp(from.translate_y, to.translate_y, progress),
        }
    }
}
