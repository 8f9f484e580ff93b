//! Easing curves applied to the linear progress of a transition.
//!
//! Only a handful of presets ship with the crate; anything else goes
//! through [`Easing::custom`].

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

#[derive(Clone, Default, Serialize, Deserialize)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// CSS-style cubic bezier `(x1, y1, x2, y2)` with `x1`, `x2` in `[0, 1]`.
    CubicBezier(f32, f32, f32, f32),
    #[serde(skip)]
    Custom(Arc<dyn Fn(f32) -> f32 + Send + Sync>),
}

impl Easing {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Maps progress `t` in `[0, 1]` to the eased progress. Curves may
    /// overshoot the unit range.
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, *x1, *y1, *x2, *y2),
            Self::Custom(f) => f(t),
        }
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::EaseIn => write!(f, "EaseIn"),
            Self::EaseOut => write!(f, "EaseOut"),
            Self::EaseInOut => write!(f, "EaseInOut"),
            Self::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "CubicBezier({x1}, {y1}, {x2}, {y2})")
            }
            Self::Custom(_) => write!(f, "Custom"),
        }
    }
}

impl PartialEq for Easing {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Linear, Self::Linear)
            | (Self::EaseIn, Self::EaseIn)
            | (Self::EaseOut, Self::EaseOut)
            | (Self::EaseInOut, Self::EaseInOut) => true,
            (Self::CubicBezier(a1, b1, c1, d1), Self::CubicBezier(a2, b2, c2, d2)) => {
                a1 == a2 && b1 == b2 && c1 == c2 && d1 == d2
            }
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Solves the bezier x(s) = t with Newton-Raphson, then evaluates y(s).
fn cubic_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let mut s = t;
    for _ in 0..8 {
        let slope = bezier_slope(s, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= (bezier_component(s, x1, x2) - t) / slope;
    }
    bezier_component(s, y1, y2)
}

fn bezier_component(s: f32, p1: f32, p2: f32) -> f32 {
    let ms = 1.0 - s;
    3.0 * ms * ms * s * p1 + 3.0 * ms * s * s * p2 + s * s * s
}

fn bezier_slope(s: f32, p1: f32, p2: f32) -> f32 {
    let ms = 1.0 - s;
    3.0 * ms * ms * p1 + 6.0 * ms * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}
