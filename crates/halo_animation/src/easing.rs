//! Easing functions for tweened transitions

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Material "fast out, slow in": `cubic-bezier(0.4, 0.0, 0.2, 1.0)`
    #[default]
    Standard,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the easing function to a progress value, clamped to `0.0..=1.0`
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::Standard => cubic_bezier(t, 0.4, 0.0, 0.2, 1.0),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, *x1, *y1, *x2, *y2),
        }
    }
}

/// Evaluate a CSS cubic bezier timing function at `x`.
///
/// Solves `bezier_x(p) == x` with Newton-Raphson and falls back to bisection
/// when the slope flattens. Computed in f64.
fn cubic_bezier(x: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let target = x as f64;
    let (x1, y1, x2, y2) = (x1 as f64, y1 as f64, x2 as f64, y2 as f64);

    let mut p = target;
    for _ in 0..8 {
        let err = sample(p, x1, x2) - target;
        if err.abs() < 1e-7 {
            return sample(p, y1, y2) as f32;
        }
        let gradient = slope(p, x1, x2);
        if gradient.abs() < 1e-7 {
            break;
        }
        p = (p - err / gradient).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    p = target;
    for _ in 0..24 {
        let value = sample(p, x1, x2);
        if (value - target).abs() < 1e-7 {
            break;
        }
        if value < target {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    sample(p, y1, y2) as f32
}

/// One axis of the bezier with endpoints fixed at 0 and 1, in Horner form
#[inline]
fn sample(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

#[inline]
fn slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    (3.0 * a * t + 2.0 * b) * t + c
}
