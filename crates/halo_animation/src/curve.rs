//! Curve kinds attached to transition hints

use crate::easing::Easing;
use crate::spring::SpringConfig;
use serde::{Deserialize, Serialize};

/// How a renderer should move between two values
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Curve {
    /// Fixed-duration tween
    Tween(Easing),
    /// Physics spring; duration is a settle estimate
    Spring(SpringConfig),
}

impl Curve {
    /// Eased progress at normalized time `t` of a transition lasting `duration_ms`.
    ///
    /// Always 0 at `t <= 0` and exactly 1 at `t >= 1`. Springs may exceed 1 in
    /// between.
    pub fn progress(&self, t: f32, duration_ms: u32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Curve::Tween(easing) => easing.apply(t),
            Curve::Spring(spring) => spring.response(t * duration_ms as f32 / 1000.0),
        }
    }

    /// Natural duration of the curve when no explicit duration is configured
    pub fn natural_duration_ms(&self, tween_ms: u32) -> u32 {
        match self {
            Curve::Tween(_) => tween_ms,
            Curve::Spring(spring) => spring.settle_duration_ms(),
        }
    }
}

impl Default for Curve {
    fn default() -> Self {
        Curve::Tween(Easing::Standard)
    }
}
