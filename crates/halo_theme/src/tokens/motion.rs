//! Motion tokens for theming

use halo_animation::{Curve, Easing, SpringConfig};
use serde::{Deserialize, Serialize};

/// Durations and curves for style transitions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionTokens {
    /// Tween duration for border width, border color and background
    pub border_duration_ms: u32,
    pub border_easing: Easing,
    /// Elevation follows a spring rather than a fixed-duration tween
    pub elevation_spring: SpringConfig,
}

impl MotionTokens {
    pub fn border_curve(&self) -> Curve {
        Curve::Tween(self.border_easing)
    }

    pub fn elevation_curve(&self) -> Curve {
        Curve::Spring(self.elevation_spring)
    }
}

impl Default for MotionTokens {
    fn default() -> Self {
        Self {
            border_duration_ms: 200,
            border_easing: Easing::Standard,
            elevation_spring: SpringConfig::snappy(),
        }
    }
}
