//! Animation hints between two styles
//!
//! Border, color and weight changes run as a tween of fixed duration. Elevation
//! runs on its own curve, usually a spring, so the two channels can finish at
//! different times.

use crate::style::{mix, StyleDescriptor};
use halo_animation::Curve;
use halo_theme::MotionTokens;
use serde::Serialize;

/// Description of how to move from one style to another
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StyleTransition {
    pub from: StyleDescriptor,
    pub to: StyleDescriptor,
    /// Duration of the border and color channel
    pub duration_ms: u32,
    /// Curve for border, color and weight
    pub curve: Curve,
    /// Curve for elevation
    pub elevation_curve: Curve,
}

impl StyleTransition {
    /// Transition using the theme's motion tokens
    pub fn between(from: StyleDescriptor, to: StyleDescriptor, motion: &MotionTokens) -> Self {
        Self {
            from,
            to,
            duration_ms: motion.border_duration_ms,
            curve: motion.border_curve(),
            elevation_curve: motion.elevation_curve(),
        }
    }

    /// Jump straight to `to`
    pub fn immediate(from: StyleDescriptor, to: StyleDescriptor) -> Self {
        Self {
            from,
            to,
            duration_ms: 0,
            curve: Curve::default(),
            elevation_curve: Curve::default(),
        }
    }

    pub fn elevation_duration_ms(&self) -> u32 {
        self.elevation_curve.natural_duration_ms(self.duration_ms)
    }

    /// Time until both channels have settled
    pub fn total_duration_ms(&self) -> u32 {
        self.duration_ms.max(self.elevation_duration_ms())
    }

    pub fn is_finished(&self, elapsed_ms: u32) -> bool {
        elapsed_ms >= self.total_duration_ms()
    }

    /// Interpolated style `elapsed_ms` after the transition started
    pub fn sample(&self, elapsed_ms: u32) -> StyleDescriptor {
        let color_progress = channel_progress(&self.curve, elapsed_ms, self.duration_ms);
        let elevation_progress =
            channel_progress(&self.elevation_curve, elapsed_ms, self.elevation_duration_ms());

        let mut style = StyleDescriptor::lerp(&self.from, &self.to, color_progress);
        style.elevation = mix(self.from.elevation, self.to.elevation, elevation_progress);
        style
    }
}

fn channel_progress(curve: &Curve, elapsed_ms: u32, duration_ms: u32) -> f32 {
    if duration_ms == 0 {
        return 1.0;
    }
    curve.progress(elapsed_ms as f32 / duration_ms as f32, duration_ms)
}
