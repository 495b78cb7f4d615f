//! Spring parameters
//!
//! A damped harmonic oscillator described by stiffness, damping and mass.
//! The step response is evaluated in closed form, so sampling is exact and
//! independent of frame rate.

use serde::{Deserialize, Serialize};

/// Fraction of the travel distance at which a spring counts as settled
const SETTLE_THRESHOLD: f64 = 0.01;

/// Spring configuration
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Soft, slow settle
    pub const fn gentle() -> Self {
        Self::new(120.0, 14.0, 1.0)
    }

    /// Quick with a small overshoot; the default for elevation changes
    pub const fn snappy() -> Self {
        Self::new(400.0, 28.0, 1.0)
    }

    /// Fast and critically damped
    pub const fn stiff() -> Self {
        Self::new(900.0, 60.0, 1.0)
    }

    /// Visible bounce
    pub const fn bouncy() -> Self {
        Self::new(300.0, 10.0, 1.0)
    }

    /// Undamped angular frequency, rad/s
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness as f64 / self.mass as f64).sqrt()
    }

    /// Damping ratio; `< 1` overshoots, `1` is critical, `> 1` is overdamped
    pub fn damping_ratio(&self) -> f64 {
        self.damping as f64 / (2.0 * (self.stiffness as f64 * self.mass as f64).sqrt())
    }

    /// Normalized position at `t` seconds for a unit step from rest.
    ///
    /// Starts at 0, converges to 1; underdamped springs overshoot past 1.
    pub fn response(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        let t = t as f64;
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        let x = if (zeta - 1.0).abs() < 1e-6 {
            1.0 - (-w0 * t).exp() * (1.0 + w0 * t)
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * w0 * t).exp();
            1.0 - decay * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            1.0 + (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r1 - r2)
        };

        x as f32
    }

    /// Approximate time until the spring stays within 1% of its target, in ms.
    ///
    /// Uses the decay envelope of the slowest pole, which is what renderers
    /// want as a duration hint.
    pub fn settle_duration_ms(&self) -> u32 {
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();
        let ln = (1.0 / SETTLE_THRESHOLD).ln();

        let seconds = if (zeta - 1.0).abs() < 1e-6 {
            // e^-x (1 + x) = 0.01
            6.64 / w0
        } else if zeta < 1.0 {
            ln / (zeta * w0)
        } else {
            ln / (w0 * (zeta - (zeta * zeta - 1.0).sqrt()))
        };

        (seconds * 1000.0).ceil() as u32
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::snappy()
    }
}
