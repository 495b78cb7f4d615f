//! Halo Animation Descriptors
//!
//! Halo does not run animations itself. It hands renderers a start value,
//! an end value, a duration and a [`Curve`]; this crate defines the curves.
//!
//! # Features
//!
//! - **Easing**: CSS-compatible tweens, including cubic bezier
//! - **Springs**: stiffness/damping/mass parameters with an analytic step
//!   response, so a renderer (or a test) can sample a spring without
//!   integrating it

pub mod curve;
pub mod easing;
pub mod spring;

pub use curve::Curve;
pub use easing::Easing;
pub use spring::SpringConfig;
