//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a focus-aware design system:
//! - Colors (base, focus, pressed overrides)
//! - Elevation per interaction state
//! - Border widths
//! - Motion (durations, easing, springs)
//! - Sizing (touch targets)

mod color;
mod elevation;
mod motion;
mod sizing;

pub use color::*;
pub use elevation::*;
pub use motion::*;
pub use sizing::*;
