//! Sizing tokens for theming

use serde::{Deserialize, Serialize};

/// Minimum touch target recommended by Material and Apple HIG, in device-independent units
pub const MIN_TOUCH_TARGET: f32 = 48.0;

/// Complete set of sizing tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SizingTokens {
    /// Smallest width and height an interactive element may render at
    pub min_touch_target: f32,
}

impl Default for SizingTokens {
    fn default() -> Self {
        Self {
            min_touch_target: MIN_TOUCH_TARGET,
        }
    }
}
