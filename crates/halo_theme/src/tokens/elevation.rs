//! Elevation and border tokens for theming

use serde::{Deserialize, Serialize};

/// Elevation per interaction state, in device-independent units
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElevationTokens {
    pub idle: f32,
    pub focused: f32,
    /// Falls back to `focused` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressed: Option<f32>,
}

impl ElevationTokens {
    pub fn pressed_or_focused(&self) -> f32 {
        self.pressed.unwrap_or(self.focused)
    }
}

impl Default for ElevationTokens {
    fn default() -> Self {
        Self {
            idle: 2.0,
            focused: 8.0,
            pressed: None,
        }
    }
}

/// Border widths, in device-independent units
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BorderTokens {
    pub idle_width: f32,
    /// Focus ring width, also used while pressed
    pub focused_width: f32,
}

impl Default for BorderTokens {
    fn default() -> Self {
        Self {
            idle_width: 0.0,
            focused_width: 4.0,
        }
    }
}
