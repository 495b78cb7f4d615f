//! Input modality classification

use serde::Serialize;
use std::fmt;

/// Which kind of input most recently moved an element into an active state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputModality {
    /// Tab / arrow keys / remote D-pad
    KeyboardDpad,
    /// Direct pointer or touch activation
    TouchMouse,
}

impl InputModality {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::KeyboardDpad => "Keyboard/D-Pad",
            Self::TouchMouse => "Touch/Mouse",
        }
    }
}

impl fmt::Display for InputModality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
