//! Input events
//!
//! Focus and activation events delivered by the platform's input and
//! focus-traversal subsystem, each addressed to one mounted element.

use serde::Serialize;
use slotmap::new_key_type;
use std::fmt;

new_key_type! {
    /// Unique identifier for a mounted interactive element
    pub struct ElementId;
}

/// Kind of input event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum InputEventKind {
    /// Element received logical input focus (Tab, D-pad, programmatic)
    FocusGained,
    /// Element lost logical input focus
    FocusLost,
    /// Pointer down or activation key pressed
    ActivationStart,
    /// Pointer up or activation key released
    ActivationEnd,
}

impl fmt::Display for InputEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FocusGained => "focusGained",
            Self::FocusLost => "focusLost",
            Self::ActivationStart => "activationStart",
            Self::ActivationEnd => "activationEnd",
        })
    }
}

/// An input event targeting a single element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputEvent {
    pub kind: InputEventKind,
    pub target: ElementId,
    /// Platform timestamp in milliseconds, informational only
    pub timestamp: u64,
}

impl InputEvent {
    pub fn new(kind: InputEventKind, target: ElementId) -> Self {
        Self {
            kind,
            target,
            timestamp: 0,
        }
    }

    pub fn focus_gained(target: ElementId) -> Self {
        Self::new(InputEventKind::FocusGained, target)
    }

    pub fn focus_lost(target: ElementId) -> Self {
        Self::new(InputEventKind::FocusLost, target)
    }

    pub fn activation_start(target: ElementId) -> Self {
        Self::new(InputEventKind::ActivationStart, target)
    }

    pub fn activation_end(target: ElementId) -> Self {
        Self::new(InputEventKind::ActivationEnd, target)
    }

    /// Attach a platform timestamp
    pub fn at(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }
}
