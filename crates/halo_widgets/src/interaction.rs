//! Interaction states and the transition table
//!
//! | From | Event | To |
//! |---|---|---|
//! | Idle | focus gained | Focused |
//! | Idle | activation start | Pressed |
//! | Focused | focus lost | Idle |
//! | Focused | activation start | Pressed |
//! | Pressed | activation end, focus retained | Focused |
//! | Pressed | activation end, focus lost | Idle |
//!
//! Every other (state, event) pair leaves the state unchanged.

use halo_core::fsm::{StateMachine, Transition};
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Input/focus condition of one interactive element
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionState {
    /// No focus, not activated
    #[default]
    Idle,
    /// Holds logical input focus (Tab, D-pad, programmatic)
    Focused,
    /// Being activated (pointer down or activation key held)
    Pressed,
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Idle => "Idle",
            Self::Focused => "Focused",
            Self::Pressed => "Pressed",
        })
    }
}

/// Events understood by the interaction machine.
///
/// `ActivationEnd` carries whether the element still owns focus, which picks
/// between the two rows leaving `Pressed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InteractionEvent {
    FocusGained,
    FocusLost,
    ActivationStart,
    ActivationEnd { focus_retained: bool },
}

/// Build the interaction machine.
///
/// Transitions that *enter* `Focused` or `Pressed` are guarded by `enabled`;
/// a disabled element can still wind down to `Idle`.
pub fn interaction_machine(
    enabled: Arc<AtomicBool>,
) -> StateMachine<InteractionState, InteractionEvent> {
    use InteractionEvent::*;
    use InteractionState::*;

    let guarded = |from: InteractionState, event: InteractionEvent, to: InteractionState| {
        let enabled = enabled.clone();
        Transition::new(from, event, to).with_guard(move || enabled.load(Ordering::Relaxed))
    };

    StateMachine::builder(Idle)
        .transition(guarded(Idle, FocusGained, Focused))
        .transition(guarded(Idle, ActivationStart, Pressed))
        .on(Focused, FocusLost, Idle)
        .transition(guarded(Focused, ActivationStart, Pressed))
        .transition(guarded(
            Pressed,
            ActivationEnd {
                focus_retained: true,
            },
            Focused,
        ))
        .on(
            Pressed,
            ActivationEnd {
                focus_retained: false,
            },
            Idle,
        )
        .build()
}
