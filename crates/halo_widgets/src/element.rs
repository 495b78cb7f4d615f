//! Focusable element
//!
//! Wraps the interaction machine with the bookkeeping the table alone cannot
//! express:
//!
//! - **Focus ownership.** `focusGained` and `focusLost` always update whether
//!   the element owns focus, even when the state does not change (a focus
//!   change while `Pressed`). `activationEnd` uses it to choose between
//!   `Focused` and `Idle`.
//! - **Modality.** Entering `Focused` from `Idle`, or `Pressed` from `Focused`,
//!   is keyboard/D-pad input. Entering `Pressed` straight from `Idle` is
//!   touch/mouse input.
//! - **Observer.** Notified once per actual state change, never for no-ops.

use crate::interaction::{interaction_machine, InteractionEvent, InteractionState};
use crate::modality::InputModality;
use crate::style::{resolve_style, StyleDescriptor};
use crate::transition::StyleTransition;
use halo_core::fsm::StateMachine;
use halo_core::InputEventKind;
use halo_theme::Theme;
use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Callback invoked with the new state and the modality that caused it
pub type Observer = Box<dyn FnMut(InteractionState, Option<InputModality>) + Send>;

/// A state change produced by one event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateChange {
    pub from: InteractionState,
    pub to: InteractionState,
    /// Set when the change classifies the input modality
    pub modality: Option<InputModality>,
}

impl StateChange {
    /// Animation hint for this change under `theme`
    pub fn transition(&self, theme: &Theme) -> StyleTransition {
        StyleTransition::between(
            resolve_style(self.from, theme),
            resolve_style(self.to, theme),
            theme.motion(),
        )
    }
}

fn classify(from: InteractionState, to: InteractionState) -> Option<InputModality> {
    use InteractionState::*;
    match (from, to) {
        (Idle, Focused) | (Focused, Pressed) => Some(InputModality::KeyboardDpad),
        (Idle, Pressed) => Some(InputModality::TouchMouse),
        _ => None,
    }
}

/// One interactive element (button, card, list item)
pub struct FocusableElement {
    label: String,
    machine: StateMachine<InteractionState, InteractionEvent>,
    enabled: Arc<AtomicBool>,
    has_focus: bool,
    last_modality: Option<InputModality>,
    observer: Option<Observer>,
}

impl FocusableElement {
    pub fn new(label: impl Into<String>) -> Self {
        let enabled = Arc::new(AtomicBool::new(true));
        Self {
            label: label.into(),
            machine: interaction_machine(enabled.clone()),
            enabled,
            has_focus: false,
            last_modality: None,
            observer: None,
        }
    }

    /// Register the state-change observer, replacing any previous one
    pub fn with_observer<F>(mut self, observer: F) -> Self
    where
        F: FnMut(InteractionState, Option<InputModality>) + Send + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Builder form of [`set_enabled`](Self::set_enabled)
    pub fn enabled(self, enabled: bool) -> Self {
        self.set_enabled(enabled);
        self
    }

    /// A disabled element cannot gain focus or be pressed.
    ///
    /// Disabling does not move the element out of its current state; it
    /// returns to `Idle` on the next focus loss or activation end.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn state(&self) -> InteractionState {
        self.machine.current_state()
    }

    /// Whether the element currently holds logical input focus
    pub fn owns_focus(&self) -> bool {
        self.has_focus
    }

    pub fn last_modality(&self) -> Option<InputModality> {
        self.last_modality
    }

    /// Recent transitions, oldest first
    pub fn history(&self) -> &VecDeque<(InteractionState, InteractionEvent, InteractionState)> {
        self.machine.history()
    }

    /// Style for the current state
    pub fn style(&self, theme: &Theme) -> StyleDescriptor {
        resolve_style(self.state(), theme)
    }

    pub fn on_focus_gained(&mut self) -> Option<StateChange> {
        if self.is_enabled() {
            self.has_focus = true;
        }
        self.apply(InteractionEvent::FocusGained)
    }

    pub fn on_focus_lost(&mut self) -> Option<StateChange> {
        self.has_focus = false;
        self.apply(InteractionEvent::FocusLost)
    }

    pub fn on_activation_start(&mut self) -> Option<StateChange> {
        self.apply(InteractionEvent::ActivationStart)
    }

    pub fn on_activation_end(&mut self) -> Option<StateChange> {
        let focus_retained = self.has_focus && self.is_enabled();
        self.apply(InteractionEvent::ActivationEnd { focus_retained })
    }

    /// Route a platform event to the matching handler
    pub fn handle(&mut self, kind: InputEventKind) -> Option<StateChange> {
        match kind {
            InputEventKind::FocusGained => self.on_focus_gained(),
            InputEventKind::FocusLost => self.on_focus_lost(),
            InputEventKind::ActivationStart => self.on_activation_start(),
            InputEventKind::ActivationEnd => self.on_activation_end(),
        }
    }

    fn apply(&mut self, event: InteractionEvent) -> Option<StateChange> {
        let from = self.machine.current_state();
        let to = self.machine.send(event);
        if from == to {
            return None;
        }

        let modality = classify(from, to);
        if modality.is_some() {
            self.last_modality = modality;
        }

        tracing::debug!(
            label = %self.label,
            %from,
            %to,
            ?event,
            modality = modality.map(InputModality::as_str),
            "interaction state changed"
        );

        if let Some(observer) = self.observer.as_mut() {
            observer(to, modality);
        }

        Some(StateChange { from, to, modality })
    }
}

impl fmt::Debug for FocusableElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusableElement")
            .field("label", &self.label)
            .field("state", &self.state())
            .field("enabled", &self.is_enabled())
            .field("has_focus", &self.has_focus)
            .field("last_modality", &self.last_modality)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}
