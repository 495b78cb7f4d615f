//! Element registry
//!
//! Owns every mounted [`FocusableElement`] and routes platform events to them
//! by [`ElementId`]. Each element's state is independent of all others.

use crate::element::{FocusableElement, StateChange};
use crate::interaction::InteractionState;
use crate::style::StyleDescriptor;
use halo_core::{ElementId, InputEvent};
use halo_theme::Theme;
use slotmap::SlotMap;

/// Runtime for managing mounted elements
#[derive(Debug, Default)]
pub struct ElementRegistry {
    elements: SlotMap<ElementId, FocusableElement>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self {
            elements: SlotMap::with_key(),
        }
    }

    /// Mount an element; it starts in whatever state it was built in
    pub fn mount(&mut self, element: FocusableElement) -> ElementId {
        let label = element.label().to_owned();
        let id = self.elements.insert(element);
        tracing::debug!(?id, %label, "mounted element");
        id
    }

    /// Unmount an element, returning it. Later events for `id` are dropped.
    pub fn unmount(&mut self, id: ElementId) -> Option<FocusableElement> {
        let element = self.elements.remove(id);
        if element.is_some() {
            tracing::debug!(?id, "unmounted element");
        }
        element
    }

    pub fn get(&self, id: ElementId) -> Option<&FocusableElement> {
        self.elements.get(id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut FocusableElement> {
        self.elements.get_mut(id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(id)
    }

    /// Deliver an event to its target element.
    ///
    /// Returns the resulting state change, or `None` for no-ops and events
    /// addressed to elements that are not mounted.
    pub fn dispatch(&mut self, event: &InputEvent) -> Option<StateChange> {
        let Some(element) = self.elements.get_mut(event.target) else {
            tracing::debug!(id = ?event.target, kind = %event.kind, "event for unmounted element dropped");
            return None;
        };
        element.handle(event.kind)
    }

    pub fn state(&self, id: ElementId) -> Option<InteractionState> {
        self.elements.get(id).map(FocusableElement::state)
    }

    pub fn style(&self, id: ElementId, theme: &Theme) -> Option<StyleDescriptor> {
        self.elements.get(id).map(|element| element.style(theme))
    }

    /// Element currently owning focus, if any
    pub fn focused(&self) -> Option<ElementId> {
        self.elements
            .iter()
            .find(|(_, element)| element.owns_focus())
            .map(|(id, _)| id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &FocusableElement)> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
