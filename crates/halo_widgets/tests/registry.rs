use halo_core::{InputEvent, InputEventKind};
use halo_theme::ThemePreset;
use halo_widgets::prelude::*;

#[test]
fn focus_moves_between_elements() {
    let theme = ThemePreset::Aqua.theme();
    let mut registry = ElementRegistry::new();
    let ids: Vec<ElementId> = ["Home", "Search", "Library"]
        .into_iter()
        .map(|label| registry.mount(FocusableElement::new(label)))
        .collect();

    registry.dispatch(&InputEvent::focus_gained(ids[0]));
    registry.dispatch(&InputEvent::focus_lost(ids[0]));
    registry.dispatch(&InputEvent::focus_gained(ids[1]));

    assert_eq!(registry.focused(), Some(ids[1]));
    assert_eq!(registry.state(ids[0]), Some(InteractionState::Idle));
    assert_eq!(registry.state(ids[2]), Some(InteractionState::Idle));

    let focused = registry.style(ids[1], &theme).unwrap();
    assert_eq!(focused.border_width, theme.borders().focused_width);
    assert_eq!(focused.font_weight, FontWeight::Bold);
}

#[test]
fn stale_ids_are_ignored() {
    let mut registry = ElementRegistry::new();
    let id = registry.mount(FocusableElement::new("Gone"));
    registry.unmount(id);

    let replacement = registry.mount(FocusableElement::new("New"));
    assert_ne!(id, replacement);

    for kind in [
        InputEventKind::FocusGained,
        InputEventKind::ActivationStart,
    ] {
        assert_eq!(registry.dispatch(&InputEvent::new(kind, id)), None);
    }
    assert_eq!(registry.state(replacement), Some(InteractionState::Idle));
}

#[test]
fn dispatch_reports_transition_hint() {
    let resolver = FocusStyleResolver::new(ThemePreset::HighContrast.theme());
    let mut registry = ElementRegistry::new();
    let id = registry.mount(FocusableElement::new("Play"));

    let change = registry
        .dispatch(&InputEvent::activation_start(id).at(16))
        .unwrap();
    assert_eq!(change.modality, Some(InputModality::TouchMouse));

    let transition = resolver.resolve_transition(&change);
    assert_eq!(transition.from, resolver.resolve_style(InteractionState::Idle));
    assert_eq!(transition.to, resolver.resolve_style(InteractionState::Pressed));
    assert_ne!(transition.from.background_color, transition.to.background_color);
}

#[test]
fn styles_serialize_for_renderer_handoff() {
    let resolver = FocusStyleResolver::default();
    let json = serde_json::to_value(resolver.resolve_style(InteractionState::Idle)).unwrap();
    assert_eq!(json["border_color"], "#00000000");
    assert_eq!(json["font_weight"], "normal");
    assert_eq!(json["min_size"], 48.0);
}
