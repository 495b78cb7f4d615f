//! Replays pseudo-random event sequences against a reference model of the
//! interaction table.

use halo_core::InputEventKind;
use halo_widgets::{FocusableElement, InputModality, InteractionState};
use std::sync::{Arc, Mutex};

use InputEventKind::*;
use InteractionState::*;

const KINDS: [InputEventKind; 4] = [FocusGained, FocusLost, ActivationStart, ActivationEnd];

/// Small deterministic generator so failures reproduce from the seed alone
struct Lcg(u64);

impl Lcg {
    fn next_kind(&mut self) -> InputEventKind {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        KINDS[(self.0 >> 33) as usize % KINDS.len()]
    }
}

#[derive(Default)]
struct Model {
    state: InteractionState,
    has_focus: bool,
}

impl Model {
    fn step(&mut self, kind: InputEventKind) -> InteractionState {
        self.state = match (self.state, kind) {
            (s, FocusGained) => {
                self.has_focus = true;
                if s == Idle {
                    Focused
                } else {
                    s
                }
            }
            (s, FocusLost) => {
                self.has_focus = false;
                if s == Focused {
                    Idle
                } else {
                    s
                }
            }
            (Idle | Focused, ActivationStart) => Pressed,
            (Pressed, ActivationEnd) if self.has_focus => Focused,
            (Pressed, ActivationEnd) => Idle,
            (s, _) => s,
        };
        self.state
    }
}

#[test]
fn random_sequences_follow_the_table() {
    for seed in 0..64u64 {
        let mut rng = Lcg(seed);
        let mut model = Model::default();
        let mut element = FocusableElement::new(format!("seed-{seed}"));

        for step in 0..200 {
            let kind = rng.next_kind();
            let before = element.state();
            let expected = model.step(kind);
            let change = element.handle(kind);

            assert_eq!(
                element.state(),
                expected,
                "seed {seed}, step {step}: {before} --{kind}-->"
            );
            assert_eq!(change.is_some(), before != expected);
            assert_eq!(element.owns_focus(), model.has_focus);
        }
    }
}

#[test]
fn observer_sees_exactly_the_state_changes() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let mut element = FocusableElement::new("observed")
        .with_observer(move |state, _| sink.lock().unwrap().push(state));

    let mut rng = Lcg(7);
    let mut changes = Vec::new();
    for _ in 0..500 {
        if let Some(change) = element.handle(rng.next_kind()) {
            assert_ne!(change.from, change.to);
            changes.push(change.to);
        }
    }

    assert_eq!(*seen.lock().unwrap(), changes);
}

#[test]
fn modality_follows_entry_path() {
    let mut rng = Lcg(42);
    let mut element = FocusableElement::new("modality");

    for _ in 0..500 {
        let Some(change) = element.handle(rng.next_kind()) else {
            continue;
        };
        let expected = match (change.from, change.to) {
            (Idle, Focused) | (Focused, Pressed) => Some(InputModality::KeyboardDpad),
            (Idle, Pressed) => Some(InputModality::TouchMouse),
            _ => None,
        };
        assert_eq!(change.modality, expected);
        if expected.is_some() {
            assert_eq!(element.last_modality(), expected);
        }
    }
}

#[test]
fn release_after_keyboard_focus_returns_to_focused() {
    let mut element = FocusableElement::new("keyboard");
    for kind in [FocusGained, ActivationStart, ActivationEnd] {
        element.handle(kind);
    }
    assert_eq!(element.state(), Focused);
}

#[test]
fn release_after_focus_moved_away_returns_to_idle() {
    let mut element = FocusableElement::new("moved");
    for kind in [FocusGained, ActivationStart, FocusLost, ActivationEnd] {
        element.handle(kind);
    }
    assert_eq!(element.state(), Idle);
    assert!(!element.owns_focus());
}
