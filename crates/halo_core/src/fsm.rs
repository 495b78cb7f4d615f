//! State Machine Runtime
//!
//! Table-driven flat state machines for element interaction states.
//! Supports:
//! - Typed states and events (any `Copy + Eq + Hash` enum)
//! - Guards (conditional transitions)
//! - Bounded transition history for debugging
//!
//! Events that match no transition from the current state are no-ops.

use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

/// Number of transitions retained in a machine's history
pub const HISTORY_LIMIT: usize = 32;

/// A guard function that determines if a transition should occur
pub type Guard = Box<dyn Fn() -> bool + Send>;

/// Bounds shared by state and event types
pub trait FsmKey: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> FsmKey for T {}

/// A transition in the state machine
pub struct Transition<S, E> {
    pub from_state: S,
    pub event: E,
    pub to_state: S,
    pub guard: Option<Guard>,
}

impl<S: FsmKey, E: FsmKey> Transition<S, E> {
    /// Create a simple transition without a guard
    pub fn new(from: S, event: E, to: S) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
            guard: None,
        }
    }

    /// Add a guard condition
    pub fn with_guard<F: Fn() -> bool + Send + 'static>(mut self, guard: F) -> Self {
        self.guard = Some(Box::new(guard));
        self
    }

    fn allowed(&self) -> bool {
        self.guard.as_ref().map_or(true, |guard| guard())
    }
}

/// Builder for creating state machines
pub struct StateMachineBuilder<S, E> {
    initial_state: S,
    transitions: Vec<Transition<S, E>>,
}

impl<S: FsmKey, E: FsmKey> StateMachineBuilder<S, E> {
    pub fn new(initial_state: S) -> Self {
        Self {
            initial_state,
            transitions: Vec::new(),
        }
    }

    /// Add a transition
    pub fn transition(mut self, transition: Transition<S, E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add a simple transition (from, event, to)
    pub fn on(self, from: S, event: E, to: S) -> Self {
        self.transition(Transition::new(from, event, to))
    }

    /// Build the state machine
    pub fn build(self) -> StateMachine<S, E> {
        StateMachine::new(self.initial_state, self.transitions)
    }
}

/// A state machine instance
pub struct StateMachine<S, E> {
    current_state: S,
    /// Transitions indexed by (from, event); guards are tried in insertion order
    table: FxHashMap<(S, E), Vec<Transition<S, E>>>,
    history: VecDeque<(S, E, S)>,
}

impl<S: FsmKey, E: FsmKey> StateMachine<S, E> {
    /// Create a new state machine with an initial state and transitions
    pub fn new(initial_state: S, transitions: Vec<Transition<S, E>>) -> Self {
        let mut table: FxHashMap<(S, E), Vec<Transition<S, E>>> = FxHashMap::default();
        for transition in transitions {
            table
                .entry((transition.from_state, transition.event))
                .or_default()
                .push(transition);
        }

        Self {
            current_state: initial_state,
            table,
            history: VecDeque::with_capacity(HISTORY_LIMIT),
        }
    }

    /// Create a builder for a state machine
    pub fn builder(initial_state: S) -> StateMachineBuilder<S, E> {
        StateMachineBuilder::new(initial_state)
    }

    /// Get the current state
    pub fn current_state(&self) -> S {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: S) -> bool {
        self.current_state == state
    }

    /// Most recent transitions, oldest first
    pub fn history(&self) -> &VecDeque<(S, E, S)> {
        &self.history
    }

    /// Clear transition history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn find(&self, event: E) -> Option<&Transition<S, E>> {
        self.table
            .get(&(self.current_state, event))
            .and_then(|candidates| candidates.iter().find(|t| t.allowed()))
    }

    /// Check if an event can trigger a transition from current state
    pub fn can_send(&self, event: E) -> bool {
        self.find(event).is_some()
    }

    /// Send an event to the state machine, potentially triggering a transition.
    ///
    /// Returns the state after the event.
    pub fn send(&mut self, event: E) -> S {
        let current = self.current_state;

        let Some(to_state) = self.find(event).map(|t| t.to_state) else {
            tracing::trace!(state = ?current, event = ?event, "no transition");
            return current;
        };

        self.current_state = to_state;

        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back((current, event, to_state));

        to_state
    }
}
