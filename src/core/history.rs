//! State transition history tracking.
//!
//! A terminal keeps an append-only log of its state changes so that
//! callers can audit how many sessions ran and when.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single state change.
///
/// # Example
///
/// ```rust
/// use fare_adjust::core::{StateTransition, TerminalState};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: TerminalState::Idle,
///     to: TerminalState::Settling,
///     timestamp: Utc::now(),
///     attempt: 0,
/// };
/// assert_eq!(transition.to, TerminalState::Settling);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Number of payment attempts that led to this transition
    pub attempt: usize,
}

/// Ordered, append-only history of state transitions.
///
/// # Example
///
/// ```rust
/// use fare_adjust::core::{StateHistory, StateTransition, TerminalState};
/// use chrono::Utc;
///
/// let mut history = StateHistory::new();
/// history.push(StateTransition {
///     from: TerminalState::Idle,
///     to: TerminalState::Settling,
///     timestamp: Utc::now(),
///     attempt: 0,
/// });
///
/// assert_eq!(history.len(), 1);
/// assert_eq!(history.entries_into(&TerminalState::Settling), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a transition in place.
    pub fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// Count transitions that ended in `state`.
    pub fn entries_into(&self, state: &S) -> usize {
        self.transitions.iter().filter(|t| &t.to == state).count()
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    /// Get all transitions in order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TerminalState;

    fn transition(
        from: TerminalState,
        to: TerminalState,
        attempt: usize,
    ) -> StateTransition<TerminalState> {
        StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            attempt,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<TerminalState> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.last().is_none());
        assert_eq!(history.entries_into(&TerminalState::Idle), 0);
    }

    #[test]
    fn push_appends_in_order() {
        let mut history = StateHistory::new();
        history.push(transition(TerminalState::Idle, TerminalState::Settling, 0));
        history.push(transition(TerminalState::Settling, TerminalState::Idle, 1));

        assert_eq!(history.len(), 2);
        assert_eq!(history.transitions()[0].to, TerminalState::Settling);
        assert_eq!(history.transitions()[1].attempt, 1);
    }

    #[test]
    fn entries_into_counts_by_target() {
        let mut history = StateHistory::new();
        history.push(transition(TerminalState::Idle, TerminalState::Settling, 0));
        history.push(transition(TerminalState::Settling, TerminalState::Idle, 2));
        history.push(transition(TerminalState::Idle, TerminalState::Settling, 0));

        assert_eq!(history.entries_into(&TerminalState::Settling), 2);
        assert_eq!(history.entries_into(&TerminalState::Idle), 1);
    }

    #[test]
    fn last_returns_most_recent() {
        let mut history = StateHistory::new();
        history.push(transition(TerminalState::Idle, TerminalState::Settling, 0));
        history.push(transition(TerminalState::Settling, TerminalState::Idle, 3));

        let last = history.last().unwrap();
        assert_eq!(last.to, TerminalState::Idle);
        assert_eq!(last.attempt, 3);
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = StateHistory::new();
        history.push(transition(TerminalState::Idle, TerminalState::Settling, 0));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<TerminalState> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.transitions()[0].to, TerminalState::Settling);
    }
}
