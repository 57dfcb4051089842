//! Phase change history.
//!
//! Every time the derived phase of a form changes, the machine records a
//! `StateTransition`. The history is immutable: `record` returns a new value.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One observed change from `from` to `to`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// When the change was observed
    pub timestamp: DateTime<Utc>,
    /// Submission attempt the change belongs to (0 before the first submit)
    pub attempt: usize,
}

impl<S: State> StateTransition<S> {
    /// Transition stamped with the current time.
    pub fn now(from: S, to: S, attempt: usize) -> Self {
        Self {
            from,
            to,
            timestamp: Utc::now(),
            attempt,
        }
    }
}

/// Ordered history of state transitions.
///
/// # Example
///
/// ```rust
/// use formflow::core::{StateHistory, StateTransition};
/// use formflow::form::FormPhase;
///
/// let history = StateHistory::new()
///     .record(StateTransition::now(FormPhase::Clean, FormPhase::DirtyInvalid, 0))
///     .record(StateTransition::now(FormPhase::DirtyInvalid, FormPhase::DirtyValid, 0));
///
/// assert_eq!(
///     history.get_path(),
///     vec![&FormPhase::Clean, &FormPhase::DirtyInvalid, &FormPhase::DirtyValid]
/// );
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
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// States traversed: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Transitions that happened during a given submission attempt.
    pub fn for_attempt(&self, attempt: usize) -> impl Iterator<Item = &StateTransition<S>> {
        self.transitions
            .iter()
            .filter(move |t| t.attempt == attempt)
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
