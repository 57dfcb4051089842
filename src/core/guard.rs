//! Guard predicates over states.
//!
//! The form machine keeps its submit rule in a guard so that the same pure
//! predicate backs both `can_submit` and `begin_submit`.

use super::state::State;
use std::marker::PhantomData;

/// Pure predicate deciding whether an action is allowed from a state.
///
/// # Example
///
/// ```rust
/// use formflow::core::Guard;
/// use formflow::form::FormPhase;
///
/// let submittable = Guard::new(|p: &FormPhase| matches!(p, FormPhase::DirtyValid));
///
/// assert!(submittable.check(&FormPhase::DirtyValid));
/// assert!(!submittable.check(&FormPhase::Submitting));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure, thread-safe predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Guard that only passes for states equal to `state`.
    pub fn only(state: S) -> Self
    where
        S: 'static,
    {
        Self::new(move |current: &S| *current == state)
    }

    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> std::fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormPhase;

    #[test]
    fn only_matches_a_single_phase() {
        let guard = Guard::only(FormPhase::DirtyValid);

        assert!(guard.check(&FormPhase::DirtyValid));
        assert!(!guard.check(&FormPhase::Clean));
        assert!(!guard.check(&FormPhase::DirtyInvalid));
        assert!(!guard.check(&FormPhase::Submitting));
    }

    #[test]
    fn guard_can_use_state_predicates() {
        let guard = Guard::new(|p: &FormPhase| !p.is_error());

        assert!(guard.check(&FormPhase::Clean));
        assert!(guard.check(&FormPhase::Submitting));
        assert!(!guard.check(&FormPhase::DirtyInvalid));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(|p: &FormPhase| matches!(p, FormPhase::Clean));
        let phase = FormPhase::Clean;

        assert_eq!(guard.check(&phase), guard.check(&phase));
    }
}
