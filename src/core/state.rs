//! The `State` trait implemented by form phases.
//!
//! A state is an immutable value describing where the form currently sits in
//! its lifecycle. All methods are pure.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the phase history
/// - `PartialEq`: transitions are detected by comparing states
/// - `Debug`: states show up in log fields and assertion output
/// - `Serialize` + `Deserialize`: states are part of the form snapshot
///
/// # Example
///
/// ```rust
/// use formflow::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum UploadPhase {
///     Idle,
///     Uploading,
///     Rejected,
/// }
///
/// impl State for UploadPhase {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Uploading => "Uploading",
///             Self::Rejected => "Rejected",
///         }
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Rejected)
///     }
/// }
///
/// assert_eq!(UploadPhase::Uploading.name(), "Uploading");
/// assert!(UploadPhase::Rejected.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used in logs and snapshots.
    fn name(&self) -> &str;

    /// Whether the state marks the end of a lifecycle.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Whether the state represents a problem the user has to fix.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum EntryState {
        Empty,
        Editing,
        Rejected,
        Sent,
    }

    impl State for EntryState {
        fn name(&self) -> &str {
            match self {
                Self::Empty => "Empty",
                Self::Editing => "Editing",
                Self::Rejected => "Rejected",
                Self::Sent => "Sent",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Sent)
        }

        fn is_error(&self) -> bool {
            matches!(self, Self::Rejected)
        }
    }

    #[test]
    fn defaults_are_not_final_and_not_error() {
        #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
        struct Bare;

        impl State for Bare {
            fn name(&self) -> &str {
                "Bare"
            }
        }

        assert!(!Bare.is_final());
        assert!(!Bare.is_error());
    }

    #[test]
    fn overridden_predicates_are_respected() {
        assert!(!EntryState::Empty.is_final());
        assert!(!EntryState::Editing.is_error());
        assert!(EntryState::Rejected.is_error());
        assert!(EntryState::Sent.is_final());
        assert!(!EntryState::Sent.is_error());
    }

    #[test]
    fn state_survives_json() {
        let json = serde_json::to_string(&EntryState::Editing).unwrap();
        let back: EntryState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EntryState::Editing);
    }
}
