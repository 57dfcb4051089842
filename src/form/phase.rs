//! Derived lifecycle phase of a form.

use crate::state_enum;

state_enum! {
    /// Where a form sits in its edit/submit lifecycle.
    ///
    /// The phase is never stored; it is derived from the form flags so it
    /// cannot drift from them.
    pub enum FormPhase {
        /// Values equal the initial record.
        Clean,
        /// Edited, with at least one validation error.
        DirtyInvalid,
        /// Edited and valid; the only phase a submit may start from.
        DirtyValid,
        /// A submission is in flight.
        Submitting,
    }
    error: [DirtyInvalid]
}

impl FormPhase {
    /// Derive the phase from the form flags.
    pub fn derive(dirty: bool, submitting: bool, has_errors: bool) -> Self {
        match (submitting, dirty, has_errors) {
            (true, _, _) => Self::Submitting,
            (false, false, _) => Self::Clean,
            (false, true, true) => Self::DirtyInvalid,
            (false, true, false) => Self::DirtyValid,
        }
    }
}
