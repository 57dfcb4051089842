//! Form values, phases and the validation/submission state machine.
//!
//! ```text
//! Clean ──edit──▶ DirtyInvalid ◀──edit──▶ DirtyValid ──submit──▶ Submitting
//!   ▲                                         ▲                     │
//!   └──────────────── success ────────────────┼─────────────────────┤
//!                                             └────── failure ──────┘
//! ```

mod machine;
mod phase;
mod values;

pub use machine::{FormId, FormMachine, FormSnapshot, Resolution, Submission, SubmissionId};
pub use phase::FormPhase;
pub use values::{Field, FormValues};
