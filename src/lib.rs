//! Formflow: a validated form with a guarded asynchronous submit.
//!
//! Formflow follows the "pure core, imperative shell" split. Validation and
//! the form state machine are pure and synchronous; the only side effects
//! (one HTTP call, user notices, a leave-page hook) live at the edges behind
//! traits.
//!
//! # Core Concepts
//!
//! - **Schema**: declarative per-field rules producing error messages
//! - **Form machine**: values, touched set, dirty and in-flight flags, and
//!   the derived [`FormPhase`](form::FormPhase)
//! - **Submission**: one guarded request, bounded by a timeout, that either
//!   resets the form or unlocks it for a retry
//! - **Unload guard**: asks before leaving while the form is dirty
//!
//! # Example
//!
//! ```rust
//! use formflow::form::{Field, FormMachine, FormPhase};
//!
//! let mut form = FormMachine::default();
//! form.set_field(Field::Name, "Al");
//! form.set_field(Field::Email, "x@y.com");
//! form.set_field(Field::Age, "20");
//! assert_eq!(form.phase(), FormPhase::DirtyInvalid);
//! assert!(!form.can_submit());
//!
//! form.set_field(Field::Name, "Ale");
//! assert!(form.can_submit());
//!
//! let submission = form.begin_submit().unwrap();
//! assert_eq!(submission.payload()["age"], 20);
//! ```

pub mod core;
pub mod error;
pub mod form;
mod macros;
pub mod schema;
pub mod session;
pub mod submit;
pub mod unload;

// Re-export commonly used types
pub use crate::core::{Guard, State, StateHistory, StateTransition};
pub use error::{BuildError, FormError};
pub use form::{Field, FormMachine, FormPhase, FormSnapshot, FormValues};
pub use schema::{FieldErrors, ValidationSchema};
pub use session::FormSession;
pub use submit::{SubmissionController, SubmitConfig, SubmitError, SubmitOutcome};
pub use unload::{LeaveDecision, NavigationHook, UnloadGuard};
