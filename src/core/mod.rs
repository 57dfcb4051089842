//! Pure state machine building blocks.
//!
//! - `State` trait for phase enums
//! - `Guard` predicates for allowed actions
//! - Immutable `StateHistory` of observed transitions
//!
//! Nothing in this module performs I/O.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
