//! Submitting a validated form to an HTTP endpoint.
//!
//! The pure form machine decides *whether* a submission may start and how it
//! resolves; this module performs the one network call in between.
//!
//! - [`Endpoint`]: the collaborator receiving the JSON payload
//! - [`SubmissionController`]: guard, send (with timeout), resolve, notify
//! - [`Notifier`]: surfaces the result to the user
//! - [`SubmitConfig`]: endpoint URL and timeout

pub mod config;
pub mod controller;
pub mod endpoint;
pub mod error;
pub mod notifier;

pub use config::{SubmitConfig, SubmitConfigBuilder, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use controller::{SubmissionController, SubmitOutcome};
pub use endpoint::{Endpoint, HttpEndpoint};
pub use error::SubmitError;
pub use notifier::{Notifier, TracingNotifier, FAILURE_NOTICE, SUCCESS_NOTICE};
