//! User-facing notices raised when a submission resolves.

use crate::submit::error::SubmitError;
use serde_json::Value;
use tracing::{info, warn};

/// Text shown when the endpoint accepted the form.
pub const SUCCESS_NOTICE: &str = "Form sent successfully";

/// Generic text shown for any failure; details are not exposed to the user.
pub const FAILURE_NOTICE: &str = "The form could not be sent. Please try again.";

/// Surfaces submission results to the user, typically as a modal.
pub trait Notifier {
    /// Called after a successful submission with the endpoint's body.
    fn acknowledge(&self, body: &Value);

    /// Called after a failed submission.
    fn failure(&self, error: &SubmitError);
}

/// Writes notices to the `tracing` subscriber.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn acknowledge(&self, body: &Value) {
        info!(%body, "{}", SUCCESS_NOTICE);
    }

    fn failure(&self, error: &SubmitError) {
        warn!(%error, "{}", FAILURE_NOTICE);
    }
}
