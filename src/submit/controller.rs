//! Drives one submission from guard to resolution.

use crate::error::{BuildError, FormError};
use crate::form::{FormMachine, Resolution, Submission};
use crate::submit::config::{SubmitConfig, DEFAULT_TIMEOUT};
use crate::submit::endpoint::{Endpoint, HttpEndpoint};
use crate::submit::error::SubmitError;
use crate::submit::notifier::{Notifier, TracingNotifier};
use serde_json::Value;
use std::time::Duration;
use tracing::{info, warn};

/// How a started submission ended.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// The endpoint accepted the form; the form has been reset.
    Succeeded(Value),
    /// The call failed; the form keeps its values and is unlocked.
    Failed(SubmitError),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }
}

/// Sends submissions to an [`Endpoint`] and resolves them on the form.
///
/// There is no automatic retry: each call to [`submit`](Self::submit) makes
/// at most one request. The request is bounded by the configured timeout,
/// which needs a Tokio runtime with the time driver enabled.
#[derive(Debug)]
pub struct SubmissionController<E, N = TracingNotifier> {
    endpoint: E,
    notifier: N,
    timeout: Option<Duration>,
}

impl SubmissionController<HttpEndpoint, TracingNotifier> {
    /// HTTP controller for the given settings, logging its notices.
    pub fn from_config(config: &SubmitConfig) -> Result<Self, BuildError> {
        Ok(Self::new(HttpEndpoint::from_config(config)?, TracingNotifier)
            .with_timeout(config.timeout()))
    }
}

impl<E: Endpoint, N: Notifier> SubmissionController<E, N> {
    pub fn new(endpoint: E, notifier: N) -> Self {
        Self {
            endpoint,
            notifier,
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }

    /// `None` waits for the endpoint indefinitely.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Perform the network call for a started submission.
    ///
    /// Does not touch the form, so a renderer can keep showing the
    /// `Submitting` phase while this is awaited.
    pub async fn send(&self, submission: &Submission) -> Result<Value, SubmitError> {
        let call = self.endpoint.post(submission.payload());
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| SubmitError::Timeout(limit))?,
            None => call.await,
        }
    }

    /// Resolve a finished call on the form and raise the matching notice.
    pub fn resolve(
        &self,
        form: &mut FormMachine,
        submission: &Submission,
        result: Result<Value, SubmitError>,
    ) -> Result<SubmitOutcome, FormError> {
        match result {
            Ok(body) => {
                form.finish_submit(submission, Resolution::Succeeded)?;
                self.notifier.acknowledge(&body);
                Ok(SubmitOutcome::Succeeded(body))
            }
            Err(error) => {
                form.finish_submit(submission, Resolution::Failed)?;
                self.notifier.failure(&error);
                Ok(SubmitOutcome::Failed(error))
            }
        }
    }

    /// Guard, send and resolve in one step.
    ///
    /// Returns `Err` only when the form refuses to start a submission, in
    /// which case nothing was sent and the form is unchanged.
    ///
    /// If the returned future is dropped while the request is pending, the
    /// submission resolves as failed so the form is unlocked again.
    pub async fn submit(&self, form: &mut FormMachine) -> Result<SubmitOutcome, FormError> {
        let submission = form.begin_submit()?;
        let mut pending = Pending {
            form,
            submission,
            settled: false,
        };
        let result = self.send(&pending.submission).await;
        pending.settled = true;
        info!(
            form = %pending.submission.form(),
            submission = %pending.submission.id(),
            ok = result.is_ok(),
            "endpoint answered"
        );
        self.resolve(&mut *pending.form, &pending.submission, result)
    }
}

/// A started submission that fails itself if abandoned before the endpoint
/// answers.
struct Pending<'a> {
    form: &'a mut FormMachine,
    submission: Submission,
    settled: bool,
}

impl Drop for Pending<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        warn!(
            form = %self.submission.form(),
            submission = %self.submission.id(),
            "submission abandoned before the endpoint answered"
        );
        // Only the in-flight ticket can be pending here, so this cannot be stale.
        let _ = self.form.finish_submit(&self.submission, Resolution::Failed);
    }
}
