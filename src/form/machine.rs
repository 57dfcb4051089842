//! The form state machine.
//!
//! `FormMachine` owns the values, errors, touched set and in-flight flag of
//! one form instance. Every mutation re-derives the [`FormPhase`] and records
//! a transition in the history when it changes.

use crate::core::{Guard, State, StateHistory, StateTransition};
use crate::error::FormError;
use crate::form::phase::FormPhase;
use crate::form::values::{Field, FormValues};
use crate::schema::{FieldErrors, ValidationSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Identity of one form instance, used in log fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormId(Uuid);

impl FormId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FormId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for FormId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of one submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for SubmissionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ticket for the submission currently in flight.
///
/// Returned by [`FormMachine::begin_submit`] and handed back to
/// [`FormMachine::finish_submit`] once the endpoint has answered.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    id: SubmissionId,
    form: FormId,
    attempt: usize,
    payload: Value,
}

impl Submission {
    pub fn id(&self) -> SubmissionId {
        self.id
    }

    pub fn form(&self) -> FormId {
        self.form
    }

    /// 1-based submit attempt number within the form's lifetime.
    pub fn attempt(&self) -> usize {
        self.attempt
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }
}

/// How a submission ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Succeeded,
    Failed,
}

/// Read model for renderers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub id: FormId,
    pub values: FormValues,
    pub errors: FieldErrors,
    /// Errors of fields the user has already left; the ones to display.
    pub visible_errors: FieldErrors,
    pub touched: Vec<Field>,
    pub dirty: bool,
    pub submitting: bool,
    pub phase: FormPhase,
    pub can_submit: bool,
    pub attempts: usize,
}

/// Validation and submission state of one form.
#[derive(Debug)]
pub struct FormMachine {
    id: FormId,
    schema: ValidationSchema,
    initial: FormValues,
    values: FormValues,
    errors: FieldErrors,
    touched: BTreeSet<Field>,
    in_flight: Option<SubmissionId>,
    attempts: usize,
    phase: FormPhase,
    submit_guard: Guard<FormPhase>,
    history: StateHistory<FormPhase>,
}

impl Default for FormMachine {
    fn default() -> Self {
        Self::new(ValidationSchema::signup())
    }
}

impl FormMachine {
    /// Mount a form with empty values and no errors.
    pub fn new(schema: ValidationSchema) -> Self {
        Self {
            id: FormId::new(),
            schema,
            initial: FormValues::default(),
            values: FormValues::default(),
            errors: FieldErrors::new(),
            touched: BTreeSet::new(),
            in_flight: None,
            attempts: 0,
            phase: FormPhase::Clean,
            submit_guard: Guard::only(FormPhase::DirtyValid),
            history: StateHistory::new(),
        }
    }

    pub fn id(&self) -> FormId {
        self.id
    }

    pub fn schema(&self) -> &ValidationSchema {
        &self.schema
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn touched(&self) -> &BTreeSet<Field> {
        &self.touched
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Values differ from the initial record.
    pub fn is_dirty(&self) -> bool {
        self.values != self.initial
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Number of submissions started so far.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn history(&self) -> &StateHistory<FormPhase> {
        &self.history
    }

    pub fn phase(&self) -> FormPhase {
        FormPhase::derive(self.is_dirty(), self.is_submitting(), !self.errors.is_empty())
    }

    /// `dirty && !submitting && errors.is_empty()`.
    pub fn can_submit(&self) -> bool {
        self.submit_guard.check(&self.phase())
    }

    /// Error to display for a field: only once the field has been touched.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.is_touched(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let mut visible_errors = FieldErrors::new();
        for (field, message) in self.errors.iter() {
            if self.is_touched(field) {
                visible_errors.insert(field, message);
            }
        }

        FormSnapshot {
            id: self.id,
            values: self.values.clone(),
            errors: self.errors.clone(),
            visible_errors,
            touched: self.touched.iter().copied().collect(),
            dirty: self.is_dirty(),
            submitting: self.is_submitting(),
            phase: self.phase(),
            can_submit: self.can_submit(),
            attempts: self.attempts,
        }
    }

    /// Store a new value for `field` and re-run the schema.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> FormPhase {
        self.values.set(field, value);
        self.errors = self.schema.validate(&self.values);
        debug!(form = %self.id, %field, errors = self.errors.len(), "field changed");
        self.observe_phase()
    }

    /// Mark `field` as touched and re-run the schema.
    pub fn blur(&mut self, field: Field) -> FormPhase {
        if self.touched.insert(field) {
            debug!(form = %self.id, %field, "field touched");
        }
        self.errors = self.schema.validate(&self.values);
        self.observe_phase()
    }

    /// Re-run the schema against the current values.
    pub fn validate(&mut self) -> &FieldErrors {
        self.errors = self.schema.validate(&self.values);
        self.observe_phase();
        &self.errors
    }

    /// Return to the initial empty record, clearing errors and touched.
    pub fn reset(&mut self) -> Result<FormPhase, FormError> {
        if self.is_submitting() {
            return Err(FormError::AlreadySubmitting);
        }
        self.clear();
        debug!(form = %self.id, "form reset");
        Ok(self.observe_phase())
    }

    /// Start a submission.
    ///
    /// Only allowed from [`FormPhase::DirtyValid`]; any other phase is
    /// rejected without touching the form.
    pub fn begin_submit(&mut self) -> Result<Submission, FormError> {
        if self.is_submitting() {
            return Err(FormError::AlreadySubmitting);
        }

        let errors = self.schema.validate(&self.values);
        let phase = FormPhase::derive(self.is_dirty(), false, !errors.is_empty());
        if !self.submit_guard.check(&phase) {
            debug!(form = %self.id, phase = phase.name(), "submit ignored");
            return Err(FormError::NotSubmittable { phase });
        }

        self.errors = errors;
        self.attempts += 1;
        let submission = Submission {
            id: SubmissionId::new(),
            form: self.id,
            attempt: self.attempts,
            payload: self.values.to_payload(),
        };
        self.in_flight = Some(submission.id);
        info!(
            form = %self.id,
            submission = %submission.id,
            attempt = submission.attempt,
            "submission started"
        );
        self.observe_phase();
        Ok(submission)
    }

    /// Resolve the in-flight submission.
    ///
    /// Success resets the form; failure only clears the in-flight flag so the
    /// user can retry with the same values.
    pub fn finish_submit(
        &mut self,
        submission: &Submission,
        resolution: Resolution,
    ) -> Result<FormPhase, FormError> {
        if self.in_flight != Some(submission.id) {
            warn!(form = %self.id, submission = %submission.id, "stale submission");
            return Err(FormError::StaleSubmission { id: submission.id });
        }

        self.in_flight = None;
        match resolution {
            Resolution::Succeeded => {
                self.clear();
                info!(form = %self.id, submission = %submission.id, "submission succeeded");
            }
            Resolution::Failed => {
                warn!(form = %self.id, submission = %submission.id, "submission failed");
            }
        }
        Ok(self.observe_phase())
    }

    fn clear(&mut self) {
        self.values = self.initial.clone();
        self.errors = FieldErrors::new();
        self.touched.clear();
    }

    fn observe_phase(&mut self) -> FormPhase {
        let next = self.phase();
        if next != self.phase {
            self.history = self
                .history
                .record(StateTransition::now(self.phase, next, self.attempts));
            debug!(form = %self.id, from = self.phase.name(), to = next.name(), "phase changed");
            self.phase = next;
        }
        next
    }
}
