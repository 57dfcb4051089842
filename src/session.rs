//! One mounted form: machine, submission controller and unload guard.
//!
//! Every operation keeps the unload guard in step with the form's dirty
//! flag, so a host only has to forward events and render snapshots.

use crate::error::FormError;
use crate::form::{Field, FormMachine, FormPhase, FormSnapshot};
use crate::schema::ValidationSchema;
use crate::submit::{Endpoint, Notifier, SubmissionController, SubmitOutcome};
use crate::unload::{LeaveDecision, NavigationHook, UnloadGuard};

/// A form instance as mounted by a host.
///
/// Dropping the session releases the navigation hook.
pub struct FormSession<E, N, H>
where
    E: Endpoint,
    N: Notifier,
    H: NavigationHook,
{
    form: FormMachine,
    controller: SubmissionController<E, N>,
    guard: UnloadGuard<H>,
}

impl<E, N, H> FormSession<E, N, H>
where
    E: Endpoint,
    N: Notifier,
    H: NavigationHook,
{
    pub fn mount(
        schema: ValidationSchema,
        controller: SubmissionController<E, N>,
        hook: H,
    ) -> Self {
        Self {
            form: FormMachine::new(schema),
            controller,
            guard: UnloadGuard::new(hook),
        }
    }

    pub fn form(&self) -> &FormMachine {
        &self.form
    }

    pub fn controller(&self) -> &SubmissionController<E, N> {
        &self.controller
    }

    pub fn snapshot(&self) -> FormSnapshot {
        self.form.snapshot()
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) -> FormPhase {
        let phase = self.form.set_field(field, value);
        self.sync_guard();
        phase
    }

    pub fn blur(&mut self, field: Field) -> FormPhase {
        self.form.blur(field)
    }

    pub fn reset(&mut self) -> Result<FormPhase, FormError> {
        let phase = self.form.reset()?;
        self.sync_guard();
        Ok(phase)
    }

    pub async fn submit(&mut self) -> Result<SubmitOutcome, FormError> {
        let outcome = self.controller.submit(&mut self.form).await;
        self.sync_guard();
        outcome
    }

    pub fn on_before_unload(&self) -> LeaveDecision {
        self.guard.on_before_unload()
    }

    fn sync_guard(&mut self) {
        self.guard.sync(self.form.is_dirty());
    }
}
