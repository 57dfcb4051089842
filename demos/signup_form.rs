//! Signup Form
//!
//! This example walks one form session through a full edit/submit cycle.
//!
//! Key concepts:
//! - Mounting a session with a schema, a controller and a leave-page hook
//! - Errors appear only for fields the user has left
//! - A failed submit keeps the values; a successful one resets the form
//!
//! Run with: cargo run --example signup_form

use formflow::form::{Field, FormSnapshot};
use formflow::submit::{Endpoint, SubmissionController, SubmitError, TracingNotifier};
use formflow::unload::FlagHook;
use formflow::{FormSession, ValidationSchema};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};

// In-process endpoint: refuses the first call, accepts the rest
struct FlakyEndpoint {
    calls: AtomicUsize,
}

impl Endpoint for FlakyEndpoint {
    async fn post(&self, payload: &Value) -> Result<Value, SubmitError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        println!("  endpoint received {payload}");
        if call == 0 {
            Err(SubmitError::Status { status: 503 })
        } else {
            Ok(json!({ "id": 101 }))
        }
    }
}

fn show(label: &str, snapshot: &FormSnapshot) {
    println!(
        "{label}: phase={} dirty={} can_submit={}",
        snapshot.phase, snapshot.dirty, snapshot.can_submit
    );
    for (field, message) in snapshot.visible_errors.iter() {
        println!("  {field}: {message}");
    }
}

#[tokio::main]
async fn main() {
    println!("=== Signup Form Example ===\n");

    let hook = FlagHook::new();
    let controller = SubmissionController::new(
        FlakyEndpoint {
            calls: AtomicUsize::new(0),
        },
        TracingNotifier,
    );
    let mut session = FormSession::mount(ValidationSchema::signup(), controller, hook.clone());
    show("mounted", &session.snapshot());

    // Typing alone shows nothing until the field is left
    session.edit(Field::Name, "Al");
    show("typed a short name", &session.snapshot());
    session.blur(Field::Name);
    show("left the name field", &session.snapshot());

    session.edit(Field::Name, "Alejandra");
    session.edit(Field::Email, "ale@example.com");
    session.edit(Field::Age, "17");
    session.blur(Field::Age);
    show("too young", &session.snapshot());

    session.edit(Field::Age, "20");
    show("ready", &session.snapshot());
    println!("leave page? {:?}\n", session.on_before_unload());

    println!("Submitting (first attempt)...");
    match session.submit().await {
        Ok(outcome) => println!("  outcome: {outcome:?}"),
        Err(error) => println!("  refused: {error}"),
    }
    show("after failure", &session.snapshot());

    println!("Submitting (retry)...");
    match session.submit().await {
        Ok(outcome) => println!("  outcome: {outcome:?}"),
        Err(error) => println!("  refused: {error}"),
    }
    show("after success", &session.snapshot());
    println!("leave page? {:?}", session.on_before_unload());
    println!("leave hook armed: {}", hook.is_armed());

    println!("\n=== Example Complete ===");
}
