//! Property-based tests for validation and the form machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use formflow::error::FormError;
use formflow::form::{Field, FormMachine, FormPhase, FormValues, Resolution, Submission};
use formflow::schema::ValidationSchema;
use proptest::prelude::*;

fn values(name: &str, email: &str, age: &str) -> FormValues {
    FormValues {
        name: name.to_string(),
        email: email.to_string(),
        age: age.to_string(),
    }
}

fn arbitrary_field() -> impl Strategy<Value = Field> {
    prop::sample::select(Field::ALL.to_vec())
}

fn arbitrary_input() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "", "Al", "Ale", "Alejandra", "x@y.com", "a@b.co", "bad", "20", "17", "18", "abc",
        "18.5", "   ",
    ])
    .prop_map(str::to_string)
}

#[derive(Clone, Debug)]
enum Action {
    Edit(Field, String),
    Blur(Field),
    Reset,
    Submit,
    Succeed,
    Fail,
}

fn arbitrary_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => (arbitrary_field(), arbitrary_input()).prop_map(|(f, v)| Action::Edit(f, v)),
        1 => arbitrary_field().prop_map(Action::Blur),
        1 => Just(Action::Reset),
        2 => Just(Action::Submit),
        1 => Just(Action::Succeed),
        1 => Just(Action::Fail),
    ]
}

proptest! {
    #[test]
    fn name_error_iff_shorter_than_three(name in "[a-zA-ZñÑ ]{0,8}") {
        let errors = ValidationSchema::signup().validate(&values(&name, "a@b.co", "20"));
        prop_assert_eq!(errors.contains(Field::Name), name.chars().count() < 3);
    }

    #[test]
    fn strings_without_at_sign_are_not_emails(email in "[a-z0-9.]{1,20}") {
        let errors = ValidationSchema::signup().validate(&values("Ale", &email, "20"));
        prop_assert_eq!(errors.get(Field::Email), Some("Invalid email format"));
    }

    #[test]
    fn adult_integer_ages_pass(age in 18i64..150) {
        let errors =
            ValidationSchema::signup().validate(&values("Ale", "a@b.co", &age.to_string()));
        prop_assert!(errors.is_empty());
    }

    #[test]
    fn minor_integer_ages_fail_minimum(age in 0i64..18) {
        let errors =
            ValidationSchema::signup().validate(&values("Ale", "a@b.co", &age.to_string()));
        prop_assert_eq!(errors.get(Field::Age), Some("You must be at least 18 years old"));
    }

    #[test]
    fn validation_is_idempotent(
        name in arbitrary_input(),
        email in arbitrary_input(),
        age in arbitrary_input(),
    ) {
        let schema = ValidationSchema::signup();
        let input = values(&name, &email, &age);
        prop_assert_eq!(schema.validate(&input), schema.validate(&input));
    }

    #[test]
    fn submit_gate_holds_in_every_reachable_state(
        actions in prop::collection::vec(arbitrary_action(), 1..40)
    ) {
        let mut form = FormMachine::default();
        let mut in_flight: Option<Submission> = None;

        for action in actions {
            match action {
                Action::Edit(field, value) => {
                    form.set_field(field, value);
                }
                Action::Blur(field) => {
                    form.blur(field);
                }
                Action::Reset => {
                    let result = form.reset();
                    prop_assert_eq!(result.is_err(), in_flight.is_some());
                }
                Action::Submit => {
                    let could_submit = form.can_submit();
                    match form.begin_submit() {
                        Ok(ticket) => {
                            prop_assert!(could_submit);
                            prop_assert!(in_flight.is_none());
                            in_flight = Some(ticket);
                        }
                        Err(FormError::AlreadySubmitting) => prop_assert!(in_flight.is_some()),
                        Err(_) => prop_assert!(!could_submit),
                    }
                }
                Action::Succeed | Action::Fail => {
                    if let Some(ticket) = in_flight.take() {
                        let resolution = if matches!(action, Action::Succeed) {
                            Resolution::Succeeded
                        } else {
                            Resolution::Failed
                        };
                        form.finish_submit(&ticket, resolution).unwrap();
                        if resolution == Resolution::Succeeded {
                            prop_assert_eq!(form.values(), &FormValues::default());
                            prop_assert!(form.touched().is_empty());
                        }
                    }
                }
            }

            let expected = form.is_dirty() && form.errors().is_empty() && !form.is_submitting();
            prop_assert_eq!(form.can_submit(), expected);
            prop_assert_eq!(form.is_submitting(), in_flight.is_some());
            prop_assert_eq!(form.phase() == FormPhase::Submitting, in_flight.is_some());
        }
    }
}
