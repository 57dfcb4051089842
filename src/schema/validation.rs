//! The schema that turns raw form values into per-field errors.

use crate::form::{Field, FormValues};
use crate::schema::error::FieldError;
use crate::schema::rules::Rule;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Per-field error messages. A field with no entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub(crate) fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }
}

impl FromIterator<FieldError> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.insert(error.field, error.message);
        }
        errors
    }
}

/// Declarative per-field rules.
///
/// Fields are checked independently. Within a field the rules run in the
/// declared order and the first failure wins. Failures from different fields
/// are all collected in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationSchema {
    pub(crate) fields: Vec<(Field, Vec<Rule>)>,
}

impl ValidationSchema {
    /// The signup form rules: name, email and an adult age.
    pub fn signup() -> Self {
        Self {
            fields: vec![
                (
                    Field::Name,
                    vec![
                        Rule::required("Name is required"),
                        Rule::min_length(3, "Name must be at least 3 characters"),
                    ],
                ),
                (
                    Field::Email,
                    vec![
                        Rule::required("Email is required"),
                        Rule::email("Invalid email format"),
                    ],
                ),
                (
                    Field::Age,
                    vec![
                        Rule::number("Age must be a number"),
                        Rule::integer("Age must be a whole number"),
                        Rule::min(18, "You must be at least 18 years old"),
                        Rule::required("Age is required"),
                    ],
                ),
            ],
        }
    }

    pub fn rules(&self, field: Field) -> &[Rule] {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, rules)| rules.as_slice())
            .unwrap_or(&[])
    }

    /// First failing rule for one field, if any.
    pub fn check_field(&self, field: Field, value: &str) -> Option<FieldError> {
        self.rules(field)
            .iter()
            .find(|rule| !rule.check(value))
            .map(|rule| FieldError::new(field, rule.kind(), rule.message()))
    }

    /// Check every field, accumulating all failures.
    pub fn check(&self, values: &FormValues) -> Validation<(), NonEmptyVec<FieldError>> {
        let checks: Vec<Validation<(), NonEmptyVec<FieldError>>> = self
            .fields
            .iter()
            .map(|(field, _)| match self.check_field(*field, values.get(*field)) {
                Some(error) => Validation::fail(error),
                None => Validation::success(()),
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }

    /// Check every field and flatten the result into a message map.
    pub fn validate(&self, values: &FormValues) -> FieldErrors {
        match self.check(values) {
            Validation::Success(()) => FieldErrors::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }
}

impl Default for ValidationSchema {
    fn default() -> Self {
        Self::signup()
    }
}
