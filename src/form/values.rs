//! Field identifiers and raw form values.

use crate::schema::parse_number;
use serde::{Deserialize, Serialize};
use serde_json::{json, Number, Value};
use std::fmt::{Display, Formatter};

/// Largest integer a JSON number can carry without losing precision.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// The fields of the signup form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Age,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Age];

    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Age => "age",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw values exactly as typed. The default is the empty initial record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub age: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Age => &self.age,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Age => self.age = value,
        }
    }

    /// JSON body sent to the endpoint.
    ///
    /// The age goes out as a number whenever it parses as one, otherwise as
    /// the raw string.
    pub fn to_payload(&self) -> Value {
        json!({
            "name": self.name,
            "email": self.email,
            "age": age_json(&self.age),
        })
    }
}

fn age_json(raw: &str) -> Value {
    match parse_number(raw) {
        Some(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => Value::from(n as i64),
        Some(n) => Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(raw.to_string())),
        None => Value::String(raw.to_string()),
    }
}
