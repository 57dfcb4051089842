//! Declarative field validation.
//!
//! A [`ValidationSchema`] maps each field to an ordered list of [`Rule`]s.
//! Validation is a pure function of the form values and is cheap enough to
//! run on every keystroke.
//!
//! Failures are accumulated with Stillwater's `Validation`, so one pass
//! reports every invalid field instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use formflow::form::{Field, FormValues};
//! use formflow::schema::ValidationSchema;
//!
//! let schema = ValidationSchema::signup();
//! let values = FormValues {
//!     name: "Al".to_string(),
//!     email: "x@y.com".to_string(),
//!     age: "20".to_string(),
//! };
//!
//! let errors = schema.validate(&values);
//! assert_eq!(errors.get(Field::Name), Some("Name must be at least 3 characters"));
//! assert_eq!(errors.len(), 1);
//! ```

pub mod builder;
pub mod error;
pub mod rules;
pub mod validation;

pub use builder::SchemaBuilder;
pub use error::{FieldError, RuleKind};
pub use rules::{parse_number, Rule};
pub use validation::{FieldErrors, ValidationSchema};
