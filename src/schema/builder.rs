//! Builder API for validation schemas.

use crate::error::BuildError;
use crate::form::Field;
use crate::schema::rules::Rule;
use crate::schema::validation::ValidationSchema;

/// Fluent builder for a [`ValidationSchema`].
///
/// Declaring the same field twice replaces its earlier rules.
///
/// ```rust
/// use formflow::form::Field;
/// use formflow::schema::{Rule, SchemaBuilder};
///
/// let schema = SchemaBuilder::new()
///     .field(Field::Name, [Rule::required("Tell us your name")])
///     .build()
///     .unwrap();
///
/// assert_eq!(schema.rules(Field::Name).len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<(Field, Vec<Rule>)>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ordered rules for a field.
    pub fn field<I>(mut self, field: Field, rules: I) -> Self
    where
        I: IntoIterator<Item = Rule>,
    {
        let rules: Vec<Rule> = rules.into_iter().collect();
        match self.fields.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = rules,
            None => self.fields.push((field, rules)),
        }
        self
    }

    /// Append one rule after the ones already declared for `field`.
    pub fn rule(mut self, field: Field, rule: Rule) -> Self {
        match self.fields.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1.push(rule),
            None => self.fields.push((field, vec![rule])),
        }
        self
    }

    pub fn build(self) -> Result<ValidationSchema, BuildError> {
        if self.fields.iter().all(|(_, rules)| rules.is_empty()) {
            return Err(BuildError::EmptySchema);
        }
        Ok(ValidationSchema {
            fields: self.fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormValues;

    #[test]
    fn empty_builder_is_rejected() {
        assert!(matches!(
            SchemaBuilder::new().build(),
            Err(BuildError::EmptySchema)
        ));
        assert!(matches!(
            SchemaBuilder::new().field(Field::Age, Vec::new()).build(),
            Err(BuildError::EmptySchema)
        ));
    }

    #[test]
    fn redeclaring_a_field_replaces_rules() {
        let schema = SchemaBuilder::new()
            .field(Field::Name, [Rule::required("a")])
            .field(Field::Name, [Rule::min_length(5, "b")])
            .build()
            .unwrap();

        assert_eq!(schema.rules(Field::Name), &[Rule::min_length(5, "b")]);
    }

    #[test]
    fn rule_appends_in_order() {
        let schema = SchemaBuilder::new()
            .rule(Field::Email, Rule::required("need it"))
            .rule(Field::Email, Rule::email("bad shape"))
            .build()
            .unwrap();

        let errors = schema.validate(&FormValues {
            email: "nope".to_string(),
            ..FormValues::default()
        });
        assert_eq!(errors.get(Field::Email), Some("bad shape"));
        assert!(!errors.contains(Field::Name));
    }
}
