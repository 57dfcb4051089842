//! Individual field rules.
//!
//! Every rule except [`Rule::Required`] passes on an empty value, so an empty
//! field can only ever fail for being required.

use crate::schema::error::RuleKind;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

/// A declarative check on one raw field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Value must be non-empty.
    Required { message: String },
    /// Value must have at least `min` characters.
    MinLength { min: usize, message: String },
    /// Value must look like an email address.
    Email { message: String },
    /// Value must parse as a finite number, ignoring whitespace.
    Number { message: String },
    /// Numeric value must have no fractional part.
    Integer { message: String },
    /// Numeric value must be at least `min`.
    Min { min: i64, message: String },
}

impl Rule {
    pub fn required(message: impl Into<String>) -> Self {
        Self::Required {
            message: message.into(),
        }
    }

    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Self::MinLength {
            min,
            message: message.into(),
        }
    }

    pub fn email(message: impl Into<String>) -> Self {
        Self::Email {
            message: message.into(),
        }
    }

    pub fn number(message: impl Into<String>) -> Self {
        Self::Number {
            message: message.into(),
        }
    }

    pub fn integer(message: impl Into<String>) -> Self {
        Self::Integer {
            message: message.into(),
        }
    }

    pub fn min(min: i64, message: impl Into<String>) -> Self {
        Self::Min {
            min,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> RuleKind {
        match self {
            Self::Required { .. } => RuleKind::Required,
            Self::MinLength { .. } => RuleKind::MinLength,
            Self::Email { .. } => RuleKind::Email,
            Self::Number { .. } => RuleKind::Number,
            Self::Integer { .. } => RuleKind::Integer,
            Self::Min { .. } => RuleKind::Min,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Required { message }
            | Self::MinLength { message, .. }
            | Self::Email { message }
            | Self::Number { message }
            | Self::Integer { message }
            | Self::Min { message, .. } => message,
        }
    }

    /// Returns `true` when `value` satisfies the rule.
    pub fn check(&self, value: &str) -> bool {
        if value.is_empty() {
            return !matches!(self, Self::Required { .. });
        }

        match self {
            Self::Required { .. } => true,
            Self::MinLength { min, .. } => value.chars().count() >= *min,
            Self::Email { .. } => EMAIL.is_match(value),
            // Non-numeric input is reported by `Number`; the numeric rules
            // leave it alone so only one rule claims it.
            Self::Number { .. } => parse_number(value).is_some(),
            Self::Integer { .. } => {
                parse_number(value).is_none_or(|n| n.is_finite() && n.fract() == 0.0)
            }
            Self::Min { min, .. } => parse_number(value).is_none_or(|n| n >= *min as f64),
        }
    }
}

/// Parse a numeric input with JavaScript `Number` coercion.
///
/// All whitespace is removed first and blank input is not a number. Besides
/// decimal and exponent forms this accepts `0x`, `0o` and `0b` literals and a
/// signed `Infinity`, so the result may be infinite but is never NaN.
pub fn parse_number(value: &str) -> Option<f64> {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();

    let radix = match compact.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &compact[2..];
        if digits.is_empty() {
            return None;
        }
        return digits.chars().try_fold(0.0, |acc: f64, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        });
    }

    let unsigned = compact.strip_prefix(&['+', '-'][..]).unwrap_or(&compact);
    if unsigned == "Infinity" {
        return Some(if compact.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    let decimal = unsigned
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if unsigned.is_empty() || !decimal {
        return None;
    }
    compact.parse::<f64>().ok()
}
