//! Field-level validation primitives shared by the submission schemas.
//!
//! Validation never fails fast: every rule is checked and every violated rule
//! is reported, so callers can show the complete list to the visitor in one
//! round trip.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::error::Error;

/// Stable machine-readable code for a single violated rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    /// A required field is absent.
    Required,
    /// A text field is shorter than its minimum length.
    TooShort,
    /// The value does not match the email address grammar.
    InvalidEmail,
    /// The value is not one of the accepted choices.
    InvalidChoice,
}

/// One violated field-level rule, named after the wire-facing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldViolation {
    /// Field the rule applies to, in the request's camelCase spelling.
    pub field: String,
    /// Human-readable message suitable for re-prompting the visitor.
    pub message: String,
    /// Stable machine-readable violation code.
    pub code: ViolationCode,
}

impl FieldViolation {
    /// Create a violation for `field`.
    pub fn new(field: impl Into<String>, message: impl Into<String>, code: ViolationCode) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code,
        }
    }
}

/// Failed validation outcome carrying every violated rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// The violated rules, in field declaration order.
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self
            .violations
            .iter()
            .map(|violation| violation.field.as_str())
            .collect();
        write!(f, "validation failed for {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::invalid_request("submission failed validation")
            .with_details(json!({ "violations": err.violations }))
    }
}

/// Accumulates violations while extracting the values that did validate.
///
/// Each check returns `Some` exactly when it recorded no violation, so a
/// schema can gather all of its fields and decide success by matching on the
/// collected options.
pub(crate) struct Checker {
    violations: Vec<FieldViolation>,
}

impl Checker {
    pub(crate) fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    pub(crate) fn violation(&mut self, field: &'static str, message: &str, code: ViolationCode) {
        self.violations
            .push(FieldViolation::new(field, message, code));
    }

    /// Field must be present; its content is otherwise unconstrained.
    pub(crate) fn required(
        &mut self,
        field: &'static str,
        value: Option<String>,
    ) -> Option<String> {
        match value {
            Some(value) => Some(value),
            None => {
                self.violation(field, &format!("{field} is required"), ViolationCode::Required);
                None
            }
        }
    }

    /// Field must be present and at least `min` characters long.
    pub(crate) fn min_chars(
        &mut self,
        field: &'static str,
        value: Option<String>,
        min: usize,
        message: &'static str,
    ) -> Option<String> {
        let value = self.required(field, value)?;
        if value.chars().count() < min {
            self.violation(field, message, ViolationCode::TooShort);
            return None;
        }
        Some(value)
    }

    /// Field must be present and match the email address grammar.
    pub(crate) fn email(&mut self, field: &'static str, value: Option<String>) -> Option<String> {
        let value = self.required(field, value)?;
        if !is_valid_email(&value) {
            self.violation(field, "Invalid email address", ViolationCode::InvalidEmail);
            return None;
        }
        Some(value)
    }

    /// Field must be present and parse into one of the accepted choices.
    pub(crate) fn choice<T: FromStr>(
        &mut self,
        field: &'static str,
        value: Option<String>,
        message: &'static str,
    ) -> Option<T> {
        let raw = self.required(field, value)?;
        match raw.parse() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                self.violation(field, message, ViolationCode::InvalidChoice);
                None
            }
        }
    }

    /// Optional choice field falling back to its default when absent.
    pub(crate) fn optional_choice<T: FromStr + Default>(
        &mut self,
        field: &'static str,
        value: Option<String>,
        message: &'static str,
    ) -> Option<T> {
        match value {
            None => Some(T::default()),
            Some(raw) => match raw.parse() {
                Ok(parsed) => Some(parsed),
                Err(_) => {
                    self.violation(field, message, ViolationCode::InvalidChoice);
                    None
                }
            },
        }
    }

    pub(crate) fn into_error(self) -> ValidationError {
        ValidationError {
            violations: self.violations,
        }
    }
}

/// Check a value against the email address grammar.
///
/// Accepts `local@domain` where the local part is non-empty and free of
/// whitespace, and the domain consists of at least two dot-separated labels
/// of letters, digits, and hyphens, ending in an alphabetic label of two or
/// more characters.
pub(crate) fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let all_labels_valid = labels.iter().all(|label| {
        !label.is_empty()
            && label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
            && !label.starts_with('-')
            && !label.ends_with('-')
    });
    let tld_valid = labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()));
    all_labels_valid && tld_valid
}
