// Validation errors

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Configuration faults.
///
/// These are programmer errors (a rule names a validator nobody registered,
/// a schema document is malformed) and abort a run. Ordinary validation
/// failures are never reported through this type; they end up as lines in
/// an [`ErrorLog`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A rule expression names a validator that is not in the registry
    #[error("No validator registered for rule '{name}' (field '{field}')")]
    UnresolvedValidator { field: String, name: String },

    /// A rule schema document could not be parsed
    #[error("Invalid rule schema: {0}")]
    Schema(String),

    /// A JSON field value that has no string representation
    #[error("Field '{field}' has an unsupported value of type {kind}")]
    InvalidFieldValue { field: String, kind: &'static str },
}

/// Ordered list of composed error messages produced by one validation run.
///
/// Messages appear in field order, then in rule order within each field's
/// expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorLog {
    errors: Vec<String>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when at least one message was recorded
    pub fn fails(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// The first message, or an empty string when there is none.
    pub fn first_error(&self) -> &str {
        self.errors.first().map(String::as_str).unwrap_or("")
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.errors.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.errors
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "errors": self.errors })
    }
}

impl fmt::Display for ErrorLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl From<Vec<String>> for ErrorLog {
    fn from(errors: Vec<String>) -> Self {
        Self { errors }
    }
}

impl Extend<String> for ErrorLog {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl IntoIterator for ErrorLog {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorLog {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_log() {
        let log = ErrorLog::new();
        assert!(!log.fails());
        assert_eq!(log.first_error(), "");
        assert!(log.errors().is_empty());
    }

    #[test]
    fn test_first_error_keeps_insertion_order() {
        let mut log = ErrorLog::new();
        log.push("a is required.");
        log.push("b is not a valid e-mail address.");

        assert!(log.fails());
        assert_eq!(log.len(), 2);
        assert_eq!(log.first_error(), "a is required.");
        assert_eq!(log.to_string(), "a is required.\nb is not a valid e-mail address.\n");
    }

    #[test]
    fn test_to_json() {
        let log = ErrorLog::from(vec!["name is required.".to_string()]);
        assert_eq!(
            log.to_json(),
            serde_json::json!({ "errors": ["name is required."] })
        );
        assert_eq!(
            serde_json::to_string(&log).unwrap(),
            r#"["name is required."]"#
        );
    }

    #[test]
    fn test_unresolved_validator_message() {
        let error = ValidationError::UnresolvedValidator {
            field: "email".to_string(),
            name: "bogus".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No validator registered for rule 'bogus' (field 'email')"
        );
    }
}
