// Validation traits

use std::fmt;
use std::sync::Arc;

/// A named check that can be referenced from a rule expression.
///
/// Implementations are pure: the outcome depends only on the value and the
/// modifier written after `:` in the rule. `value` is `None` when the field
/// is missing from the field set or was declared without a value.
pub trait Validator: Send + Sync {
    /// Return `true` when `value` satisfies the rule
    fn validate(&self, value: Option<&str>, modifier: Option<&str>) -> bool;

    /// Build the message recorded when [`Validator::validate`] fails.
    ///
    /// `label` is the field's display label, or the field name when no
    /// label was configured.
    fn compose_error(&self, label: &str, modifier: Option<&str>) -> String;
}

type ValidatesFn = Arc<dyn Fn(Option<&str>, Option<&str>) -> bool + Send + Sync>;
type ErrorFn = Arc<dyn Fn(&str, Option<&str>) -> String + Send + Sync>;

/// A validator assembled from two closures.
///
/// ```
/// use gatekeep_validation::{FnValidator, Validator};
///
/// let uppercase = FnValidator::new(
///     |value, _| value.is_some_and(|v| v.chars().all(char::is_uppercase)),
///     |label, _| format!("{} must be uppercase.", label),
/// );
///
/// assert!(uppercase.validate(Some("ABC"), None));
/// assert_eq!(uppercase.compose_error("code", None), "code must be uppercase.");
/// ```
#[derive(Clone)]
pub struct FnValidator {
    validates: ValidatesFn,
    error: ErrorFn,
}

impl FnValidator {
    pub fn new<V, E>(validates: V, error: E) -> Self
    where
        V: Fn(Option<&str>, Option<&str>) -> bool + Send + Sync + 'static,
        E: Fn(&str, Option<&str>) -> String + Send + Sync + 'static,
    {
        Self {
            validates: Arc::new(validates),
            error: Arc::new(error),
        }
    }
}

impl Validator for FnValidator {
    fn validate(&self, value: Option<&str>, modifier: Option<&str>) -> bool {
        (self.validates)(value, modifier)
    }

    fn compose_error(&self, label: &str, modifier: Option<&str>) -> String {
        (self.error)(label, modifier)
    }
}

impl fmt::Debug for FnValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnValidator").finish_non_exhaustive()
    }
}

impl<T: Validator + ?Sized> Validator for Arc<T> {
    fn validate(&self, value: Option<&str>, modifier: Option<&str>) -> bool {
        (**self).validate(value, modifier)
    }

    fn compose_error(&self, label: &str, modifier: Option<&str>) -> String {
        (**self).compose_error(label, modifier)
    }
}
