// Validation session

use crate::{Engine, ErrorLog, FieldLabels, Fields, Registry, Result, Rules, Validator};
use std::sync::Arc;

/// A set of fields, the rules that apply to them and the validators that
/// enforce those rules.
///
/// Validation is run lazily by [`Session::fails`] or [`Session::validate`],
/// so validators and labels can still be changed after construction. Each
/// run replaces the previous error list.
///
/// ```
/// use gatekeep_validation::{Fields, Rules, Session};
///
/// let fields = Fields::from([("email", "ada@example.com"), ("password", "hunter2")]);
/// let rules = Rules::from([("email", "required|email"), ("password", "required|len:8")]);
///
/// let mut session = Session::new(fields, rules);
/// assert!(session.fails()?);
/// assert_eq!(
///     session.first_error(),
///     "password is shorter than the required 8 characters."
/// );
/// # Ok::<(), gatekeep_validation::ValidationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    fields: Fields,
    rules: Rules,
    labels: FieldLabels,
    engine: Engine,
    log: ErrorLog,
    manual_errors: Vec<String>,
}

impl Session {
    /// Session using the built-in validators and no field labels
    pub fn new(fields: Fields, rules: Rules) -> Self {
        Self {
            fields,
            rules,
            labels: FieldLabels::new(),
            engine: Engine::new(),
            log: ErrorLog::new(),
            manual_errors: Vec::new(),
        }
    }

    /// Replace the whole validator registry
    pub fn with_validators(mut self, registry: Registry) -> Self {
        self.engine = Engine::with_registry(registry);
        self
    }

    pub fn with_field_labels(mut self, labels: FieldLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Replace the labels used in place of field names in messages
    pub fn set_field_labels(&mut self, labels: FieldLabels) {
        self.labels = labels;
    }

    /// Register `validator` under `name`, replacing any existing entry,
    /// including a built-in one.
    pub fn register_validator<V>(&mut self, name: impl Into<String>, validator: V)
    where
        V: Validator + 'static,
    {
        self.engine.registry_mut().register(name, validator);
    }

    /// Register a validator instance that is also used elsewhere, such as
    /// one of [`Session::default_validators`] under a different name.
    pub fn register_shared_validator(
        &mut self,
        name: impl Into<String>,
        validator: Arc<dyn Validator>,
    ) {
        self.engine.registry_mut().register_shared(name, validator);
    }

    /// Remove the validator registered under `name`. Missing names are ignored.
    pub fn remove_validator(&mut self, name: &str) {
        self.engine.registry_mut().remove(name);
    }

    /// The built-in validators, for building a custom registry
    pub fn default_validators() -> Vec<(&'static str, Arc<dyn Validator>)> {
        crate::default_validators()
    }

    /// Record an error that no rule produced (e.g. a cross-field check
    /// done by the caller). Manual errors are kept across runs and listed
    /// after rule errors.
    pub fn add_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.log.push(message.clone());
        self.manual_errors.push(message);
    }

    /// Run every rule and return the fresh error log.
    ///
    /// On a configuration fault the previous error log is left untouched.
    pub fn validate(&mut self) -> Result<&ErrorLog> {
        let mut log = self.engine.run(&self.fields, &self.rules, &self.labels)?;
        log.extend(self.manual_errors.iter().cloned());
        self.log = log;
        Ok(&self.log)
    }

    /// Run validation and report whether any error was recorded.
    pub fn fails(&mut self) -> Result<bool> {
        Ok(self.validate()?.fails())
    }

    /// Errors from the most recent run
    pub fn errors(&self) -> &[String] {
        self.log.errors()
    }

    /// First error from the most recent run, or `""`
    pub fn first_error(&self) -> &str {
        self.log.first_error()
    }

    pub fn error_log(&self) -> &ErrorLog {
        &self.log
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn registry(&self) -> &Registry {
        self.engine.registry()
    }
}
