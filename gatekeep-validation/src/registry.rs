//! Validator registry
//!
//! Maps rule names to validator instances. A registry is an ordinary value:
//! [`Registry::new`] builds one with the built-in validators, and every
//! session owns its own copy, so registering a custom validator in one
//! place never leaks into another.

use crate::Validator;
use crate::validators::{self, DateFormat, Email, Length, Required};
use gatekeep_log::debug;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// The built-in validators, keyed by the name used in rule expressions.
///
/// Useful for assembling a registry from scratch:
///
/// ```
/// use gatekeep_validation::{Registry, default_validators};
///
/// let mut registry = Registry::empty();
/// for (name, validator) in default_validators() {
///     if name != "email" {
///         registry.register_shared(name, validator);
///     }
/// }
/// assert!(!registry.contains("email"));
/// assert!(registry.contains("len"));
/// ```
pub fn default_validators() -> Vec<(&'static str, Arc<dyn Validator>)> {
    vec![
        (validators::LEN, Arc::new(Length) as Arc<dyn Validator>),
        (validators::EMAIL, Arc::new(Email) as Arc<dyn Validator>),
        (validators::REQUIRED, Arc::new(Required) as Arc<dyn Validator>),
        (validators::DATE_FORMAT, Arc::new(DateFormat) as Arc<dyn Validator>),
    ]
}

/// Name → validator lookup used by the engine
#[derive(Clone)]
pub struct Registry {
    validators: HashMap<String, Arc<dyn Validator>>,
}

impl Registry {
    /// Registry pre-populated with `len`, `email`, `required` and
    /// `date-format`.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for (name, validator) in default_validators() {
            registry.register_shared(name, validator);
        }
        debug!("Registered {} built-in validators", registry.len());
        registry
    }

    /// Registry with no validators at all
    pub fn empty() -> Self {
        Self {
            validators: HashMap::new(),
        }
    }

    /// Register `validator` under `name`, replacing any previous entry.
    pub fn register<V>(&mut self, name: impl Into<String>, validator: V)
    where
        V: Validator + 'static,
    {
        self.register_shared(name, Arc::new(validator));
    }

    /// Register an already shared validator instance.
    pub fn register_shared(&mut self, name: impl Into<String>, validator: Arc<dyn Validator>) {
        let name = name.into();
        if self.validators.insert(name.clone(), validator).is_some() {
            debug!("Replaced validator '{}'", name);
        } else {
            debug!("Registered validator '{}'", name);
        }
    }

    /// Remove the validator registered under `name`. Missing names are ignored.
    pub fn remove(&mut self, name: &str) -> Option<Arc<dyn Validator>> {
        let removed = self.validators.remove(name);
        if removed.is_some() {
            debug!("Removed validator '{}'", name);
        }
        removed
    }

    /// Validator registered under `name`
    pub fn get(&self, name: &str) -> Option<&dyn Validator> {
        self.validators.get(name).map(|v| &**v)
    }

    /// `true` if a validator is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.validators.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.validators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered validators
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("validators", &self.names())
            .finish()
    }
}
