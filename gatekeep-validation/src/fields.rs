// Field sets, rule sets and display labels

use crate::{Result, ValidationError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Values to validate, keyed by field name, in insertion order.
///
/// A field may be present with a value, present but absent (`None`), or
/// missing altogether; validators see the last two the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    values: IndexMap<String, Option<String>>,
}

impl Fields {
    /// Empty field set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field with a value
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), Some(value.into()));
        self
    }

    /// Add a field that is declared but has no value
    pub fn with_absent(mut self, name: impl Into<String>) -> Self {
        self.values.insert(name.into(), None);
        self
    }

    /// Set a field, replacing an existing value but keeping its position.
    /// Pass `None` to declare the field without a value.
    pub fn insert(&mut self, name: impl Into<String>, value: Option<String>) {
        self.values.insert(name.into(), value);
    }

    /// Value of a field; `None` when the field is missing or absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(|v| v.as_deref())
    }

    /// `true` when the field was declared, with or without a value
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fields and their values in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Build a field set from a JSON object.
    ///
    /// Strings are taken as is, numbers use their decimal text, `true`
    /// becomes `"1"`. `null` and `false` are treated as "not set". Arrays
    /// and objects cannot be validated as a single value and are rejected.
    pub fn from_json(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            ValidationError::Schema(format!(
                "field set must be a JSON object, got {}",
                json_kind(value)
            ))
        })?;

        let mut fields = Self::new();
        for (name, value) in object {
            let value = match value {
                Value::Null | Value::Bool(false) => None,
                Value::Bool(true) => Some("1".to_string()),
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Array(_) | Value::Object(_) => {
                    return Err(ValidationError::InvalidFieldValue {
                        field: name.clone(),
                        kind: json_kind(value),
                    });
                }
            };
            fields.insert(name.clone(), value);
        }
        Ok(fields)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Fields {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Rule expressions keyed by field name, in insertion order.
///
/// Only fields listed here are validated. The order of this map is the
/// order in which error messages are produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rules {
    expressions: IndexMap<String, String>,
}

impl Rules {
    /// Empty rule set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the rule expression for `field`
    pub fn with(mut self, field: impl Into<String>, expression: impl Into<String>) -> Self {
        self.insert(field, expression);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, expression: impl Into<String>) {
        self.expressions.insert(field.into(), expression.into());
    }

    /// Rule expression for `field`, if it has one
    pub fn get(&self, field: &str) -> Option<&str> {
        self.expressions.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    /// `(field, expression)` pairs in validation order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.expressions
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Rules {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            expressions: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Rules {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Human friendly names used in place of field keys in error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldLabels {
    labels: IndexMap<String, String>,
}

impl FieldLabels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(field.into(), label.into());
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(field.into(), label.into());
    }

    /// Label for `field`, falling back to the field name itself.
    pub fn label_for<'a>(&'a self, field: &'a str) -> &'a str {
        self.labels.get(field).map(String::as_str).unwrap_or(field)
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldLabels {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for FieldLabels {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
