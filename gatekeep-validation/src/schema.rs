// Rule schemas loaded from JSON or TOML text

use crate::{FieldLabels, Fields, Result, Rules, Session, ValidationError};
use serde::{Deserialize, Serialize};

/// Rules and labels for a form, kept outside the code.
///
/// ```toml
/// [rules]
/// email = "required|email"
/// birthday = "date-format:Y-m-d"
///
/// [labels]
/// birthday = "Birthday"
/// ```
///
/// Rules are applied in the order they appear in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSchema {
    pub rules: Rules,

    #[serde(default, skip_serializing_if = "FieldLabels::is_empty")]
    pub labels: FieldLabels,
}

impl RuleSchema {
    /// Schema with `rules` and no labels
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            labels: FieldLabels::new(),
        }
    }

    pub fn with_labels(mut self, labels: FieldLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Parse a schema from a JSON document with a `rules` object and an
    /// optional `labels` object.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Schema`] when the document is not valid
    /// JSON or does not have that shape.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| ValidationError::Schema(format!("JSON parse error: {}", e)))
    }

    /// Parse a schema from a TOML document with a `[rules]` table and an
    /// optional `[labels]` table. Rule order follows the document.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Schema`] when the document is not valid
    /// TOML or does not have that shape.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| ValidationError::Schema(format!("TOML parse error: {}", e)))
    }

    /// Serialize to pretty-printed JSON, omitting empty labels
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ValidationError::Schema(format!("JSON serialization error: {}", e)))
    }

    /// Start a session validating `fields` with this schema's rules and
    /// labels and the built-in validators.
    pub fn session(&self, fields: Fields) -> Session {
        Session::new(fields, self.rules.clone()).with_field_labels(self.labels.clone())
    }
}
