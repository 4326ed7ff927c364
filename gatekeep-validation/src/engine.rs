// Validation engine

use crate::{ErrorLog, FieldLabels, Fields, Registry, Result, Rules, ValidationError, parse_rules};
use gatekeep_log::debug;

/// Runs rule expressions against a field set using a [`Registry`].
///
/// The engine keeps no state between runs, so one engine can validate any
/// number of field/rule pairs as long as its registry is left alone while a
/// run is in progress.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    registry: Registry,
}

impl Engine {
    /// Engine backed by the built-in validators
    pub fn new() -> Self {
        Self::with_registry(Registry::new())
    }

    pub fn with_registry(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Validate `fields` against `rules`.
    ///
    /// Every failing rule contributes exactly one message, in field order
    /// and then rule order. A rule naming an unregistered validator aborts
    /// the run with [`ValidationError::UnresolvedValidator`]; messages
    /// collected up to that point are discarded.
    pub fn run(&self, fields: &Fields, rules: &Rules, labels: &FieldLabels) -> Result<ErrorLog> {
        let mut log = ErrorLog::new();

        for (field, expression) in rules.iter() {
            let value = fields.get(field);

            for rule in parse_rules(expression) {
                let Some(validator) = self.registry.get(&rule.name) else {
                    debug!(
                        "Rule '{}' on field '{}' names no registered validator",
                        rule.name, field
                    );
                    return Err(ValidationError::UnresolvedValidator {
                        field: field.to_string(),
                        name: rule.name,
                    });
                };

                if !validator.validate(value, rule.modifier()) {
                    debug!("Field '{}' failed rule '{}'", field, rule);
                    log.push(validator.compose_error(labels.label_for(field), rule.modifier()));
                }
            }
        }

        debug!("Validated {} fields, {} errors", rules.len(), log.len());
        Ok(log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FnValidator;

    #[test]
    fn test_errors_follow_rule_order() {
        let engine = Engine::new();
        let fields = Fields::from([("a", ""), ("b", "nope")]);
        let rules = Rules::from([("a", "required"), ("b", "email")]);

        let log = engine.run(&fields, &rules, &FieldLabels::new()).unwrap();
        assert_eq!(
            log.errors(),
            &["a is required.", "b is not a valid e-mail address."]
        );
    }

    #[test]
    fn test_every_failing_rule_reports() {
        let engine = Engine::new();
        let fields = Fields::new().with_absent("password");
        let rules = Rules::from([("password", "required|len:8")]);

        let log = engine.run(&fields, &rules, &FieldLabels::new()).unwrap();
        assert_eq!(
            log.errors(),
            &[
                "password is required.",
                "password is shorter than the required 8 characters."
            ]
        );
    }

    #[test]
    fn test_field_missing_from_field_set_is_absent() {
        let engine = Engine::new();
        let rules = Rules::from([("name", "len:3"), ("email", "email")]);

        let log = engine.run(&Fields::new(), &rules, &FieldLabels::new()).unwrap();
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_fields_without_rules_are_ignored() {
        let engine = Engine::new();
        let fields = Fields::from([("unchecked", "")]);

        let log = engine.run(&fields, &Rules::new(), &FieldLabels::new()).unwrap();
        assert!(!log.fails());
    }

    #[test]
    fn test_labels_replace_field_names() {
        let engine = Engine::new();
        let fields = Fields::from([("date", "2020-09-17 15:00")]);
        let rules = Rules::from([("date", "date-format:Y-m-d H:i:s")]);
        let labels = FieldLabels::from([("date", "Date")]);

        let log = engine.run(&fields, &rules, &labels).unwrap();
        assert_eq!(
            log.first_error(),
            "Date does not match the required date format Y-m-d H:i:s."
        );
    }

    #[test]
    fn test_unresolved_validator_is_a_fault() {
        let engine = Engine::new();
        let fields = Fields::from([("a", ""), ("b", "x")]);
        let rules = Rules::from([("a", "required"), ("b", "bogus")]);

        let err = engine.run(&fields, &rules, &FieldLabels::new()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnresolvedValidator {
                field: "b".to_string(),
                name: "bogus".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_rule_token_is_a_fault() {
        let engine = Engine::new();
        let fields = Fields::from([("email", "ada@example.org")]);

        for expression in ["required||email", "required|email|"] {
            let rules = Rules::from([("email", expression)]);
            let err = engine.run(&fields, &rules, &FieldLabels::new()).unwrap_err();
            assert_eq!(
                err,
                ValidationError::UnresolvedValidator {
                    field: "email".to_string(),
                    name: String::new(),
                }
            );
        }
    }

    #[test]
    fn test_empty_expression_checks_nothing() {
        let engine = Engine::new();
        let rules = Rules::from([("email", "")]);

        let log = engine.run(&Fields::new(), &rules, &FieldLabels::new()).unwrap();
        assert!(!log.fails());
    }

    #[test]
    fn test_rule_names_are_not_trimmed() {
        let engine = Engine::new();
        let fields = Fields::from([("email", "ada@example.org")]);
        let rules = Rules::from([("email", "required| email")]);

        let err = engine.run(&fields, &rules, &FieldLabels::new()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnresolvedValidator {
                field: "email".to_string(),
                name: " email".to_string(),
            }
        );
    }

    #[test]
    fn test_custom_validator_receives_modifier() {
        let mut engine = Engine::new();
        engine.registry_mut().register(
            "in",
            FnValidator::new(
                |value, modifier| match (value, modifier) {
                    (Some(v), Some(options)) => options.split(',').any(|o| o == v),
                    _ => false,
                },
                |label, modifier| format!("{} must be one of {}.", label, modifier.unwrap_or("")),
            ),
        );

        let fields = Fields::from([("color", "purple")]);
        let rules = Rules::from([("color", "in:red,green,blue")]);

        let log = engine.run(&fields, &rules, &FieldLabels::new()).unwrap();
        assert_eq!(log.first_error(), "color must be one of red,green,blue.");
    }

    #[test]
    fn test_engine_is_reusable() {
        let engine = Engine::new();
        let rules = Rules::from([("email", "email")]);
        let labels = FieldLabels::new();

        let bad = engine
            .run(&Fields::from([("email", "nope")]), &rules, &labels)
            .unwrap();
        let good = engine
            .run(&Fields::from([("email", "a@b.com")]), &rules, &labels)
            .unwrap();

        assert!(bad.fails());
        assert!(!good.fails());
    }
}
