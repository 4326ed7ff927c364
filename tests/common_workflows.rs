//! Integration tests for common gatekeep workflows.
//!
//! These tests verify that the most common use cases work correctly.

use gatekeep::prelude::*;

// =============================================================================
// Form Validation
// =============================================================================

#[test]
fn test_signup_form() {
    let fields = Fields::from([
        ("email", "ada@example"),
        ("password", "hunter2"),
        ("birthday", "1815-12-10"),
    ]);
    let rules = Rules::from([
        ("email", "required|email"),
        ("password", "required|len:8"),
        ("birthday", "date-format:Y-m-d"),
        ("terms", "required"),
    ]);
    let labels = FieldLabels::from([("email", "E-mail"), ("terms", "Terms of service")]);

    let mut session = Session::new(fields, rules).with_field_labels(labels);

    assert!(session.fails().unwrap());
    assert_eq!(
        session.errors(),
        &[
            "E-mail is not a valid e-mail address.",
            "password is shorter than the required 8 characters.",
            "Terms of service is required.",
        ]
    );
    assert_eq!(session.first_error(), "E-mail is not a valid e-mail address.");
}

#[test]
fn test_passing_form() {
    let mut session = Session::new(
        Fields::from([("email", "ada@example.com"), ("password", "correct horse")]),
        Rules::from([("email", "required|email"), ("password", "required|len:8")]),
    );

    assert!(!session.fails().unwrap());
    assert!(session.errors().is_empty());
    assert_eq!(session.first_error(), "");
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_schema_from_json_document() {
    let schema = RuleSchema::from_json_str(
        r#"{
            "rules": { "name": "required", "email": "required|email" },
            "labels": { "name": "Full name" }
        }"#,
    )
    .unwrap();

    let fields = Fields::from_json(&serde_json::json!({ "name": null, "email": "x@y.io" })).unwrap();
    let mut session = schema.session(fields);

    assert!(session.fails().unwrap());
    assert_eq!(session.errors(), &["Full name is required."]);
}

// =============================================================================
// Extension
// =============================================================================

#[test]
fn test_shared_registry_across_sessions() {
    let mut registry = Registry::new();
    registry.register(
        "slug",
        FnValidator::new(
            |value, _| {
                value.is_some_and(|v| {
                    !v.is_empty()
                        && v.chars()
                            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
                })
            },
            |label, _| format!("{} may only contain lowercase letters, digits and dashes.", label),
        ),
    );

    let mut good = Session::new(
        Fields::from([("slug", "hello-world-2")]),
        Rules::from([("slug", "slug")]),
    )
    .with_validators(registry.clone());
    let mut bad = Session::new(
        Fields::from([("slug", "Hello World")]),
        Rules::from([("slug", "slug")]),
    )
    .with_validators(registry);

    assert!(!good.fails().unwrap());
    assert!(bad.fails().unwrap());
    assert_eq!(
        bad.first_error(),
        "slug may only contain lowercase letters, digits and dashes."
    );
}

#[test]
fn test_misconfigured_rule_is_not_a_validation_error() {
    let mut session = Session::new(
        Fields::from([("age", "42")]),
        Rules::from([("age", "integer")]),
    );

    match session.fails() {
        Err(ValidationError::UnresolvedValidator { field, name }) => {
            assert_eq!(field, "age");
            assert_eq!(name, "integer");
        }
        other => panic!("expected unresolved validator, got {:?}", other),
    }
    assert!(session.error_log().is_empty());
}

// =============================================================================
// Logging
// =============================================================================

#[test]
fn test_log_level_can_be_raised() {
    use gatekeep::log::{Level, current_level, set_level};

    let original = current_level();
    set_level(Level::Off);
    assert_eq!(current_level(), Level::Off);
    set_level(original);
}
