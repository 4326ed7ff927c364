//! Rule-string driven field validation
//!
//! Validates a set of named values against compact rule expressions such
//! as `"required|len:8|email"` and collects human readable error messages.
//!
//! - Rules are separated by `|`.
//! - A rule may carry a modifier after the first `:` (`len:8`,
//!   `date-format:Y-m-d H:i:s`). Later colons belong to the modifier.
//! - Each rule name is looked up in a [`Registry`] of [`Validator`]s, which
//!   comes with `required`, `len`, `email` and `date-format` and accepts
//!   custom validators.
//!
//! # Examples
//!
//! ## Basic Validation
//!
//! ```
//! use gatekeep_validation::{Fields, Rules, Session};
//!
//! let fields = Fields::from([("email", "not-an-email")]);
//! let rules = Rules::from([("email", "required|email")]);
//!
//! let mut session = Session::new(fields, rules);
//! if session.fails()? {
//!     assert_eq!(session.errors(), &["email is not a valid e-mail address."]);
//! }
//! # Ok::<(), gatekeep_validation::ValidationError>(())
//! ```
//!
//! ## Field Labels
//!
//! ```
//! use gatekeep_validation::{FieldLabels, Fields, Rules, Session};
//!
//! let mut session = Session::new(
//!     Fields::from([("date", "2020-09-17 15:00")]),
//!     Rules::from([("date", "date-format:Y-m-d H:i:s")]),
//! )
//! .with_field_labels(FieldLabels::from([("date", "Date")]));
//!
//! assert!(session.fails()?);
//! assert_eq!(
//!     session.first_error(),
//!     "Date does not match the required date format Y-m-d H:i:s."
//! );
//! # Ok::<(), gatekeep_validation::ValidationError>(())
//! ```
//!
//! ## Custom Validators
//!
//! ```
//! use gatekeep_validation::{Fields, FnValidator, Rules, Session};
//!
//! let mut session = Session::new(
//!     Fields::from([("age", "17")]),
//!     Rules::from([("age", "min:18")]),
//! );
//! session.register_validator(
//!     "min",
//!     FnValidator::new(
//!         |value, modifier| {
//!             let min: i64 = modifier.and_then(|m| m.parse().ok()).unwrap_or(0);
//!             value.and_then(|v| v.parse::<i64>().ok()).is_some_and(|v| v >= min)
//!         },
//!         |label, modifier| format!("{} must be at least {}.", label, modifier.unwrap_or("")),
//!     ),
//! );
//!
//! assert!(session.fails()?);
//! assert_eq!(session.first_error(), "age must be at least 18.");
//! # Ok::<(), gatekeep_validation::ValidationError>(())
//! ```
//!
//! ## Unknown Rules
//!
//! A rule that names no registered validator is a configuration fault, not
//! a validation failure:
//!
//! ```
//! use gatekeep_validation::{Fields, Rules, Session, ValidationError};
//!
//! let mut session = Session::new(Fields::new(), Rules::from([("name", "bogus")]));
//! assert!(matches!(
//!     session.fails(),
//!     Err(ValidationError::UnresolvedValidator { .. })
//! ));
//! ```

mod date_format;
mod engine;
mod errors;
mod fields;
mod registry;
mod schema;
mod session;
mod traits;
mod validators;

pub mod rules;

pub use date_format::{DatePattern, DatePatternError};
pub use engine::Engine;
pub use errors::{ErrorLog, ValidationError};
pub use fields::{FieldLabels, Fields, Rules};
pub use registry::{Registry, default_validators};
pub use rules::{RuleInvocation, parse as parse_rules};
pub use schema::RuleSchema;
pub use session::Session;
pub use traits::{FnValidator, Validator};
pub use validators::{DATE_FORMAT, DateFormat, EMAIL, Email, LEN, Length, REQUIRED, Required};

/// Result type for validation operations
pub type Result<T> = std::result::Result<T, ValidationError>;
