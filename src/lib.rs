// gatekeep - rule-string driven field validation
//
// Validates named fields against pipe-delimited rule expressions such as
// "required|len:8|email", using a registry of validators that callers can
// extend or override.

// Re-export the validation engine
pub use gatekeep_validation::*;

// Logging configuration and macros
pub use gatekeep_log as log;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ErrorLog, FieldLabels, Fields, FnValidator, Registry, RuleSchema, Rules, Session,
        ValidationError, Validator,
    };
}
