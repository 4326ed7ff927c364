// Rule expression parser

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Separates rules within an expression
pub const RULE_SEPARATOR: char = '|';

/// Separates a rule name from its modifier
pub const MODIFIER_SEPARATOR: char = ':';

/// One parsed unit of a rule expression, e.g. `len:8`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleInvocation {
    /// Registry key of the validator to run
    pub name: String,

    /// Everything after the first `:`, verbatim
    pub modifier: Option<String>,
}

impl RuleInvocation {
    /// Invocation of `name` without a modifier
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifier: None,
        }
    }

    /// Attach a modifier, replacing any existing one
    pub fn with_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifier = Some(modifier.into());
        self
    }

    /// Parse a single rule token.
    ///
    /// Only the first `:` splits. A date modifier such as `Y-m-d H:i:s`
    /// keeps its own colons.
    pub fn parse_token(token: &str) -> Self {
        match token.split_once(MODIFIER_SEPARATOR) {
            Some((name, modifier)) => Self::new(name).with_modifier(modifier),
            None => Self::new(token),
        }
    }

    /// The modifier, if the token had a `:`
    pub fn modifier(&self) -> Option<&str> {
        self.modifier.as_deref()
    }
}

impl FromStr for RuleInvocation {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_token(s))
    }
}

impl fmt::Display for RuleInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.modifier {
            Some(modifier) => write!(f, "{}{}{}", self.name, MODIFIER_SEPARATOR, modifier),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Split a rule expression such as `required|len:8|email` into invocations.
///
/// An empty expression yields no rules. Every other token is kept as
/// written, so `a||b` or a trailing `|` produce a rule with an empty name
/// that the engine will fail to resolve. Tokens are not trimmed.
pub fn parse(expression: &str) -> Vec<RuleInvocation> {
    if expression.is_empty() {
        return Vec::new();
    }

    expression
        .split(RULE_SEPARATOR)
        .map(RuleInvocation::parse_token)
        .collect()
}
