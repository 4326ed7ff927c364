// Built-in validators

use crate::Validator;
use crate::date_format::DatePattern;
use gatekeep_log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Registry name of [`Required`]
pub const REQUIRED: &str = "required";
/// Registry name of [`Length`]
pub const LEN: &str = "len";
/// Registry name of [`Email`]
pub const EMAIL: &str = "email";
/// Registry name of [`DateFormat`]
pub const DATE_FORMAT: &str = "date-format";

// local-part@domain, where the domain needs at least one dot
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$").unwrap()
});

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_PART_LEN: usize = 64;

/// Value must be present and not empty
#[derive(Debug, Clone, Copy, Default)]
pub struct Required;

impl Validator for Required {
    fn validate(&self, value: Option<&str>, _modifier: Option<&str>) -> bool {
        value.is_some_and(|v| !v.is_empty())
    }

    fn compose_error(&self, label: &str, _modifier: Option<&str>) -> String {
        format!("{} is required.", label)
    }
}

/// Minimum length in characters, given as the modifier (`len:8`).
///
/// Without a modifier, or with a modifier that reads as zero, there is no
/// constraint and every value passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Length;

impl Length {
    /// Read the leading integer of a modifier; `"8"` is 8, `"abc"` and
    /// negative numbers are 0.
    fn minimum(modifier: &str) -> usize {
        let trimmed = modifier.trim_start();
        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if unsigned.starts_with('-') {
            return 0;
        }

        let digits: &str = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .map_or(unsigned, |end| &unsigned[..end]);
        if digits.is_empty() {
            return 0;
        }
        digits.parse().unwrap_or(usize::MAX)
    }
}

impl Validator for Length {
    fn validate(&self, value: Option<&str>, modifier: Option<&str>) -> bool {
        let minimum = modifier.map_or(0, Self::minimum);
        if minimum == 0 {
            return true;
        }

        value.is_some_and(|v| v.chars().count() >= minimum)
    }

    fn compose_error(&self, label: &str, modifier: Option<&str>) -> String {
        format!(
            "{} is shorter than the required {} characters.",
            label,
            modifier.unwrap_or("")
        )
    }
}

/// Value must look like an e-mail address
#[derive(Debug, Clone, Copy, Default)]
pub struct Email;

impl Email {
    fn is_valid(value: &str) -> bool {
        if value.len() > MAX_EMAIL_LEN || !EMAIL_REGEX.is_match(value) {
            return false;
        }

        let Some((local, _domain)) = value.rsplit_once('@') else {
            return false;
        };
        local.len() <= MAX_LOCAL_PART_LEN
            && !local.starts_with('.')
            && !local.ends_with('.')
            && !local.contains("..")
    }
}

impl Validator for Email {
    fn validate(&self, value: Option<&str>, _modifier: Option<&str>) -> bool {
        value.is_some_and(Self::is_valid)
    }

    fn compose_error(&self, label: &str, _modifier: Option<&str>) -> String {
        format!("{} is not a valid e-mail address.", label)
    }
}

/// Value must match the date pattern given as the modifier
/// (`date-format:Y-m-d H:i:s`).
///
/// An empty or absent value passes; pair with `required` to demand one.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateFormat;

impl Validator for DateFormat {
    fn validate(&self, value: Option<&str>, modifier: Option<&str>) -> bool {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            return true;
        };
        let Some(pattern) = modifier else {
            debug!("date-format rule has no pattern; rejecting '{}'", value);
            return false;
        };

        match DatePattern::compile(pattern) {
            Ok(pattern) => pattern.matches(value),
            Err(e) => {
                debug!("date-format pattern '{}' rejected: {}", pattern, e);
                false
            }
        }
    }

    fn compose_error(&self, label: &str, modifier: Option<&str>) -> String {
        format!(
            "{} does not match the required date format {}.",
            label,
            modifier.unwrap_or("")
        )
    }
}
