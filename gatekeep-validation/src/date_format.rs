// Date pattern matching for the `date-format` rule

use chrono::format::{Parsed, StrftimeItems, parse};
use regex::Regex;
use thiserror::Error;

/// Problems with a date pattern itself (not with the value being checked).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatePatternError {
    #[error("Unsupported date format character '{0}'")]
    UnsupportedToken(char),

    #[error("Date format ends with an escape character")]
    DanglingEscape,

    #[error("Date format could not be compiled: {0}")]
    Shape(String),
}

/// A date pattern written with single-letter tokens, e.g. `Y-m-d H:i:s`.
///
/// | Token | Meaning |
/// |-------|---------|
/// | `d`, `j` | day of month |
/// | `m`, `n` | month number |
/// | `Y` / `y` | four / two digit year |
/// | `H`, `G` / `h`, `g` | 24-hour / 12-hour hour |
/// | `i`, `s` | minutes, seconds |
/// | `A`, `a` | AM/PM |
/// | `D`, `l` | short / full weekday name |
/// | `M`, `F` | short / full month name |
/// | `U` | unix timestamp |
/// | `v`, `u` | milliseconds, microseconds |
/// | `O`, `P` | UTC offset as `+0200` / `+02:00` |
///
/// `\` makes the next character literal. Non-letters are literals.
///
/// Matching is strict: numeric tokens have a fixed digit count, signs and
/// padding whitespace are rejected, and literals must appear exactly.
#[derive(Debug, Clone)]
pub struct DatePattern {
    strftime: String,
    shape: Regex,
    has_date: bool,
    has_time: bool,
}

impl PartialEq for DatePattern {
    fn eq(&self, other: &Self) -> bool {
        self.strftime == other.strftime && self.shape.as_str() == other.shape.as_str()
    }
}

impl Eq for DatePattern {}

impl DatePattern {
    pub fn compile(pattern: &str) -> Result<Self, DatePatternError> {
        let mut strftime = String::with_capacity(pattern.len() * 2);
        let mut shape = String::from(r"\A");
        let (mut year, mut month, mut day) = (false, false, false);
        let (mut hour24, mut hour12, mut meridiem, mut minute) = (false, false, false, false);

        let mut chars = pattern.chars();
        while let Some(c) = chars.next() {
            let (spec, fragment) = match c {
                'd' => {
                    day = true;
                    ("%d", r"\d{2}")
                }
                'j' => {
                    day = true;
                    ("%d", r"\d{1,2}")
                }
                'm' => {
                    month = true;
                    ("%m", r"\d{2}")
                }
                'n' => {
                    month = true;
                    ("%m", r"\d{1,2}")
                }
                'Y' => {
                    year = true;
                    ("%Y", r"\d{4}")
                }
                'y' => {
                    year = true;
                    ("%y", r"\d{2}")
                }
                'H' => {
                    hour24 = true;
                    ("%H", r"\d{2}")
                }
                'G' => {
                    hour24 = true;
                    ("%H", r"\d{1,2}")
                }
                'h' => {
                    hour12 = true;
                    ("%I", r"\d{2}")
                }
                'g' => {
                    hour12 = true;
                    ("%I", r"\d{1,2}")
                }
                'i' => {
                    minute = true;
                    ("%M", r"\d{2}")
                }
                's' => ("%S", r"\d{2}"),
                'A' | 'a' => {
                    meridiem = true;
                    ("%p", "(?i:am|pm)")
                }
                'D' => ("%a", "[A-Za-z]{3}"),
                'l' => ("%A", "[A-Za-z]+"),
                'M' => {
                    month = true;
                    ("%b", "[A-Za-z]{3}")
                }
                'F' => {
                    month = true;
                    ("%B", "[A-Za-z]+")
                }
                'U' => ("%s", r"-?\d+"),
                'v' => ("%3f", r"\d{3}"),
                'u' => ("%6f", r"\d{6}"),
                'O' => ("%z", r"[+-]\d{4}"),
                'P' => ("%:z", r"[+-]\d{2}:\d{2}"),
                '\\' => {
                    let escaped = chars.next().ok_or(DatePatternError::DanglingEscape)?;
                    push_literal(&mut strftime, &mut shape, escaped);
                    continue;
                }
                c if c.is_ascii_alphabetic() => {
                    return Err(DatePatternError::UnsupportedToken(c));
                }
                c => {
                    push_literal(&mut strftime, &mut shape, c);
                    continue;
                }
            };
            strftime.push_str(spec);
            shape.push_str(fragment);
        }
        shape.push_str(r"\z");

        let shape = Regex::new(&shape).map_err(|e| DatePatternError::Shape(e.to_string()))?;

        Ok(Self {
            strftime,
            shape,
            has_date: year && month && day,
            has_time: minute && (hour24 || (hour12 && meridiem)),
        })
    }

    /// `true` when the whole of `value` matches the pattern and the parsed
    /// components form a real date/time (no February 30th, no hour 25).
    pub fn matches(&self, value: &str) -> bool {
        if !self.shape.is_match(value) {
            return false;
        }

        let mut parsed = Parsed::new();
        if parse(&mut parsed, value, StrftimeItems::new(&self.strftime)).is_err() {
            return false;
        }

        if self.has_date && parsed.to_naive_date().is_err() {
            return false;
        }
        if self.has_time && parsed.to_naive_time().is_err() {
            return false;
        }
        true
    }
}

fn push_literal(strftime: &mut String, shape: &mut String, c: char) {
    if c == '%' {
        strftime.push_str("%%");
    } else {
        strftime.push(c);
    }
    shape.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(pattern: &str, value: &str) -> bool {
        DatePattern::compile(pattern).unwrap().matches(value)
    }

    #[test]
    fn test_full_datetime() {
        assert!(matches("Y-m-d H:i:s", "2020-09-17 15:00:12"));
    }

    #[test]
    fn test_missing_component_fails() {
        assert!(!matches("Y-m-d H:i:s", "2020-09-17 15:00"));
    }

    #[test]
    fn test_trailing_input_fails() {
        assert!(!matches("Y-m-d", "2020-09-17 15:00"));
    }

    #[test]
    fn test_impossible_dates_fail() {
        assert!(!matches("Y-m-d", "2021-02-30"));
        assert!(!matches("Y-m-d", "2021-13-01"));
        assert!(!matches("H:i", "25:00"));
        assert!(matches("Y-m-d", "2020-02-29"));
    }

    #[test]
    fn test_day_first_and_names() {
        assert!(matches("d/m/Y", "17/09/2020"));
        assert!(matches("D, d M Y", "Thu, 17 Sep 2020"));
        assert!(!matches("D, d M Y", "Mon, 17 Sep 2020"));
    }

    #[test]
    fn test_twelve_hour_clock() {
        assert!(matches("h:i A", "03:15 PM"));
        assert!(!matches("h:i A", "13:15 PM"));
    }

    #[test]
    fn test_escaped_letters_are_literal() {
        assert!(matches("Y-m-d\\TH:i", "2020-09-17T15:00"));
        assert!(matches("d.m.Y \\a\\t H:i", "17.09.2020 at 15:00"));
    }

    #[test]
    fn test_percent_is_literal() {
        assert!(matches("Y%m", "2020%09"));
    }

    #[test]
    fn test_padding_and_signs_are_rejected() {
        assert!(!matches("Y-m-d", " 2020-09-17"));
        assert!(!matches("Y-m-d", "2020-09-17 "));
        assert!(!matches("Y-m-d", "2020- 09-17"));
        assert!(!matches("Y-m-d", "+2020-09-17"));
        assert!(!matches("Y-m-d", "2020-9-17"));
    }

    #[test]
    fn test_literal_separators_must_match_exactly() {
        assert!(!matches("Y-m-d H:i:s", "2020-09-1715:00:12"));
        assert!(!matches("Y-m-d H:i:s", "2020-09-17\t15:00:12"));
        assert!(!matches("Y-m-d H:i:s", "2020-09-17  15:00:12"));
        assert!(!matches("Y-m-d", "2020/09/17"));
    }

    #[test]
    fn test_unpadded_tokens() {
        assert!(matches("j.n.Y G:i", "7.9.2020 8:05"));
        assert!(matches("j.n.Y G:i", "17.09.2020 18:05"));
        assert!(!matches("j.n.Y", "117.9.2020"));
    }

    #[test]
    fn test_pattern_errors() {
        assert_eq!(
            DatePattern::compile("Y-m-d Q"),
            Err(DatePatternError::UnsupportedToken('Q'))
        );
        assert_eq!(
            DatePattern::compile("Y\\"),
            Err(DatePatternError::DanglingEscape)
        );
    }
}
