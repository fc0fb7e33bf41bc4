//! Leaf schemas: strings, numbers and string enums.
//!
//! Each leaf runs all of its checks so that one pass reports every failure
//! for a field, not only the first.

use super::{FieldPath, Violation};
use regex::Regex;
use serde_json::Value;

#[derive(Debug, Clone)]
enum StringCheck {
    MinLength { min: usize, message: String },
    MaxLength { max: usize, message: String },
    Pattern { regex: Regex, message: String },
    Email { message: String },
    Uuid { message: String },
    DateTime { message: String },
}

impl StringCheck {
    fn failure(&self, text: &str) -> Option<&str> {
        let passed = match self {
            Self::MinLength { min, .. } => text.chars().count() >= *min,
            Self::MaxLength { max, .. } => text.chars().count() <= *max,
            Self::Pattern { regex, .. } => regex.is_match(text),
            Self::Email { .. } => is_email(text),
            Self::Uuid { .. } => uuid::Uuid::parse_str(text).is_ok(),
            Self::DateTime { .. } => chrono::DateTime::parse_from_rfc3339(text).is_ok(),
        };
        if passed { None } else { Some(self.message()) }
    }

    fn message(&self) -> &str {
        match self {
            Self::MinLength { message, .. }
            | Self::MaxLength { message, .. }
            | Self::Pattern { message, .. }
            | Self::Email { message }
            | Self::Uuid { message }
            | Self::DateTime { message } => message,
        }
    }
}

/// String leaf with ordered checks.
#[derive(Debug, Clone, Default)]
pub struct StringSchema {
    checks: Vec<StringCheck>,
}

impl StringSchema {
    /// Creates a string schema without checks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires at least `min` characters.
    #[must_use]
    pub fn min_len(mut self, min: usize, message: impl Into<String>) -> Self {
        self.checks.push(StringCheck::MinLength {
            min,
            message: message.into(),
        });
        self
    }

    /// Requires at least one character.
    #[must_use]
    pub fn non_empty(self, message: impl Into<String>) -> Self {
        self.min_len(1, message)
    }

    /// Requires at most `max` characters.
    #[must_use]
    pub fn max_len(mut self, max: usize, message: impl Into<String>) -> Self {
        self.checks.push(StringCheck::MaxLength {
            max,
            message: message.into(),
        });
        self
    }

    /// Requires a match of `regex`.
    #[must_use]
    pub fn pattern(mut self, regex: Regex, message: impl Into<String>) -> Self {
        self.checks.push(StringCheck::Pattern {
            regex,
            message: message.into(),
        });
        self
    }

    /// Requires an email address.
    #[must_use]
    pub fn email(mut self, message: impl Into<String>) -> Self {
        self.checks.push(StringCheck::Email {
            message: message.into(),
        });
        self
    }

    /// Requires a hyphenated UUID.
    #[must_use]
    pub fn uuid(mut self, message: impl Into<String>) -> Self {
        self.checks.push(StringCheck::Uuid {
            message: message.into(),
        });
        self
    }

    /// Requires an RFC 3339 timestamp.
    #[must_use]
    pub fn datetime(mut self, message: impl Into<String>) -> Self {
        self.checks.push(StringCheck::DateTime {
            message: message.into(),
        });
        self
    }

    pub(super) fn check(&self, text: &str, path: &FieldPath, violations: &mut Vec<Violation>) {
        for check in &self.checks {
            if let Some(message) = check.failure(text) {
                violations.push(Violation::new(path.clone(), message));
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Bound {
    Inclusive(f64),
    Exclusive(f64),
}

/// Number leaf with optional lower and upper bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberSchema {
    lower: Option<Bound>,
    upper: Option<Bound>,
}

impl NumberSchema {
    /// Creates an unbounded number schema.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lower: None,
            upper: None,
        }
    }

    /// Requires a value strictly greater than zero.
    #[must_use]
    pub const fn positive(mut self) -> Self {
        self.lower = Some(Bound::Exclusive(0.0));
        self
    }

    /// Requires a value greater than or equal to `min`.
    #[must_use]
    pub const fn min(mut self, min: f64) -> Self {
        self.lower = Some(Bound::Inclusive(min));
        self
    }

    /// Requires a value less than or equal to `max`.
    #[must_use]
    pub const fn max(mut self, max: f64) -> Self {
        self.upper = Some(Bound::Inclusive(max));
        self
    }

    pub(super) fn check(&self, number: f64, path: &FieldPath, violations: &mut Vec<Violation>) {
        match self.lower {
            Some(Bound::Inclusive(min)) if number < min => violations.push(Violation::new(
                path.clone(),
                format!("Number must be greater than or equal to {min}"),
            )),
            Some(Bound::Exclusive(min)) if number <= min => violations.push(Violation::new(
                path.clone(),
                format!("Number must be greater than {min}"),
            )),
            _ => {}
        }
        match self.upper {
            Some(Bound::Inclusive(max)) if number > max => violations.push(Violation::new(
                path.clone(),
                format!("Number must be less than or equal to {max}"),
            )),
            Some(Bound::Exclusive(max)) if number >= max => violations.push(Violation::new(
                path.clone(),
                format!("Number must be less than {max}"),
            )),
            _ => {}
        }
    }
}

/// String enum leaf.
#[derive(Debug, Clone)]
pub struct EnumSchema {
    options: Vec<&'static str>,
}

impl EnumSchema {
    /// Creates an enum accepting exactly `options`.
    pub fn new(options: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            options: options.into_iter().collect(),
        }
    }

    /// Returns the accepted options in declaration order.
    #[must_use]
    pub fn options(&self) -> &[&'static str] {
        &self.options
    }

    pub(super) fn check(&self, value: &Value, path: &FieldPath, violations: &mut Vec<Violation>) {
        let expected = self
            .options
            .iter()
            .map(|option| format!("'{option}'"))
            .collect::<Vec<_>>()
            .join(" | ");
        match value.as_str() {
            Some(text) if self.options.contains(&text) => {}
            Some(text) => violations.push(Violation::new(
                path.clone(),
                format!("Invalid enum value. Expected {expected}, received '{text}'"),
            )),
            None => violations.push(Violation::new(
                path.clone(),
                format!("Expected {expected}, received {}", super::node::kind_of(value)),
            )),
        }
    }
}

/// Returns `true` when `text` looks like `local@domain.tld`.
///
/// The local part may not start with, end with, or repeat a dot. The
/// domain needs at least two labels and an alphabetic top-level label of
/// two or more characters.
#[must_use]
pub fn is_email(text: &str) -> bool {
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_'+-.".contains(c));
    let labels: Vec<&str> = domain.split('.').collect();
    let domain_ok = labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
        && labels
            .last()
            .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()));
    local_ok && domain_ok
}
