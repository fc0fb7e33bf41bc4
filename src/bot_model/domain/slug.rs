//! Validated URL slug type.

use super::BotModelDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty slug made of lowercase ASCII letters, digits and hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Creates a validated slug.
    ///
    /// Unlike free-text fields the value is not trimmed or lowercased; the
    /// caller must supply the canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`BotModelDomainError::InvalidSlug`] when the value is empty
    /// or contains characters outside `[a-z0-9-]`.
    pub fn new(value: impl Into<String>) -> Result<Self, BotModelDomainError> {
        let raw = value.into();
        let is_valid = !raw.is_empty()
            && raw
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if is_valid {
            Ok(Self(raw))
        } else {
            Err(BotModelDomainError::InvalidSlug(raw))
        }
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
