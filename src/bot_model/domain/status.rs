//! Bot model lifecycle status.

use super::ParseEnumError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a bot model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotModelStatus {
    /// Being prepared; not offered yet.
    #[default]
    Draft,
    /// Offered to customers.
    Active,
    /// Withdrawn from the catalogue.
    Archived,
}

impl BotModelStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for BotModelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for BotModelStatus {
    type Error = ParseEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "active" => Ok(Self::Active),
            "archived" => Ok(Self::Archived),
            _ => Err(ParseEnumError::new("bot model status", value)),
        }
    }
}
