//! Pricing model for bot models.

use super::ParseEnumError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a bot model is sold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PricingModel {
    /// Single up-front purchase.
    #[default]
    OneTime,
    /// Recurring subscription.
    Subscription,
    /// Billed by consumption.
    UsageBased,
}

impl PricingModel {
    /// All pricing models in their canonical order.
    pub const ALL: [Self; 3] = [Self::OneTime, Self::Subscription, Self::UsageBased];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneTime => "one-time",
            Self::Subscription => "subscription",
            Self::UsageBased => "usage-based",
        }
    }
}

impl fmt::Display for PricingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for PricingModel {
    type Error = ParseEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|model| model.as_str() == value)
            .ok_or_else(|| ParseEnumError::new("pricing model", value))
    }
}
