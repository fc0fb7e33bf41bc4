//! Error types for bot model domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or changing bot model domain values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BotModelDomainError {
    /// The bot model name is empty.
    #[error("Bot model name is required")]
    MissingName,

    /// The bot model description is empty.
    #[error("Description is required")]
    MissingDescription,

    /// A slug contains characters outside `[a-z0-9-]` or is empty.
    #[error("Slug must be lowercase with hyphens")]
    InvalidSlug(String),

    /// The niche name is empty.
    #[error("Niche name is required")]
    MissingNicheName,

    /// The technical specification platform is empty.
    #[error("Platform is required")]
    MissingPlatform,

    /// The response time is zero or negative.
    #[error("Response time must be positive, got {0}")]
    NonPositiveResponseTime(f64),

    /// The uptime percentage is outside `0..=100`.
    #[error("Uptime must be between 0 and 100, got {0}")]
    UptimeOutOfRange(f64),

    /// The estimated development time is zero or negative.
    #[error("Estimated development time must be positive, got {0}")]
    NonPositiveDevelopmentTime(f64),

    /// A rename would leave the bot model without a name.
    #[error("Bot model name cannot be empty")]
    EmptyName,

    /// A description change would leave the bot model without one.
    #[error("Description cannot be empty")]
    EmptyDescription,

    /// An empty key feature was supplied.
    #[error("Feature cannot be empty")]
    EmptyFeature,

    /// An empty use case was supplied.
    #[error("Use case cannot be empty")]
    EmptyUseCase,

    /// An empty tag was supplied.
    #[error("Tag cannot be empty")]
    EmptyTag,

    /// Activation was requested for a model without key features.
    #[error("Cannot activate bot model without key features")]
    ActivationWithoutFeatures,

    /// Activation was requested for a model without use cases.
    #[error("Cannot activate bot model without use cases")]
    ActivationWithoutUseCases,

    /// A change would leave an active model without key features.
    #[error("Active bot model must have at least one key feature")]
    ActiveWithoutFeatures,

    /// A change would leave an active model without use cases.
    #[error("Active bot model must have at least one use case")]
    ActiveWithoutUseCases,
}

/// Error returned while parsing a bot model enum from its string form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ParseEnumError {
    pub(super) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }

    /// Returns the rejected input.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}
