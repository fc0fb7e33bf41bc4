//! Market niche value object.

use super::{BotModelDomainError, Slug};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Market segment a bot model is built for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Niche {
    name: String,
    slug: Slug,
    description: Option<String>,
    target_audience: Option<String>,
    common_use_cases: Vec<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Niche {
    /// Creates an active niche stamped with the current clock time.
    ///
    /// # Errors
    ///
    /// Returns [`BotModelDomainError::MissingNicheName`] when `name` is
    /// empty.
    pub fn new(
        name: impl Into<String>,
        slug: Slug,
        clock: &impl Clock,
    ) -> Result<Self, BotModelDomainError> {
        let niche_name = name.into();
        if niche_name.is_empty() {
            return Err(BotModelDomainError::MissingNicheName);
        }
        Ok(Self {
            name: niche_name,
            slug,
            description: None,
            target_audience: None,
            common_use_cases: Vec::new(),
            is_active: true,
            created_at: clock.utc(),
        })
    }

    /// Sets the free-text description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the audience the niche addresses.
    #[must_use]
    pub fn with_target_audience(mut self, audience: impl Into<String>) -> Self {
        self.target_audience = Some(audience.into());
        self
    }

    /// Sets the use cases common to the niche.
    #[must_use]
    pub fn with_common_use_cases(mut self, use_cases: impl IntoIterator<Item = String>) -> Self {
        self.common_use_cases = use_cases.into_iter().collect();
        self
    }

    /// Sets whether the niche is active.
    #[must_use]
    pub const fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Overrides the creation timestamp.
    #[must_use]
    pub const fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Returns the niche name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the niche slug.
    #[must_use]
    pub const fn slug(&self) -> &Slug {
        &self.slug
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the target audience, if any.
    #[must_use]
    pub fn target_audience(&self) -> Option<&str> {
        self.target_audience.as_deref()
    }

    /// Returns the common use cases.
    #[must_use]
    pub fn common_use_cases(&self) -> &[String] {
        &self.common_use_cases
    }

    /// Returns whether the niche is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
