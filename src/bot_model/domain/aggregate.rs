//! Bot model aggregate root.

use super::{
    BotModelDomainError, BotModelId, BotModelStatus, Niche, PricingModel, Slug,
    TechnicalSpecification,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Bot model aggregate root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotModel {
    id: BotModelId,
    name: String,
    description: String,
    slug: Slug,
    niche: Niche,
    technical_specification: TechnicalSpecification,
    target_audience: Option<String>,
    key_features: Vec<String>,
    use_cases: Vec<String>,
    pricing_model: PricingModel,
    status: BotModelStatus,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for creating a draft bot model.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBotModel {
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// URL slug.
    pub slug: Slug,
    /// Market niche.
    pub niche: Niche,
    /// Technical specification.
    pub technical_specification: TechnicalSpecification,
    /// Intended audience, if known.
    pub target_audience: Option<String>,
    /// Key features in presentation order.
    pub key_features: Vec<String>,
    /// Supported use cases.
    pub use_cases: Vec<String>,
    /// Pricing model.
    pub pricing_model: PricingModel,
    /// Catalogue tags.
    pub tags: Vec<String>,
}

impl BotModel {
    /// Creates a draft bot model with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BotModelDomainError::MissingName`] or
    /// [`BotModelDomainError::MissingDescription`] when either text field is
    /// empty.
    pub fn new(data: NewBotModel, clock: &impl Clock) -> Result<Self, BotModelDomainError> {
        if data.name.is_empty() {
            return Err(BotModelDomainError::MissingName);
        }
        if data.description.is_empty() {
            return Err(BotModelDomainError::MissingDescription);
        }

        let timestamp = clock.utc();
        Ok(Self {
            id: BotModelId::new(),
            name: data.name,
            description: data.description,
            slug: data.slug,
            niche: data.niche,
            technical_specification: data.technical_specification,
            target_audience: data.target_audience,
            key_features: data.key_features,
            use_cases: data.use_cases,
            pricing_model: data.pricing_model,
            status: BotModelStatus::Draft,
            tags: data.tags,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the bot model identifier.
    #[must_use]
    pub const fn id(&self) -> BotModelId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the slug.
    #[must_use]
    pub const fn slug(&self) -> &Slug {
        &self.slug
    }

    /// Returns the market niche.
    #[must_use]
    pub const fn niche(&self) -> &Niche {
        &self.niche
    }

    /// Returns the technical specification.
    #[must_use]
    pub const fn technical_specification(&self) -> &TechnicalSpecification {
        &self.technical_specification
    }

    /// Returns the target audience, if any.
    #[must_use]
    pub fn target_audience(&self) -> Option<&str> {
        self.target_audience.as_deref()
    }

    /// Returns the key features.
    #[must_use]
    pub fn key_features(&self) -> &[String] {
        &self.key_features
    }

    /// Returns the use cases.
    #[must_use]
    pub fn use_cases(&self) -> &[String] {
        &self.use_cases
    }

    /// Returns the pricing model.
    #[must_use]
    pub const fn pricing_model(&self) -> PricingModel {
        self.pricing_model
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> BotModelStatus {
        self.status
    }

    /// Returns the catalogue tags.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the latest successful action.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns whether the model is offered to customers.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, BotModelStatus::Active)
    }

    /// Returns whether the model is still a draft.
    #[must_use]
    pub const fn is_draft(&self) -> bool {
        matches!(self.status, BotModelStatus::Draft)
    }

    /// Returns whether the model has been withdrawn.
    #[must_use]
    pub const fn is_archived(&self) -> bool {
        matches!(self.status, BotModelStatus::Archived)
    }

    /// Returns the number of key features.
    #[must_use]
    pub const fn feature_count(&self) -> usize {
        self.key_features.len()
    }

    /// Returns the number of use cases.
    #[must_use]
    pub const fn use_case_count(&self) -> usize {
        self.use_cases.len()
    }

    /// Renames the model.
    ///
    /// # Errors
    ///
    /// Returns [`BotModelDomainError::EmptyName`] when `name` is empty.
    pub fn update_name(
        &mut self,
        name: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), BotModelDomainError> {
        let new_name = name.into();
        if new_name.is_empty() {
            return Err(BotModelDomainError::EmptyName);
        }
        self.mutate(clock, |model| {
            model.name = new_name;
            Ok(())
        })
    }

    /// Replaces the description.
    ///
    /// # Errors
    ///
    /// Returns [`BotModelDomainError::EmptyDescription`] when `description`
    /// is empty.
    pub fn update_description(
        &mut self,
        description: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), BotModelDomainError> {
        let new_description = description.into();
        if new_description.is_empty() {
            return Err(BotModelDomainError::EmptyDescription);
        }
        self.mutate(clock, |model| {
            model.description = new_description;
            Ok(())
        })
    }

    /// Moves the model to another niche.
    pub fn update_niche(&mut self, niche: Niche, clock: &impl Clock) {
        self.niche = niche;
        self.touch(clock);
    }

    /// Replaces the technical specification.
    pub fn update_technical_specification(
        &mut self,
        specification: TechnicalSpecification,
        clock: &impl Clock,
    ) {
        self.technical_specification = specification;
        self.touch(clock);
    }

    /// Appends a key feature.
    ///
    /// # Errors
    ///
    /// Returns [`BotModelDomainError::EmptyFeature`] when `feature` is empty.
    pub fn add_feature(
        &mut self,
        feature: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), BotModelDomainError> {
        let new_feature = feature.into();
        if new_feature.is_empty() {
            return Err(BotModelDomainError::EmptyFeature);
        }
        self.mutate(clock, |model| {
            model.key_features.push(new_feature);
            Ok(())
        })
    }

    /// Removes every occurrence of `feature`.
    ///
    /// # Errors
    ///
    /// Returns [`BotModelDomainError::ActiveWithoutFeatures`] when the
    /// removal would leave an active model without key features.
    pub fn remove_feature(
        &mut self,
        feature: &str,
        clock: &impl Clock,
    ) -> Result<(), BotModelDomainError> {
        self.mutate(clock, |model| {
            model.key_features.retain(|existing| existing != feature);
            Ok(())
        })
    }

    /// Appends a use case.
    ///
    /// # Errors
    ///
    /// Returns [`BotModelDomainError::EmptyUseCase`] when `use_case` is
    /// empty.
    pub fn add_use_case(
        &mut self,
        use_case: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), BotModelDomainError> {
        let new_use_case = use_case.into();
        if new_use_case.is_empty() {
            return Err(BotModelDomainError::EmptyUseCase);
        }
        self.mutate(clock, |model| {
            model.use_cases.push(new_use_case);
            Ok(())
        })
    }

    /// Removes every occurrence of `use_case`.
    ///
    /// # Errors
    ///
    /// Returns [`BotModelDomainError::ActiveWithoutUseCases`] when the
    /// removal would leave an active model without use cases.
    pub fn remove_use_case(
        &mut self,
        use_case: &str,
        clock: &impl Clock,
    ) -> Result<(), BotModelDomainError> {
        self.mutate(clock, |model| {
            model.use_cases.retain(|existing| existing != use_case);
            Ok(())
        })
    }

    /// Offers the model to customers.
    ///
    /// # Errors
    ///
    /// Returns [`BotModelDomainError::ActivationWithoutFeatures`] or
    /// [`BotModelDomainError::ActivationWithoutUseCases`] when the model is
    /// not ready to be offered.
    pub fn activate(&mut self, clock: &impl Clock) -> Result<(), BotModelDomainError> {
        if self.key_features.is_empty() {
            return Err(BotModelDomainError::ActivationWithoutFeatures);
        }
        if self.use_cases.is_empty() {
            return Err(BotModelDomainError::ActivationWithoutUseCases);
        }
        self.mutate(clock, |model| {
            model.status = BotModelStatus::Active;
            Ok(())
        })
    }

    /// Withdraws the model from the catalogue.
    pub fn archive(&mut self, clock: &impl Clock) {
        self.status = BotModelStatus::Archived;
        self.touch(clock);
    }

    /// Adds a tag unless it is already present.
    ///
    /// A duplicate tag leaves the model untouched, including `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`BotModelDomainError::EmptyTag`] when `tag` is empty.
    pub fn add_tag(
        &mut self,
        tag: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), BotModelDomainError> {
        let new_tag = tag.into();
        if new_tag.is_empty() {
            return Err(BotModelDomainError::EmptyTag);
        }
        if self.tags.contains(&new_tag) {
            return Ok(());
        }
        self.mutate(clock, |model| {
            model.tags.push(new_tag);
            Ok(())
        })
    }

    /// Removes `tag` if present.
    pub fn remove_tag(&mut self, tag: &str, clock: &impl Clock) {
        self.tags.retain(|existing| existing != tag);
        self.touch(clock);
    }

    /// Applies `change` to a copy and commits it only if every invariant
    /// still holds.
    fn mutate<F>(&mut self, clock: &impl Clock, change: F) -> Result<(), BotModelDomainError>
    where
        F: FnOnce(&mut Self) -> Result<(), BotModelDomainError>,
    {
        let mut next = self.clone();
        change(&mut next)?;
        next.check_invariants()?;
        next.touch(clock);
        *self = next;
        Ok(())
    }

    fn check_invariants(&self) -> Result<(), BotModelDomainError> {
        if !self.is_active() {
            return Ok(());
        }
        if self.key_features.is_empty() {
            return Err(BotModelDomainError::ActiveWithoutFeatures);
        }
        if self.use_cases.is_empty() {
            return Err(BotModelDomainError::ActiveWithoutUseCases);
        }
        Ok(())
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
