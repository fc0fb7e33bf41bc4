//! Use cases storing a bot model through its ports.
//!
//! Both use cases validate raw JSON input first. Rejected input is reported
//! to the validation-failed port and the call still succeeds; only wiring
//! and adapter failures surface as [`StoreBotModelError`].

use crate::bot_model::{
    domain::{
        BotModel, BotModelDomainError, NewBotModel, Niche, PerformanceMetrics, Slug,
        TechnicalSpecification,
    },
    ports::{
        BotModelStoredOutput, BotModelValidationFailedOutput, NicheDto, PerformanceMetricsDto,
        StoreBotModelDto, TechnicalSpecificationDto, bot_model_stored_port,
        bot_model_validation_failed_port, store_bot_model_port,
    },
    validation::{STORE_BOT_MODEL_OPERATION, simple_store_bot_model_schema, store_bot_model_schema},
};
use crate::di::{MissingPortBinding, PortError, PortRegistry, default_registry};
use crate::schema::{ObjectSchema, SchemaError};
use mockable::Clock;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors surfaced by the store use cases.
///
/// Rejected input is not an error; it is reported through the
/// validation-failed port instead.
#[derive(Debug, Error)]
pub enum StoreBotModelError {
    /// A port the use case needs has no adapter bound.
    #[error(transparent)]
    MissingBinding(#[from] MissingPortBinding),
    /// An adapter failed or panicked.
    #[error(transparent)]
    Port(#[from] PortError),
    /// Validated input did not fit the store payload.
    #[error("validated bot model input could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for the store use cases.
pub type StoreBotModelResult<T> = Result<T, StoreBotModelError>;

/// Outcome of validating raw input.
enum Admission<T> {
    Accepted(T),
    Rejected(Vec<String>),
}

/// Bot model storage orchestration service.
#[derive(Clone)]
pub struct StoreBotModelService<C>
where
    C: Clock + Send + Sync,
{
    registry: PortRegistry,
    clock: Arc<C>,
}

impl<C> StoreBotModelService<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a service resolving ports from `registry`.
    #[must_use]
    pub const fn new(registry: PortRegistry, clock: Arc<C>) -> Self {
        Self { registry, clock }
    }

    /// Creates a service resolving ports from the process-wide default
    /// registry.
    #[must_use]
    pub fn with_default_registry(clock: Arc<C>) -> Self {
        Self::new(default_registry().clone(), clock)
    }

    /// Returns the registry ports are resolved from.
    #[must_use]
    pub const fn registry(&self) -> &PortRegistry {
        &self.registry
    }

    /// Validates `input`, builds the bot model aggregate and stores it.
    ///
    /// Schema violations and domain rule failures are reported to the
    /// validation-failed port. Otherwise the store port receives the
    /// normalized record and the stored port is notified with the store's
    /// identifier, the model name and the niche name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreBotModelError`] when a required port is unbound or an
    /// adapter fails.
    #[tracing::instrument(name = "store_bot_model", skip_all, fields(operation = STORE_BOT_MODEL_OPERATION))]
    pub async fn store(&self, input: &Value) -> StoreBotModelResult<()> {
        let dto = match admit(store_bot_model_schema(), input)? {
            Admission::Accepted(dto) => dto,
            Admission::Rejected(errors) => return self.reject(errors).await,
        };
        let model = match build_bot_model(dto, &*self.clock) {
            Ok(model) => model,
            Err(err) => return self.reject(vec![err.to_string()]).await,
        };

        let store = store_bot_model_port().resolve_in(&self.registry)?;
        let stored_out = bot_model_stored_port().resolve_in(&self.registry)?;

        let stored = store.call(StoreBotModelDto::from(&model)).await?;
        info!(
            id = %stored.id,
            name = model.name(),
            niche = model.niche().name(),
            "bot model stored"
        );
        stored_out
            .call(BotModelStoredOutput {
                id: stored.id,
                name: model.name().to_owned(),
                niche: model.niche().name().to_owned(),
            })
            .await?;
        Ok(())
    }

    /// Validates `input` against the reduced schema and stores it as is.
    ///
    /// # Errors
    ///
    /// Returns [`StoreBotModelError`] when a required port is unbound or an
    /// adapter fails.
    #[tracing::instrument(name = "store_bot_model_simple", skip_all, fields(operation = STORE_BOT_MODEL_OPERATION))]
    pub async fn store_simple(&self, input: &Value) -> StoreBotModelResult<()> {
        let dto: StoreBotModelDto = match admit(simple_store_bot_model_schema(), input)? {
            Admission::Accepted(dto) => dto,
            Admission::Rejected(errors) => return self.reject(errors).await,
        };

        let store = store_bot_model_port().resolve_in(&self.registry)?;
        let stored_out = bot_model_stored_port().resolve_in(&self.registry)?;

        let name = dto.name.clone();
        let niche = dto.niche.name.clone();
        let stored = store.call(dto).await?;
        info!(id = %stored.id, name = %name, niche = %niche, "bot model stored");
        stored_out
            .call(BotModelStoredOutput {
                id: stored.id,
                name,
                niche,
            })
            .await?;
        Ok(())
    }

    async fn reject(&self, errors: Vec<String>) -> StoreBotModelResult<()> {
        warn!(?errors, "bot model input rejected");
        let failed = bot_model_validation_failed_port().resolve_in(&self.registry)?;
        failed
            .call(BotModelValidationFailedOutput {
                errors,
                operation: STORE_BOT_MODEL_OPERATION.to_owned(),
            })
            .await?;
        Ok(())
    }
}

fn admit(schema: &ObjectSchema, input: &Value) -> StoreBotModelResult<Admission<StoreBotModelDto>> {
    match schema.parse(input) {
        Ok(dto) => Ok(Admission::Accepted(dto)),
        Err(SchemaError::Invalid(violations)) => {
            Ok(Admission::Rejected(violations.into_messages()))
        }
        Err(SchemaError::Decode(err)) => Err(err.into()),
    }
}

fn build_bot_model(
    dto: StoreBotModelDto,
    clock: &impl Clock,
) -> Result<BotModel, BotModelDomainError> {
    let StoreBotModelDto {
        name,
        description,
        slug,
        niche,
        technical_specification,
        target_audience,
        key_features,
        use_cases,
        pricing_model,
        tags,
    } = dto;

    BotModel::new(
        NewBotModel {
            name,
            description,
            slug: Slug::new(slug)?,
            niche: build_niche(niche, clock)?,
            technical_specification: build_technical_specification(technical_specification)?,
            target_audience,
            key_features,
            use_cases,
            pricing_model,
            tags,
        },
        clock,
    )
}

fn build_niche(dto: NicheDto, clock: &impl Clock) -> Result<Niche, BotModelDomainError> {
    let mut niche = Niche::new(dto.name, Slug::new(dto.slug)?, clock)?
        .with_common_use_cases(dto.common_use_cases)
        .with_active(dto.is_active);
    if let Some(description) = dto.description {
        niche = niche.with_description(description);
    }
    if let Some(audience) = dto.target_audience {
        niche = niche.with_target_audience(audience);
    }
    if let Some(created_at) = dto.created_at {
        niche = niche.with_created_at(created_at);
    }
    Ok(niche)
}

fn build_technical_specification(
    dto: TechnicalSpecificationDto,
) -> Result<TechnicalSpecification, BotModelDomainError> {
    let mut spec = TechnicalSpecification::new(dto.platform)?
        .with_technology_stack(dto.technology_stack)
        .with_integration_points(dto.integration_points)
        .with_security_features(dto.security_features)
        .with_compliance(dto.compliance);
    if let Some(metrics) = dto.performance_metrics {
        spec = spec.with_performance_metrics(build_performance_metrics(metrics)?);
    }
    if let Some(hours) = dto.estimated_development_time {
        spec = spec.with_estimated_development_time(hours)?;
    }
    if let Some(requirements) = dto.maintenance_requirements {
        spec = spec.with_maintenance_requirements(requirements);
    }
    Ok(spec)
}

fn build_performance_metrics(
    dto: PerformanceMetricsDto,
) -> Result<PerformanceMetrics, BotModelDomainError> {
    let mut metrics = PerformanceMetrics::new();
    if let Some(millis) = dto.response_time {
        metrics = metrics.with_response_time(millis)?;
    }
    if let Some(percent) = dto.uptime {
        metrics = metrics.with_uptime(percent)?;
    }
    if let Some(scalability) = dto.scalability {
        metrics = metrics.with_scalability(scalability);
    }
    Ok(metrics)
}
