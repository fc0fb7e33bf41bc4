//! Payload types exchanged with bot model adapters.
//!
//! Field names serialize in camelCase so adapters can forward payloads to
//! JSON consumers unchanged.

use crate::bot_model::domain::{
    BotModel, Niche, PerformanceMetrics, PricingModel, Scalability, TechnicalSpecification,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

/// Bot model record handed to the store adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreBotModelDto {
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// URL slug.
    pub slug: String,
    /// Market niche.
    pub niche: NicheDto,
    /// Technical specification.
    pub technical_specification: TechnicalSpecificationDto,
    /// Intended audience.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    /// Key features.
    #[serde(default)]
    pub key_features: Vec<String>,
    /// Supported use cases.
    #[serde(default)]
    pub use_cases: Vec<String>,
    /// Pricing model.
    #[serde(default)]
    pub pricing_model: PricingModel,
    /// Catalogue tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Niche section of [`StoreBotModelDto`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NicheDto {
    /// Niche name.
    pub name: String,
    /// Niche slug.
    pub slug: String,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Audience the niche addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    /// Use cases common to the niche.
    #[serde(default)]
    pub common_use_cases: Vec<String>,
    /// Whether the niche is active.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Technical specification section of [`StoreBotModelDto`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalSpecificationDto {
    /// Target platform.
    pub platform: String,
    /// Technology stack.
    #[serde(default)]
    pub technology_stack: Vec<String>,
    /// Integration points.
    #[serde(default)]
    pub integration_points: Vec<String>,
    /// Performance targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_metrics: Option<PerformanceMetricsDto>,
    /// Security features.
    #[serde(default)]
    pub security_features: Vec<String>,
    /// Compliance regimes.
    #[serde(default)]
    pub compliance: Vec<String>,
    /// Estimated development time in hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_development_time: Option<f64>,
    /// Maintenance requirements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_requirements: Option<String>,
}

/// Performance section of [`TechnicalSpecificationDto`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetricsDto {
    /// Response time in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time: Option<f64>,
    /// Uptime percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime: Option<f64>,
    /// Scalability class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scalability: Option<Scalability>,
}

/// Result returned by the store adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredBotModel {
    /// Identifier assigned by the store.
    pub id: String,
}

impl StoredBotModel {
    /// Creates a store result.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Notification sent after a bot model is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotModelStoredOutput {
    /// Identifier assigned by the store.
    pub id: String,
    /// Bot model name.
    pub name: String,
    /// Niche name.
    pub niche: String,
}

/// Notification sent when input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotModelValidationFailedOutput {
    /// Violation messages in the order they were detected.
    pub errors: Vec<String>,
    /// Operation that rejected the input.
    pub operation: String,
}

impl From<&Niche> for NicheDto {
    fn from(niche: &Niche) -> Self {
        Self {
            name: niche.name().to_owned(),
            slug: niche.slug().as_str().to_owned(),
            description: niche.description().map(str::to_owned),
            target_audience: niche.target_audience().map(str::to_owned),
            common_use_cases: niche.common_use_cases().to_vec(),
            is_active: niche.is_active(),
            created_at: Some(niche.created_at()),
        }
    }
}

impl From<&PerformanceMetrics> for PerformanceMetricsDto {
    fn from(metrics: &PerformanceMetrics) -> Self {
        Self {
            response_time: metrics.response_time(),
            uptime: metrics.uptime(),
            scalability: metrics.scalability(),
        }
    }
}

impl From<&TechnicalSpecification> for TechnicalSpecificationDto {
    fn from(spec: &TechnicalSpecification) -> Self {
        Self {
            platform: spec.platform().to_owned(),
            technology_stack: spec.technology_stack().to_vec(),
            integration_points: spec.integration_points().to_vec(),
            performance_metrics: spec.performance_metrics().map(PerformanceMetricsDto::from),
            security_features: spec.security_features().to_vec(),
            compliance: spec.compliance().to_vec(),
            estimated_development_time: spec.estimated_development_time(),
            maintenance_requirements: spec.maintenance_requirements().map(str::to_owned),
        }
    }
}

impl From<&BotModel> for StoreBotModelDto {
    fn from(model: &BotModel) -> Self {
        Self {
            name: model.name().to_owned(),
            description: model.description().to_owned(),
            slug: model.slug().as_str().to_owned(),
            niche: NicheDto::from(model.niche()),
            technical_specification: TechnicalSpecificationDto::from(
                model.technical_specification(),
            ),
            target_audience: model.target_audience().map(str::to_owned),
            key_features: model.key_features().to_vec(),
            use_cases: model.use_cases().to_vec(),
            pricing_model: model.pricing_model(),
            tags: model.tags().to_vec(),
        }
    }
}
