//! Technical specification value object.

use super::{BotModelDomainError, ParseEnumError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Expected scalability class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scalability {
    /// Small deployments.
    Low,
    /// Moderate load.
    Medium,
    /// Heavy load.
    High,
}

impl Scalability {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Scalability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Scalability {
    type Error = ParseEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseEnumError::new("scalability", value)),
        }
    }
}

/// Operational targets for a bot model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    response_time: Option<f64>,
    uptime: Option<f64>,
    scalability: Option<Scalability>,
}

impl PerformanceMetrics {
    /// Creates metrics with no targets set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            response_time: None,
            uptime: None,
            scalability: None,
        }
    }

    /// Sets the response time target in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`BotModelDomainError::NonPositiveResponseTime`] unless the
    /// value is greater than zero.
    pub fn with_response_time(mut self, millis: f64) -> Result<Self, BotModelDomainError> {
        if millis <= 0.0 || millis.is_nan() {
            return Err(BotModelDomainError::NonPositiveResponseTime(millis));
        }
        self.response_time = Some(millis);
        Ok(self)
    }

    /// Sets the uptime target as a percentage.
    ///
    /// # Errors
    ///
    /// Returns [`BotModelDomainError::UptimeOutOfRange`] unless the value is
    /// within `0..=100`.
    pub fn with_uptime(mut self, percent: f64) -> Result<Self, BotModelDomainError> {
        if !(0.0..=100.0).contains(&percent) {
            return Err(BotModelDomainError::UptimeOutOfRange(percent));
        }
        self.uptime = Some(percent);
        Ok(self)
    }

    /// Sets the scalability class.
    #[must_use]
    pub const fn with_scalability(mut self, scalability: Scalability) -> Self {
        self.scalability = Some(scalability);
        self
    }

    /// Returns the response time target, if any.
    #[must_use]
    pub const fn response_time(&self) -> Option<f64> {
        self.response_time
    }

    /// Returns the uptime target, if any.
    #[must_use]
    pub const fn uptime(&self) -> Option<f64> {
        self.uptime
    }

    /// Returns the scalability class, if any.
    #[must_use]
    pub const fn scalability(&self) -> Option<Scalability> {
        self.scalability
    }
}

/// How a bot model is built and operated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalSpecification {
    platform: String,
    technology_stack: Vec<String>,
    integration_points: Vec<String>,
    performance_metrics: Option<PerformanceMetrics>,
    security_features: Vec<String>,
    compliance: Vec<String>,
    estimated_development_time: Option<f64>,
    maintenance_requirements: Option<String>,
}

impl TechnicalSpecification {
    /// Creates a specification for `platform` with every list empty.
    ///
    /// # Errors
    ///
    /// Returns [`BotModelDomainError::MissingPlatform`] when `platform` is
    /// empty.
    pub fn new(platform: impl Into<String>) -> Result<Self, BotModelDomainError> {
        let platform_name = platform.into();
        if platform_name.is_empty() {
            return Err(BotModelDomainError::MissingPlatform);
        }
        Ok(Self {
            platform: platform_name,
            technology_stack: Vec::new(),
            integration_points: Vec::new(),
            performance_metrics: None,
            security_features: Vec::new(),
            compliance: Vec::new(),
            estimated_development_time: None,
            maintenance_requirements: None,
        })
    }

    /// Sets the technology stack.
    #[must_use]
    pub fn with_technology_stack(mut self, stack: impl IntoIterator<Item = String>) -> Self {
        self.technology_stack = stack.into_iter().collect();
        self
    }

    /// Sets the integration points.
    #[must_use]
    pub fn with_integration_points(mut self, points: impl IntoIterator<Item = String>) -> Self {
        self.integration_points = points.into_iter().collect();
        self
    }

    /// Sets the performance targets.
    #[must_use]
    pub const fn with_performance_metrics(mut self, metrics: PerformanceMetrics) -> Self {
        self.performance_metrics = Some(metrics);
        self
    }

    /// Sets the security features.
    #[must_use]
    pub fn with_security_features(mut self, features: impl IntoIterator<Item = String>) -> Self {
        self.security_features = features.into_iter().collect();
        self
    }

    /// Sets the compliance regimes.
    #[must_use]
    pub fn with_compliance(mut self, regimes: impl IntoIterator<Item = String>) -> Self {
        self.compliance = regimes.into_iter().collect();
        self
    }

    /// Sets the estimated development time in hours.
    ///
    /// # Errors
    ///
    /// Returns [`BotModelDomainError::NonPositiveDevelopmentTime`] unless the
    /// value is greater than zero.
    pub fn with_estimated_development_time(
        mut self,
        hours: f64,
    ) -> Result<Self, BotModelDomainError> {
        if hours <= 0.0 || hours.is_nan() {
            return Err(BotModelDomainError::NonPositiveDevelopmentTime(hours));
        }
        self.estimated_development_time = Some(hours);
        Ok(self)
    }

    /// Sets the maintenance requirements.
    #[must_use]
    pub fn with_maintenance_requirements(mut self, requirements: impl Into<String>) -> Self {
        self.maintenance_requirements = Some(requirements.into());
        self
    }

    /// Returns the platform.
    #[must_use]
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Returns the technology stack.
    #[must_use]
    pub fn technology_stack(&self) -> &[String] {
        &self.technology_stack
    }

    /// Returns the integration points.
    #[must_use]
    pub fn integration_points(&self) -> &[String] {
        &self.integration_points
    }

    /// Returns the performance targets, if any.
    #[must_use]
    pub const fn performance_metrics(&self) -> Option<&PerformanceMetrics> {
        self.performance_metrics.as_ref()
    }

    /// Returns the security features.
    #[must_use]
    pub fn security_features(&self) -> &[String] {
        &self.security_features
    }

    /// Returns the compliance regimes.
    #[must_use]
    pub fn compliance(&self) -> &[String] {
        &self.compliance
    }

    /// Returns the estimated development time, if any.
    #[must_use]
    pub const fn estimated_development_time(&self) -> Option<f64> {
        self.estimated_development_time
    }

    /// Returns the maintenance requirements, if any.
    #[must_use]
    pub fn maintenance_requirements(&self) -> Option<&str> {
        self.maintenance_requirements.as_deref()
    }
}
