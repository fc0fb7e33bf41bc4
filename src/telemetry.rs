//! Tracing subscriber configuration.
//!
//! The library only emits `tracing` events; binaries and tests decide where
//! they go. [`init_tracing`] installs a registry with an [`EnvFilter`] and a
//! human-readable or JSON formatter chosen by [`TracingConfig`].
//!
//! ```no_run
//! use portwire::telemetry::{TracingConfig, init_tracing};
//!
//! let config = TracingConfig::from_env()?;
//! init_tracing(&config)?;
//! # Ok::<(), portwire::telemetry::TelemetryError>(())
//! ```

use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Environment variable holding the filter directives.
pub const LOG_FILTER_ENV: &str = "PORTWIRE_LOG";

/// Environment variable selecting the output format.
pub const LOG_FORMAT_ENV: &str = "PORTWIRE_LOG_FORMAT";

const FALLBACK_FILTER_ENV: &str = "RUST_LOG";
const DEFAULT_FILTER: &str = "info";

/// Errors raised while configuring or installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The requested output format is not supported.
    #[error("unsupported log format `{0}`; expected `pretty` or `json`")]
    InvalidFormat(String),
    /// The filter directives could not be parsed.
    #[error("invalid log filter: {0}")]
    InvalidFilter(#[from] ParseError),
    /// A global subscriber is already installed.
    #[error("tracing subscriber already installed: {0}")]
    AlreadyInstalled(#[from] TryInitError),
}

/// Output format of the fmt layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line human-readable output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Returns the configuration name of the format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogFormat {
    type Err = TelemetryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(TelemetryError::InvalidFormat(value.to_owned())),
        }
    }
}

/// Subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    filter: String,
    format: LogFormat,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_owned(),
            format: LogFormat::default(),
        }
    }
}

impl TracingConfig {
    /// Replaces the filter directives.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Replaces the output format.
    #[must_use]
    pub const fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Returns the filter directives.
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Returns the output format.
    #[must_use]
    pub const fn format(&self) -> LogFormat {
        self.format
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::InvalidFormat`] when
    /// [`LOG_FORMAT_ENV`] names an unsupported format.
    pub fn from_env() -> Result<Self, TelemetryError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`.
    ///
    /// Filter directives come from [`LOG_FILTER_ENV`], then `RUST_LOG`, then
    /// `info`. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::InvalidFormat`] when
    /// [`LOG_FORMAT_ENV`] names an unsupported format.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TelemetryError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let filter = present(LOG_FILTER_ENV)
            .or_else(|| present(FALLBACK_FILTER_ENV))
            .unwrap_or_else(|| DEFAULT_FILTER.to_owned());
        let format = present(LOG_FORMAT_ENV)
            .map(|raw| raw.parse())
            .transpose()?
            .unwrap_or_default();
        Ok(Self { filter, format })
    }
}

/// Installs the global tracing subscriber described by `config`.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] when the filter directives do
/// not parse and [`TelemetryError::AlreadyInstalled`] when another
/// subscriber is already global.
pub fn init_tracing(config: &TracingConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(config.filter())?;
    let registry = tracing_subscriber::registry().with(filter);
    match config.format() {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()?,
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?,
    }
    tracing::debug!(filter = config.filter(), format = %config.format(), "tracing initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |key| env.get(key).cloned()
    }

    #[rstest]
    #[case(&[], "info", LogFormat::Pretty)]
    #[case(&[("RUST_LOG", "warn")], "warn", LogFormat::Pretty)]
    #[case(&[("RUST_LOG", "warn"), ("PORTWIRE_LOG", "portwire=trace")], "portwire=trace", LogFormat::Pretty)]
    #[case(&[("PORTWIRE_LOG", "  "), ("RUST_LOG", "error")], "error", LogFormat::Pretty)]
    #[case(&[("PORTWIRE_LOG_FORMAT", "JSON")], "info", LogFormat::Json)]
    #[case(&[("PORTWIRE_LOG_FORMAT", "")], "info", LogFormat::Pretty)]
    fn lookup_resolves_filter_and_format(
        #[case] pairs: &[(&str, &str)],
        #[case] filter: &str,
        #[case] format: LogFormat,
    ) {
        let config = TracingConfig::from_lookup(lookup_from(pairs)).expect("valid configuration");

        assert_eq!(config.filter(), filter);
        assert_eq!(config.format(), format);
    }

    #[rstest]
    fn unsupported_format_is_rejected() {
        let err = TracingConfig::from_lookup(lookup_from(&[("PORTWIRE_LOG_FORMAT", "xml")]))
            .expect_err("xml is not a supported format");

        assert!(matches!(err, TelemetryError::InvalidFormat(ref raw) if raw == "xml"));
    }

    #[rstest]
    fn invalid_filter_is_rejected_before_installing() {
        let config = TracingConfig::default().with_filter("portwire=loud");

        assert!(matches!(
            init_tracing(&config),
            Err(TelemetryError::InvalidFilter(_))
        ));
    }

    #[rstest]
    fn second_installation_is_reported() {
        let config = TracingConfig::default()
            .with_filter("portwire=debug")
            .with_format(LogFormat::Json);

        init_tracing(&config).expect("first installation succeeds");

        assert!(matches!(
            init_tracing(&config),
            Err(TelemetryError::AlreadyInstalled(_))
        ));
    }
}
