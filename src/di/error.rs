//! Resolver failure for unbound ports.

use super::PortId;
use thiserror::Error;

/// No adapter is bound to the requested port.
///
/// This signals a wiring mistake rather than a domain failure, so the
/// message is fixed and carries no per-port detail. The port identity is
/// available through [`MissingPortBinding::port`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("No implementation found for the port")]
pub struct MissingPortBinding {
    port: PortId,
    label: Option<&'static str>,
}

impl MissingPortBinding {
    /// Creates the error for the given port identity.
    #[must_use]
    pub const fn new(port: PortId, label: Option<&'static str>) -> Self {
        Self { port, label }
    }

    /// Returns the identity of the unbound port.
    #[must_use]
    pub const fn port(&self) -> PortId {
        self.port
    }

    /// Returns the diagnostic label of the unbound port, if any.
    #[must_use]
    pub const fn label(&self) -> Option<&'static str> {
        self.label
    }
}
