//! Process-wide default registry and its free-function surface.
//!
//! The default registry is last-writer-wins shared state. Code that runs
//! concurrently and needs isolation should hold its own [`PortRegistry`].

use super::{Adapter, MissingPortBinding, Port, PortRegistry};
use std::sync::LazyLock;

static DEFAULT_REGISTRY: LazyLock<PortRegistry> = LazyLock::new(PortRegistry::new);

/// Returns the process-wide default registry.
#[must_use]
pub fn default_registry() -> &'static PortRegistry {
    &DEFAULT_REGISTRY
}

/// Allocates a fresh port identity.
#[must_use]
pub fn create_port<I, O>() -> Port<I, O> {
    Port::new()
}

/// Binds `adapter` to `port` in the default registry.
pub fn set_port_adapter<I, O>(port: &Port<I, O>, adapter: Adapter<I, O>)
where
    I: Send + 'static,
    O: Send + 'static,
{
    DEFAULT_REGISTRY.bind(port, adapter);
}

/// Resolves the adapter bound to `port` in the default registry.
///
/// # Errors
///
/// Returns [`MissingPortBinding`] when no adapter is bound.
pub fn use_port<I, O>(port: &Port<I, O>) -> Result<Adapter<I, O>, MissingPortBinding>
where
    I: Send + 'static,
    O: Send + 'static,
{
    DEFAULT_REGISTRY.resolve(port)
}

/// Clears every binding in the default registry.
pub fn reset_di() {
    DEFAULT_REGISTRY.reset();
}
