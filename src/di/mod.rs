//! Port and adapter wiring runtime.
//!
//! A [`Port`] is a typed capability slot: it names the call signature
//! `I -> PortResult<O>` that some external adapter must fulfil. Ports are
//! compared by identity, never by shape, so two ports with the same
//! signature are still distinct slots.
//!
//! A [`PortRegistry`] maps port identities to bound [`Adapter`]s:
//!
//! - [`PortRegistry::bind`] stores an adapter, replacing any earlier one
//! - [`PortRegistry::resolve`] returns the bound adapter or
//!   [`MissingPortBinding`]
//! - [`PortRegistry::reset`] clears every binding
//!
//! Registries are explicit values so that concurrent contexts can hold
//! isolated instances. A process-wide default registry backs the free
//! functions [`set_port_adapter`], [`use_port`] and [`reset_di`].
//!
//! # Example
//!
//! ```
//! use portwire::di::{Adapter, Port, PortRegistry};
//!
//! let greeting: Port<String, String> = Port::named("greeting");
//! let registry = PortRegistry::new();
//! registry.bind(
//!     &greeting,
//!     Adapter::from_fn(|name: String| async move { Ok(format!("Hello, {name}!")) }),
//! );
//!
//! assert!(registry.resolve(&greeting).is_ok());
//!
//! registry.reset();
//! let missing = registry.resolve(&greeting).err().map(|err| err.to_string());
//! assert_eq!(missing.as_deref(), Some("No implementation found for the port"));
//! ```

mod adapter;
mod error;
mod global;
mod port;
mod registry;

pub use adapter::{Adapter, PortError, PortHandler, PortResult};
pub use error::MissingPortBinding;
pub use global::{create_port, default_registry, reset_di, set_port_adapter, use_port};
pub use port::{Port, PortId};
pub use registry::PortRegistry;

#[cfg(test)]
mod tests;
