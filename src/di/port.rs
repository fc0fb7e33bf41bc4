//! Typed port handles and their process-unique identities.

use super::{Adapter, MissingPortBinding, PortRegistry, global};
use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_PORT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a [`Port`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortId(u64);

impl PortId {
    fn next() -> Self {
        Self(NEXT_PORT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw numeric identity.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "port#{}", self.0)
    }
}

/// Typed capability slot for an adapter with signature `I -> PortResult<O>`.
///
/// The signature exists only at the type level. Copies of a port share its
/// identity; every call to [`Port::new`] or [`Port::named`] allocates a new
/// one.
pub struct Port<I, O> {
    id: PortId,
    label: Option<&'static str>,
    signature: PhantomData<fn(I) -> O>,
}

impl<I, O> Port<I, O> {
    /// Allocates a fresh port identity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: PortId::next(),
            label: None,
            signature: PhantomData,
        }
    }

    /// Allocates a fresh port identity carrying a diagnostic label.
    ///
    /// The label is used in log output only and plays no part in identity.
    #[must_use]
    pub fn named(label: &'static str) -> Self {
        Self {
            label: Some(label),
            ..Self::new()
        }
    }

    /// Returns the port identity.
    #[must_use]
    pub const fn id(&self) -> PortId {
        self.id
    }

    /// Returns the diagnostic label, if any.
    #[must_use]
    pub const fn label(&self) -> Option<&'static str> {
        self.label
    }
}

impl<I, O> Port<I, O>
where
    I: Send + 'static,
    O: Send + 'static,
{
    /// Resolves the adapter bound to this port in the default registry.
    ///
    /// Equivalent to [`use_port`](super::use_port).
    ///
    /// # Errors
    ///
    /// Returns [`MissingPortBinding`] when no adapter is bound.
    pub fn resolve(&self) -> Result<Adapter<I, O>, MissingPortBinding> {
        global::default_registry().resolve(self)
    }

    /// Resolves the adapter bound to this port in `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`MissingPortBinding`] when no adapter is bound.
    pub fn resolve_in(&self, registry: &PortRegistry) -> Result<Adapter<I, O>, MissingPortBinding> {
        registry.resolve(self)
    }
}

impl<I, O> Default for Port<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, O> Clone for Port<I, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, O> Copy for Port<I, O> {}

impl<I, O> PartialEq for Port<I, O> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<I, O> Eq for Port<I, O> {}

impl<I, O> fmt::Debug for Port<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Port")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish()
    }
}

impl<I, O> fmt::Display for Port<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label {
            Some(label) => write!(f, "{label} ({})", self.id),
            None => write!(f, "{}", self.id),
        }
    }
}
