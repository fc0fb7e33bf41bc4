//! Port-to-adapter binding registry.

use super::{Adapter, MissingPortBinding, Port, PortId};
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, trace, warn};

type Bindings = HashMap<PortId, Box<dyn Any + Send + Sync>>;

/// Registry of current port bindings.
///
/// Clones share the same bindings; [`PortRegistry::new`] creates an
/// isolated instance. The internal lock is released before any adapter
/// runs.
#[derive(Clone, Default)]
pub struct PortRegistry {
    bindings: Arc<RwLock<Bindings>>,
}

impl PortRegistry {
    /// Creates an empty, isolated registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `adapter` to `port`, replacing any previous binding.
    pub fn bind<I, O>(&self, port: &Port<I, O>, adapter: Adapter<I, O>)
    where
        I: Send + 'static,
        O: Send + 'static,
    {
        let replaced = self
            .write()
            .insert(port.id(), Box::new(adapter))
            .is_some();
        debug!(port = %port, replaced, "bound port adapter");
    }

    /// Returns the adapter currently bound to `port`.
    ///
    /// # Errors
    ///
    /// Returns [`MissingPortBinding`] when nothing is bound to `port`.
    pub fn resolve<I, O>(&self, port: &Port<I, O>) -> Result<Adapter<I, O>, MissingPortBinding>
    where
        I: Send + 'static,
        O: Send + 'static,
    {
        let adapter = self
            .read()
            .get(&port.id())
            .and_then(|binding| binding.downcast_ref::<Adapter<I, O>>())
            .cloned();

        if let Some(found) = adapter {
            trace!(port = %port, "resolved port adapter");
            Ok(found)
        } else {
            warn!(port = %port, "no adapter bound to port");
            Err(MissingPortBinding::new(port.id(), port.label()))
        }
    }

    /// Removes the binding for `port`, returning whether one existed.
    pub fn unbind<I, O>(&self, port: &Port<I, O>) -> bool {
        let removed = self.write().remove(&port.id()).is_some();
        debug!(port = %port, removed, "unbound port adapter");
        removed
    }

    /// Returns `true` when an adapter is bound to `port`.
    #[must_use]
    pub fn is_bound<I, O>(&self, port: &Port<I, O>) -> bool {
        self.read().contains_key(&port.id())
    }

    /// Clears every binding.
    pub fn reset(&self) {
        let mut bindings = self.write();
        let cleared = bindings.len();
        bindings.clear();
        drop(bindings);
        debug!(cleared, "reset port registry");
    }

    /// Returns the number of bound ports.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` when no port is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, Bindings> {
        self.bindings.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Bindings> {
        self.bindings.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for PortRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortRegistry")
            .field("bound_ports", &self.len())
            .finish()
    }
}
