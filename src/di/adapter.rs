//! Adapter handles and the handler contract they wrap.

use async_trait::async_trait;
use futures_util::FutureExt;
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use thiserror::Error;

/// Result type returned by port adapters.
pub type PortResult<T> = Result<T, PortError>;

/// Implementation contract for a port with signature `I -> PortResult<O>`.
///
/// Struct adapters implement this trait directly; closures are wrapped with
/// [`Adapter::from_fn`].
#[async_trait]
pub trait PortHandler<I, O>: Send + Sync
where
    I: Send + 'static,
    O: Send + 'static,
{
    /// Handles one port invocation.
    async fn handle(&self, input: I) -> PortResult<O>;
}

/// Errors raised by port adapters.
#[derive(Debug, Clone, Error)]
pub enum PortError {
    /// The adapter reported a failure. Display forwards to the wrapped error.
    #[error("{0}")]
    Adapter(Arc<dyn std::error::Error + Send + Sync>),

    /// The adapter panicked; the panic payload is discarded.
    #[error("Unknown error occurred")]
    Unknown,
}

impl PortError {
    /// Wraps an adapter error.
    pub fn adapter(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Adapter(Arc::new(err))
    }

    /// Creates an adapter error from a plain message.
    pub fn message(message: impl Into<String>) -> Self {
        Self::adapter(AdapterFailure(message.into()))
    }

    /// Returns the wrapped adapter error, if any.
    #[must_use]
    pub fn as_adapter_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Adapter(err) => Some(err.as_ref()),
            Self::Unknown => None,
        }
    }

    /// Returns `true` when this error stands in for an adapter panic.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

#[derive(Debug, Error)]
#[error("{0}")]
struct AdapterFailure(String);

/// Shared handle to a port implementation.
///
/// Cloning an adapter clones the handle, not the implementation, so a clone
/// captured by a caller stays usable after the registry it came from is
/// reset.
pub struct Adapter<I, O> {
    handler: Arc<dyn PortHandler<I, O>>,
}

impl<I, O> Adapter<I, O>
where
    I: Send + 'static,
    O: Send + 'static,
{
    /// Wraps a handler implementation.
    pub fn new(handler: impl PortHandler<I, O> + 'static) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Wraps an already shared handler without re-allocating it.
    #[must_use]
    pub const fn from_arc(handler: Arc<dyn PortHandler<I, O>>) -> Self {
        Self { handler }
    }

    /// Wraps an async closure.
    pub fn from_fn<F, Fut>(f: F) -> Self
    where
        F: Fn(I) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = PortResult<O>> + Send + 'static,
    {
        Self::new(FnHandler(f))
    }

    /// Returns `true` when both handles point at the same implementation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }

    /// Invokes the adapter.
    ///
    /// A panic inside the adapter is caught here and reported as
    /// [`PortError::Unknown`].
    ///
    /// # Errors
    ///
    /// Returns whatever [`PortError`] the adapter produced.
    pub async fn call(&self, input: I) -> PortResult<O> {
        match AssertUnwindSafe(self.handler.handle(input))
            .catch_unwind()
            .await
        {
            Ok(result) => result,
            Err(_) => {
                tracing::error!("port adapter panicked; payload discarded");
                Err(PortError::Unknown)
            }
        }
    }
}

impl<I, O> Clone for Adapter<I, O> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<I, O> fmt::Debug for Adapter<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapter")
            .field("handler", &Arc::as_ptr(&self.handler).cast::<()>())
            .finish()
    }
}

struct FnHandler<F>(F);

#[async_trait]
impl<I, O, F, Fut> PortHandler<I, O> for FnHandler<F>
where
    I: Send + 'static,
    O: Send + 'static,
    F: Fn(I) -> Fut + Send + Sync,
    Fut: Future<Output = PortResult<O>> + Send,
{
    async fn handle(&self, input: I) -> PortResult<O> {
        (self.0)(input).await
    }
}
