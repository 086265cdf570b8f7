//! Adapter for mediators.

/// A mediator presented under the other contract family.
///
/// Wrapping a legacy `Mediator` yields a current one and vice versa. Each
/// `add`/`remove` wraps the incoming entry in a
/// [`BeanEntryAdapter`](crate::BeanEntryAdapter) (a borrow, not a copy) and
/// forwards it together with the very same watcher reference. Whatever the
/// wrapped mediator returns, including its failures, comes back unchanged.
#[derive(Clone, Debug)]
pub struct MediatorAdapter<M> {
    pub(crate) inner: M,
}

impl<M> MediatorAdapter<M> {
    /// Create a new adapter wrapping the given mediator.
    pub fn new(inner: M) -> Self {
        Self { inner }
    }

    /// Get a reference to the wrapped mediator.
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// Unwrap and return the wrapped mediator.
    pub fn into_inner(self) -> M {
        self.inner
    }
}

/// Adapt an optional mediator. `None` stays `None`.
pub fn adapt_mediator<M>(mediator: Option<M>) -> Option<MediatorAdapter<M>> {
    mediator.map(MediatorAdapter::new)
}
