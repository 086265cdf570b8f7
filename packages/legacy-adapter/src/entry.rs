//! Adapter for a single bean entry.

/// Presents a bean entry under the other contract family.
///
/// Wrapping a `beans_core::BeanEntry` yields a `beans_legacy::BeanEntry` and
/// vice versa. Every accessor forwards to the wrapped entry: `value()` hands
/// back the very same `Arc`, `set_value()` is the wrapped entry's decision,
/// and failures come back unchanged.
///
/// # Example
///
/// ```rust,ignore
/// use beans_legacy_adapter::BeanEntryAdapter;
///
/// let legacy = BeanEntryAdapter::new(&current_entry);
/// assert_eq!(
///     beans_legacy::BeanEntry::description(&legacy),
///     beans_core::BeanEntry::description(&current_entry),
/// );
/// ```
#[derive(Clone, Debug)]
pub struct BeanEntryAdapter<E> {
    pub(crate) inner: E,
}

impl<E> BeanEntryAdapter<E> {
    /// Create a new adapter wrapping the given entry.
    pub fn new(inner: E) -> Self {
        Self { inner }
    }

    /// Get a reference to the wrapped entry.
    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Unwrap and return the wrapped entry.
    pub fn into_inner(self) -> E {
        self.inner
    }
}

/// Adapt an optional entry. `None` stays `None`.
pub fn adapt_entry<E>(entry: Option<E>) -> Option<BeanEntryAdapter<E>> {
    entry.map(BeanEntryAdapter::new)
}
