//! Adapter for deferred collections of bean entries.

use beans_provider::{Error, Provider};

use crate::{adapt_entries, BeanEntries};

/// A provider of entry collections, presented under the other contract family.
///
/// Each `get()` calls the wrapped provider exactly once and wraps whatever
/// collection it returns with [`adapt_entries`]. Nothing is cached.
#[derive(Clone, Debug)]
pub struct BeanEntriesProvider<P> {
    inner: P,
}

impl<P> BeanEntriesProvider<P> {
    /// Create a new adapter wrapping the given provider.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    /// Get a reference to the wrapped provider.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Unwrap and return the wrapped provider.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P, I> Provider<BeanEntries<I>> for BeanEntriesProvider<P>
where
    P: Provider<I>,
    I: IntoIterator,
{
    fn get(&self) -> Result<BeanEntries<I>, Error> {
        self.inner.get().map(adapt_entries)
    }
}

/// Adapt an optional provider of entry collections. `None` stays `None`.
pub fn adapt_provider<P>(provider: Option<P>) -> Option<BeanEntriesProvider<P>> {
    provider.map(BeanEntriesProvider::new)
}
