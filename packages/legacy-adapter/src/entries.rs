//! Lazy adapter for collections of bean entries.

use std::iter::FusedIterator;

use crate::BeanEntryAdapter;

/// A collection of entries presented under the other contract family.
///
/// Nothing is read from the wrapped collection until iteration asks for it:
/// each `next()` pulls exactly one source entry and wraps it. Containers
/// often create instances on demand while iterating, so adapting must not
/// walk ahead.
///
/// Iterating by value consumes the collection. Iterating by reference
/// (`&BeanEntries<I>`) is available whenever `&I` is iterable, so the adapted
/// collection can be walked again exactly when the source can.
#[derive(Clone, Debug)]
pub struct BeanEntries<I> {
    inner: I,
}

impl<I> BeanEntries<I> {
    /// Create a new adapter wrapping the given collection.
    pub fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Iterate without consuming the collection.
    pub fn iter<'a>(&'a self) -> BeanEntriesIter<<&'a I as IntoIterator>::IntoIter>
    where
        &'a I: IntoIterator,
    {
        self.into_iter()
    }

    /// Get a reference to the wrapped collection.
    pub fn inner(&self) -> &I {
        &self.inner
    }

    /// Unwrap and return the wrapped collection.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

/// Adapt a collection of entries.
///
/// The collection itself is required; absence is handled by the caller (or
/// by [`adapt_provider`](crate::adapt_provider) for deferred collections).
pub fn adapt_entries<I: IntoIterator>(entries: I) -> BeanEntries<I> {
    BeanEntries::new(entries)
}

impl<I: IntoIterator> IntoIterator for BeanEntries<I> {
    type Item = BeanEntryAdapter<I::Item>;
    type IntoIter = BeanEntriesIter<I::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        BeanEntriesIter {
            inner: self.inner.into_iter(),
        }
    }
}

impl<'a, I> IntoIterator for &'a BeanEntries<I>
where
    &'a I: IntoIterator,
{
    type Item = BeanEntryAdapter<<&'a I as IntoIterator>::Item>;
    type IntoIter = BeanEntriesIter<<&'a I as IntoIterator>::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        BeanEntriesIter {
            inner: (&self.inner).into_iter(),
        }
    }
}

/// Iterator over adapted entries.
///
/// Not fused: asking again after exhaustion asks the source again, so the
/// source's own behaviour past the end is what the caller sees.
#[derive(Clone, Debug)]
pub struct BeanEntriesIter<J> {
    inner: J,
}

impl<J: Iterator> Iterator for BeanEntriesIter<J> {
    type Item = BeanEntryAdapter<J::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(BeanEntryAdapter::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<J: DoubleEndedIterator> DoubleEndedIterator for BeanEntriesIter<J> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(BeanEntryAdapter::new)
    }
}

impl<J: ExactSizeIterator> ExactSizeIterator for BeanEntriesIter<J> {}

impl<J: FusedIterator> FusedIterator for BeanEntriesIter<J> {}
