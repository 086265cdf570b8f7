//! The deferred computation contract.

use std::sync::Arc;

use crate::Error;

/// Produces a `T` on demand.
///
/// Nothing is cached: each `get()` is a fresh evaluation, and two calls may
/// return different values.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Arc<dyn Provider<T>>`.
pub trait Provider<T>: Send + Sync {
    fn get(&self) -> Result<T, Error>;
}

/// A provider backed by a closure. See [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

/// Create a provider that calls `f` on every `get()`.
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: Fn() -> Result<T, Error> + Send + Sync,
{
    FromFn { f }
}

impl<T, F> Provider<T> for FromFn<F>
where
    F: Fn() -> Result<T, Error> + Send + Sync,
{
    fn get(&self) -> Result<T, Error> {
        (self.f)()
    }
}

// Blanket implementations for references and smart pointers

impl<T, P: Provider<T> + ?Sized> Provider<T> for &P {
    fn get(&self) -> Result<T, Error> {
        (**self).get()
    }
}

impl<T, P: Provider<T> + ?Sized> Provider<T> for Box<P> {
    fn get(&self) -> Result<T, Error> {
        self.as_ref().get()
    }
}

impl<T, P: Provider<T> + ?Sized> Provider<T> for Arc<P> {
    fn get(&self) -> Result<T, Error> {
        self.as_ref().get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn closure_provider() {
        let provider = from_fn(|| Ok("hello".to_string()));
        assert_eq!(provider.get().unwrap(), "hello");
    }

    #[test]
    fn no_caching() {
        let calls = AtomicUsize::new(0);
        let provider = from_fn(|| Ok(calls.fetch_add(1, Ordering::SeqCst)));

        assert_eq!(provider.get().unwrap(), 0);
        assert_eq!(provider.get().unwrap(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn failure_propagates() {
        let provider = from_fn(|| Err::<u8, _>(Error::provision("unbound")));
        assert!(matches!(provider.get(), Err(Error::Provision { .. })));
    }

    #[test]
    fn boxed_and_shared() {
        let boxed: Box<dyn Provider<i32>> = Box::new(from_fn(|| Ok(7)));
        assert_eq!(boxed.get().unwrap(), 7);

        let shared: Arc<dyn Provider<i32>> = Arc::new(from_fn(|| Ok(8)));
        assert_eq!(Provider::get(&shared).unwrap(), 8);
        assert_eq!(Provider::get(&&shared).unwrap(), 8);
    }
}
