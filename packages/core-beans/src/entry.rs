//! The bean entry contract.

use std::sync::Arc;

use beans_provider::{Error, Provider, Source, TypeToken};

/// A binding as seen by the container: qualifier key plus injected value.
///
/// Entries are views. `value()` may create the instance on first use, so
/// callers that only need metadata should avoid it.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `&dyn BeanEntry<Q, T>`.
pub trait BeanEntry<Q, T>: Send + Sync {
    /// The qualifier this binding was registered under.
    fn key(&self) -> &Q;

    /// The injected instance.
    ///
    /// Returns the shared instance itself, never a copy.
    fn value(&self) -> Result<Arc<T>, Error>;

    /// Replace the injected instance, returning the previous one.
    ///
    /// Most entries are read-only views; the default reports
    /// `Error::Unsupported`.
    fn set_value(&self, value: Arc<T>) -> Result<Arc<T>, Error> {
        let _ = value;
        Err(Error::Unsupported {
            operation: "set_value",
        })
    }

    /// A provider that yields the instance on demand.
    fn provider(&self) -> Arc<dyn Provider<Arc<T>>>;

    /// Human-readable description of the binding.
    fn description(&self) -> String;

    /// Where the binding was registered, if known.
    fn source(&self) -> Option<Source>;

    /// Ordering rank. Higher ranks are preferred by the container.
    fn rank(&self) -> i32;

    /// The concrete implementation type, if known without instantiating.
    fn implementation_type(&self) -> Option<TypeToken>;
}

// Blanket implementations for references and smart pointers

macro_rules! forward_entry {
    ($($ptr:ty),*) => {$(
        impl<Q, T, E: BeanEntry<Q, T> + ?Sized> BeanEntry<Q, T> for $ptr {
            fn key(&self) -> &Q {
                (**self).key()
            }

            fn value(&self) -> Result<Arc<T>, Error> {
                (**self).value()
            }

            fn set_value(&self, value: Arc<T>) -> Result<Arc<T>, Error> {
                (**self).set_value(value)
            }

            fn provider(&self) -> Arc<dyn Provider<Arc<T>>> {
                (**self).provider()
            }

            fn description(&self) -> String {
                (**self).description()
            }

            fn source(&self) -> Option<Source> {
                (**self).source()
            }

            fn rank(&self) -> i32 {
                (**self).rank()
            }

            fn implementation_type(&self) -> Option<TypeToken> {
                (**self).implementation_type()
            }
        }
    )*};
}

forward_entry!(&E, Box<E>, Arc<E>);
