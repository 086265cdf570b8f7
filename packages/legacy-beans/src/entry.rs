//! Legacy bean entry contract.

use std::sync::Arc;

use beans_provider::{Error, Provider, Source, TypeToken};

/// Qualified binding under the legacy contract name.
///
/// Same accessors and semantics as `beans_core::BeanEntry`.
pub trait BeanEntry<Q, T>: Send + Sync {
    fn key(&self) -> &Q;

    fn value(&self) -> Result<Arc<T>, Error>;

    /// Replace the injected instance, returning the previous one.
    fn set_value(&self, value: Arc<T>) -> Result<Arc<T>, Error> {
        let _ = value;
        Err(Error::Unsupported {
            operation: "set_value",
        })
    }

    fn provider(&self) -> Arc<dyn Provider<Arc<T>>>;

    fn description(&self) -> String;

    fn source(&self) -> Option<Source>;

    fn rank(&self) -> i32;

    fn implementation_type(&self) -> Option<TypeToken>;
}

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
