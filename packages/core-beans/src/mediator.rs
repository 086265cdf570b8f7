//! The mediator contract.

use std::sync::Arc;

use beans_provider::Error;

use crate::BeanEntry;

/// Watches entries enter and leave visibility.
///
/// The container calls `add` when an entry matching the watcher's criteria
/// appears and `remove` when it goes away. `W` is the caller's own token and
/// is handed back untouched, by reference.
pub trait Mediator<Q, T, W>: Send + Sync {
    fn add(&self, entry: &dyn BeanEntry<Q, T>, watcher: &W) -> Result<(), Error>;

    fn remove(&self, entry: &dyn BeanEntry<Q, T>, watcher: &W) -> Result<(), Error>;
}

macro_rules! forward_mediator {
    ($($ptr:ty),*) => {$(
        impl<Q, T, W, M: Mediator<Q, T, W> + ?Sized> Mediator<Q, T, W> for $ptr {
            fn add(&self, entry: &dyn BeanEntry<Q, T>, watcher: &W) -> Result<(), Error> {
                (**self).add(entry, watcher)
            }

            fn remove(&self, entry: &dyn BeanEntry<Q, T>, watcher: &W) -> Result<(), Error> {
                (**self).remove(entry, watcher)
            }
        }
    )*};
}

forward_mediator!(&M, Box<M>, Arc<M>);
