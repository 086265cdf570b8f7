//! Legacy mediator contract.

use std::sync::Arc;

use beans_provider::Error;

use crate::BeanEntry;

/// Watches legacy entries enter and leave visibility.
///
/// Same semantics as `beans_core::Mediator`.
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
