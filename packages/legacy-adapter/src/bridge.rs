//! Contract impls for the adapter types, generated once per direction.
//!
//! The two contract families have identical method sets, so one macro body
//! describes how an entry or mediator from `$from` is presented as `$to`.
//! It is expanded for both directions below.

use std::sync::Arc;

use beans_provider::{Error, Provider, Source, TypeToken};

use crate::{BeanEntryAdapter, MediatorAdapter};

macro_rules! bridge {
    ($from:ident => $to:ident) => {
        impl<Q, T, E> $to::BeanEntry<Q, T> for BeanEntryAdapter<E>
        where
            E: $from::BeanEntry<Q, T>,
        {
            fn key(&self) -> &Q {
                <E as $from::BeanEntry<Q, T>>::key(&self.inner)
            }

            fn value(&self) -> Result<Arc<T>, Error> {
                <E as $from::BeanEntry<Q, T>>::value(&self.inner)
            }

            fn set_value(&self, value: Arc<T>) -> Result<Arc<T>, Error> {
                <E as $from::BeanEntry<Q, T>>::set_value(&self.inner, value)
            }

            fn provider(&self) -> Arc<dyn Provider<Arc<T>>> {
                <E as $from::BeanEntry<Q, T>>::provider(&self.inner)
            }

            fn description(&self) -> String {
                <E as $from::BeanEntry<Q, T>>::description(&self.inner)
            }

            fn source(&self) -> Option<Source> {
                <E as $from::BeanEntry<Q, T>>::source(&self.inner)
            }

            fn rank(&self) -> i32 {
                <E as $from::BeanEntry<Q, T>>::rank(&self.inner)
            }

            fn implementation_type(&self) -> Option<TypeToken> {
                <E as $from::BeanEntry<Q, T>>::implementation_type(&self.inner)
            }
        }

        // Entries reach the mediator from the container side, so they cross
        // the boundary in the opposite direction to the mediator itself.
        impl<Q, T, W, M> $to::Mediator<Q, T, W> for MediatorAdapter<M>
        where
            M: $from::Mediator<Q, T, W>,
        {
            fn add(&self, entry: &dyn $to::BeanEntry<Q, T>, watcher: &W) -> Result<(), Error> {
                <M as $from::Mediator<Q, T, W>>::add(
                    &self.inner,
                    &BeanEntryAdapter::new(entry),
                    watcher,
                )
            }

            fn remove(&self, entry: &dyn $to::BeanEntry<Q, T>, watcher: &W) -> Result<(), Error> {
                <M as $from::Mediator<Q, T, W>>::remove(
                    &self.inner,
                    &BeanEntryAdapter::new(entry),
                    watcher,
                )
            }
        }
    };
}

bridge!(beans_core => beans_legacy);
bridge!(beans_legacy => beans_core);
