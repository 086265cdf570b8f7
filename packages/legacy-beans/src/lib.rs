//! Legacy bean contracts.
//!
//! These are the bean contracts under their old names. They mirror
//! `beans-core` method for method, but are separate traits: a legacy
//! `BeanEntry` is not a current `BeanEntry` and never coerces into one.
//! Use `beans-legacy-adapter` to cross between the two families.
//!
//! New code should depend on `beans-core` instead.

mod entry;
mod mediator;

pub use entry::BeanEntry;
pub use mediator::Mediator;

pub use beans_provider::{Error, Provider, Source, TypeToken};
