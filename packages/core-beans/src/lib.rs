//! Current bean contracts.
//!
//! A container describes each binding it can see as a `BeanEntry`: the
//! qualifier key, the (lazily created) instance, and metadata such as rank and
//! implementation type. A `Mediator` is told as entries come and go.
//!
//! Code still written against the legacy contract names can be bridged with
//! `beans-legacy-adapter`; this crate knows nothing about the legacy family.
//!
//! # Example
//!
//! ```rust
//! use beans_core::BeanEntry;
//!
//! fn describe<Q, T>(entries: &[&dyn BeanEntry<Q, T>]) -> Vec<String> {
//!     entries.iter().map(|e| e.description()).collect()
//! }
//! ```

mod entry;
mod mediator;

pub use entry::BeanEntry;
pub use mediator::Mediator;

// Re-export shared primitives for convenience
pub use beans_provider::{from_fn, Error, Provider, Result, Source, TypeToken};
