//! Adapter layer between legacy and current bean contracts.
//!
//! This crate provides bidirectional adapters allowing:
//! - Current entries, entry collections, providers and mediators to be handed
//!   to code written against the legacy contracts
//! - Legacy ones to be handed to code written against the current contracts
//!
//! Each adapter is one generic wrapper. Which way it bridges follows from the
//! trait the wrapped value implements, so the same `adapt_*` function serves
//! both directions. Every entry point that takes an `Option` passes `None`
//! straight through.
//!
//! Objects with no adapter type at all can be wrapped in a proxy; see
//! [`proxy`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use beans_legacy_adapter::{adapt_entries, adapt_entry, adapt_mediator};
//!
//! // A current entry, seen through the legacy contract
//! let legacy_entry = adapt_entry(Some(&current_entry)).unwrap();
//! let value = beans_legacy::BeanEntry::value(&legacy_entry)?;
//!
//! // A legacy mediator, registered with a container that speaks current
//! let mediator = adapt_mediator(Some(MyLegacyMediator::new())).unwrap();
//! container.watch(key, mediator, watcher);
//! ```

mod bridge;
mod entries;
mod entry;
mod mediator;
mod provider;
pub mod proxy;

pub use entries::{adapt_entries, BeanEntries, BeanEntriesIter};
pub use entry::{adapt_entry, BeanEntryAdapter};
pub use mediator::{adapt_mediator, MediatorAdapter};
pub use provider::{adapt_provider, BeanEntriesProvider};
pub use proxy::{as_contract, ContractDescriptor, Dynamic, DynamicProxy, DynamicProxyFactory};

// Re-export key types for convenience
pub use beans_core::{BeanEntry as CoreBeanEntry, Mediator as CoreMediator};
pub use beans_legacy::{BeanEntry as LegacyBeanEntry, Mediator as LegacyMediator};
pub use beans_provider::{Error, Provider, Result, Source, TypeToken};
