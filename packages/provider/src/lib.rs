//! Shared bean primitives.
//!
//! This is the narrow waist below both bean contract families. Anything that
//! must cross the legacy boundary without translation lives here:
//! - `Provider`: a deferred, uncached computation
//! - `TypeToken`: identity of an implementation type
//! - `Source`: opaque registration-site locator
//! - `Error`: the single failure type both families report
//!
//! # Example
//!
//! ```rust
//! use beans_provider::{from_fn, Provider};
//!
//! let provider = from_fn(|| Ok(42));
//! assert_eq!(provider.get().unwrap(), 42);
//! ```

mod error;
mod provider;
mod token;

pub use error::{BindingFailure, BoxError, Error, Result};
pub use provider::{from_fn, FromFn, Provider};
pub use token::{Source, TypeToken};
