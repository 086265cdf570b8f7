//! Error types shared by both bean contract families.
//!
//! Both families report failures with the same `Error`, so an adapter can
//! hand a failure from one side to the other untouched.

use std::fmt;

/// Boxed failure raised by user code (mediator callbacks, providers).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T> = std::result::Result<T, Error>;

/// Why a late-bound call could not be dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingFailure {
    /// The contract does not declare the method.
    NotDeclared,
    /// The wrapped object has no method with that name and arity.
    Missing,
    /// The call does not match the declared parameter list.
    SignatureMismatch { expected: String, found: String },
}

impl fmt::Display for BindingFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingFailure::NotDeclared => write!(f, "not declared"),
            BindingFailure::Missing => write!(f, "no such method"),
            BindingFailure::SignatureMismatch { expected, found } => {
                write!(f, "expected ({}), found ({})", expected, found)
            }
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("unsupported operation: {operation}")]
    Unsupported { operation: &'static str },

    #[error("cannot bind {contract}::{method}: {reason}")]
    Binding {
        contract: String,
        method: String,
        reason: BindingFailure,
    },

    #[error("provisioning failed: {message}")]
    Provision {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error(transparent)]
    Callback(BoxError),

    #[error("invalid contract configuration: {message}")]
    Config { message: String },
}

impl Error {
    /// Wrap a failure raised by user callback code.
    pub fn callback(e: impl Into<BoxError>) -> Self {
        Error::Callback(e.into())
    }

    /// A provisioning failure with no underlying cause.
    pub fn provision(message: impl Into<String>) -> Self {
        Error::Provision {
            message: message.into(),
            source: None,
        }
    }

    pub fn binding(
        contract: impl Into<String>,
        method: impl Into<String>,
        reason: BindingFailure,
    ) -> Self {
        Error::Binding {
            contract: contract.into(),
            method: method.into(),
            reason,
        }
    }

    pub fn is_binding(&self) -> bool {
        matches!(self, Error::Binding { .. })
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::Unsupported { .. })
    }
}
