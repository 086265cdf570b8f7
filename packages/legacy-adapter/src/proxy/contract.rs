//! Contract descriptors for late-bound proxies.
//!
//! A descriptor names a contract and lists the method signatures it declares.
//! Descriptors are plain serde data, so they can be written by hand or loaded
//! from configuration:
//!
//! ```json
//! {"name": "Runnable", "methods": [{"name": "run", "params": []}]}
//! ```

use serde::{Deserialize, Serialize};

use beans_provider::{BindingFailure, Error};

use super::{Value, ValueKind};

/// One declared method: a name and its parameter kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSignature {
    pub name: String,
    #[serde(default)]
    pub params: Vec<ValueKind>,
}

impl MethodSignature {
    pub fn new(name: impl Into<String>, params: impl IntoIterator<Item = ValueKind>) -> Self {
        Self {
            name: name.into(),
            params: params.into_iter().collect(),
        }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Whether `args` fit this signature exactly.
    pub fn matches(&self, args: &[Value]) -> bool {
        self.params.len() == args.len()
            && self.params.iter().zip(args).all(|(kind, arg)| kind.accepts(arg))
    }
}

/// The set of methods a proxy answers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractDescriptor {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<MethodSignature>,
}

impl ContractDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    /// Declare a method. Overloads (same name, different params) are allowed.
    pub fn method(
        mut self,
        name: impl Into<String>,
        params: impl IntoIterator<Item = ValueKind>,
    ) -> Self {
        self.methods.push(MethodSignature::new(name, params));
        self
    }

    /// Load a descriptor from JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::Config {
            message: e.to_string(),
        })
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(|e| Error::Config {
            message: e.to_string(),
        })
    }

    pub fn declares(&self, method: &str) -> bool {
        self.methods.iter().any(|m| m.name == method)
    }

    /// Find the declared signature a call binds to.
    ///
    /// Fails with `Error::Binding` if the method is not declared, or if no
    /// declared overload accepts `args`.
    pub fn resolve(&self, method: &str, args: &[Value]) -> Result<&MethodSignature, Error> {
        let overloads: Vec<&MethodSignature> =
            self.methods.iter().filter(|m| m.name == method).collect();

        if overloads.is_empty() {
            return Err(Error::binding(
                &self.name,
                method,
                BindingFailure::NotDeclared,
            ));
        }

        if let Some(signature) = overloads.iter().copied().find(|m| m.matches(args)) {
            return Ok(signature);
        }

        let expected = overloads
            .iter()
            .map(|m| join(m.params.iter()))
            .collect::<Vec<_>>()
            .join(" | ");

        Err(Error::binding(
            &self.name,
            method,
            BindingFailure::SignatureMismatch {
                expected,
                found: join(args.iter().map(Value::kind)),
            },
        ))
    }
}

fn join<K: ToString>(kinds: impl Iterator<Item = K>) -> String {
    kinds.map(|k| k.to_string()).collect::<Vec<_>>().join(", ")
}
