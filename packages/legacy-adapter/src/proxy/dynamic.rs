//! Late-bound proxies for objects with no adapter type.
//!
//! When neither family offers a static adapter for some object, it can still
//! be wrapped: anything implementing [`Dynamic`] answers calls by method name,
//! and a [`DynamicProxy`] presents it under a [`ContractDescriptor`]. Calls
//! are checked against the contract when they are made, never when the proxy
//! is built.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use beans_legacy_adapter::proxy::{as_contract, ContractDescriptor, Dynamic, DynamicObject, Value};
//!
//! let legacy = DynamicObject::new("LegacyTask").with_method("run", 0, |_| Ok(Value::Null));
//! let factory = as_contract(ContractDescriptor::new("Runnable").method("run", []));
//!
//! let proxy = factory.proxy(Some(Arc::new(legacy))).unwrap();
//! assert_eq!(proxy.invoke("run", &[]).unwrap(), Value::Null);
//! assert!(factory.proxy(None).is_none());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use beans_provider::{BindingFailure, Error};

use super::{ContractDescriptor, Value};

/// An object reachable by late binding.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Arc<dyn Dynamic>`.
pub trait Dynamic: Send + Sync {
    /// Call `method` with `args`.
    ///
    /// An implementation with no such method must fail with `Error::Binding`
    /// (`BindingFailure::Missing`).
    fn invoke(&self, method: &str, args: &[Value]) -> Result<Value, Error>;
}

impl<D: Dynamic + ?Sized> Dynamic for Arc<D> {
    fn invoke(&self, method: &str, args: &[Value]) -> Result<Value, Error> {
        self.as_ref().invoke(method, args)
    }
}

impl<D: Dynamic + ?Sized> Dynamic for Box<D> {
    fn invoke(&self, method: &str, args: &[Value]) -> Result<Value, Error> {
        self.as_ref().invoke(method, args)
    }
}

type Handler = Arc<dyn Fn(&[Value]) -> Result<Value, Error> + Send + Sync>;

/// A `Dynamic` built from a table of closures, keyed by name and arity.
#[derive(Clone)]
pub struct DynamicObject {
    name: String,
    methods: HashMap<String, HashMap<usize, Handler>>,
}

impl DynamicObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: HashMap::new(),
        }
    }

    /// Add a method. A later method with the same name and arity replaces
    /// the earlier one.
    pub fn with_method<F>(mut self, name: impl Into<String>, arity: usize, handler: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, Error> + Send + Sync + 'static,
    {
        self.methods
            .entry(name.into())
            .or_default()
            .insert(arity, Arc::new(handler));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Dynamic for DynamicObject {
    fn invoke(&self, method: &str, args: &[Value]) -> Result<Value, Error> {
        match self
            .methods
            .get(method)
            .and_then(|by_arity| by_arity.get(&args.len()))
        {
            Some(handler) => handler(args),
            None => Err(Error::binding(&self.name, method, BindingFailure::Missing)),
        }
    }
}

impl fmt::Debug for DynamicObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut methods: Vec<_> = self
            .methods
            .iter()
            .flat_map(|(name, by_arity)| {
                by_arity
                    .keys()
                    .map(move |arity| format!("{}/{}", name, arity))
            })
            .collect();
        methods.sort();
        f.debug_struct("DynamicObject")
            .field("name", &self.name)
            .field("methods", &methods)
            .finish()
    }
}

/// Produces proxies for one contract.
///
/// Cheap to clone; one factory serves any number of `proxy()` calls.
#[derive(Clone, Debug)]
pub struct DynamicProxyFactory {
    contract: Arc<ContractDescriptor>,
}

/// Bind a proxy factory to `contract`.
pub fn as_contract(contract: ContractDescriptor) -> DynamicProxyFactory {
    log::debug!(
        "binding proxy factory to contract {} ({} methods)",
        contract.name,
        contract.methods.len()
    );
    DynamicProxyFactory {
        contract: Arc::new(contract),
    }
}

impl DynamicProxyFactory {
    pub fn contract(&self) -> &ContractDescriptor {
        &self.contract
    }

    /// Wrap `wrapped` in a fresh proxy. `None` stays `None`.
    ///
    /// Nothing is checked here: a method the wrapped object lacks only
    /// fails when it is called.
    pub fn proxy(&self, wrapped: Option<Arc<dyn Dynamic>>) -> Option<DynamicProxy> {
        let target = wrapped?;
        log::debug!("synthesizing proxy for contract {}", self.contract.name);
        Some(DynamicProxy {
            contract: self.contract.clone(),
            target,
        })
    }
}

/// Presents a wrapped object under a contract.
///
/// Every call is resolved against the contract first, then forwarded with
/// the same arguments. The wrapped object's result or failure is returned
/// as is.
#[derive(Clone)]
pub struct DynamicProxy {
    contract: Arc<ContractDescriptor>,
    target: Arc<dyn Dynamic>,
}

impl DynamicProxy {
    pub fn contract(&self) -> &ContractDescriptor {
        &self.contract
    }

    pub fn wrapped(&self) -> &Arc<dyn Dynamic> {
        &self.target
    }
}

impl Dynamic for DynamicProxy {
    fn invoke(&self, method: &str, args: &[Value]) -> Result<Value, Error> {
        if let Err(e) = self.contract.resolve(method, args) {
            log::trace!("rejected call through proxy: {}", e);
            return Err(e);
        }
        self.target.invoke(method, args)
    }
}

impl fmt::Debug for DynamicProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicProxy")
            .field("contract", &self.contract.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::proxy::ValueKind;

    fn runnable() -> ContractDescriptor {
        ContractDescriptor::new("Runnable").method("run", [])
    }

    #[test]
    fn factory_reusable() {
        let factory = as_contract(runnable());
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let counter = calls.clone();
            let legacy = DynamicObject::new("LegacyRunnable").with_method("run", 0, move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(Value::Null)
            });
            let proxy = factory.proxy(Some(Arc::new(legacy))).unwrap();
            proxy.invoke("run", &[]).unwrap();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(factory.contract().name, "Runnable");
    }

    #[test]
    fn results_forwarded_unchanged() {
        let contract = ContractDescriptor::new("Adder").method(
            "add",
            [ValueKind::Integer, ValueKind::Integer],
        );
        let legacy = Arc::new(DynamicObject::new("LegacyAdder").with_method("add", 2, |args| {
            let a = args[0].as_integer().unwrap_or_default();
            let b = args[1].as_integer().unwrap_or_default();
            Ok(Value::from(a + b))
        }));

        let proxy = as_contract(contract).proxy(Some(legacy.clone())).unwrap();
        let args = [Value::from(2i64), Value::from(40i64)];
        assert_eq!(proxy.invoke("add", &args).unwrap(), legacy.invoke("add", &args).unwrap());
        assert_eq!(proxy.invoke("add", &args).unwrap(), Value::from(42i64));
    }

    #[test]
    fn missing_method_fails_at_call_time() {
        let contract = runnable().method("stop", []);
        let legacy = DynamicObject::new("LegacyRunnable").with_method("run", 0, |_| Ok(Value::Null));

        // Construction succeeds even though `stop` is missing.
        let proxy = as_contract(contract).proxy(Some(Arc::new(legacy))).unwrap();
        assert!(proxy.invoke("run", &[]).is_ok());

        match proxy.invoke("stop", &[]) {
            Err(Error::Binding {
                contract,
                method,
                reason: BindingFailure::Missing,
            }) => {
                assert_eq!(contract, "LegacyRunnable");
                assert_eq!(method, "stop");
            }
            other => panic!("expected missing binding, got {:?}", other),
        }
    }

    #[test]
    fn undeclared_method_not_forwarded() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let legacy = DynamicObject::new("Legacy").with_method("secret", 0, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Value::Null)
        });

        let proxy = as_contract(runnable()).proxy(Some(Arc::new(legacy))).unwrap();
        let err = proxy.invoke("secret", &[]).unwrap_err();

        assert!(err.is_binding());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn failures_forwarded_unchanged() {
        let legacy = DynamicObject::new("Legacy")
            .with_method("run", 0, |_| Err(Error::provision("no scope")));
        let proxy = as_contract(runnable()).proxy(Some(Arc::new(legacy))).unwrap();

        match proxy.invoke("run", &[]) {
            Err(Error::Provision { message, .. }) => assert_eq!(message, "no scope"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn proxies_compose() {
        let legacy = DynamicObject::new("Legacy").with_method("run", 0, |_| Ok(Value::from(true)));
        let factory = as_contract(runnable());

        let inner = factory.proxy(Some(Arc::new(legacy))).unwrap();
        let outer = factory.proxy(Some(Arc::new(inner))).unwrap();
        assert_eq!(outer.invoke("run", &[]).unwrap(), Value::from(true));
    }

    #[test]
    fn overloads_dispatch_by_arity() {
        let legacy = DynamicObject::new("Legacy")
            .with_method("sum", 1, |args| Ok(args[0].clone()))
            .with_method("sum", 2, |args| {
                let a = args[0].as_integer().unwrap_or_default();
                let b = args[1].as_integer().unwrap_or_default();
                Ok(Value::from(a + b))
            });

        assert_eq!(legacy.invoke("sum", &[Value::from(4i64)]).unwrap(), Value::from(4i64));
        assert_eq!(
            legacy
                .invoke("sum", &[Value::from(4i64), Value::from(5i64)])
                .unwrap(),
            Value::from(9i64)
        );
        assert!(legacy.invoke("sum", &[]).unwrap_err().is_binding());
        assert!(legacy.invoke("product", &[]).unwrap_err().is_binding());
    }

    #[test]
    fn proxy_of_none_is_none() {
        assert!(as_contract(runnable()).proxy(None).is_none());
    }

    #[test]
    fn debug_lists_methods() {
        let legacy = DynamicObject::new("Legacy")
            .with_method("b", 1, |_| Ok(Value::Null))
            .with_method("a", 0, |_| Ok(Value::Null));
        assert_eq!(
            format!("{:?}", legacy),
            r#"DynamicObject { name: "Legacy", methods: ["a/0", "b/1"] }"#
        );
    }
}
