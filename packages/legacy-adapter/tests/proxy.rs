use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use beans_legacy_adapter::forwarding_proxy;
use beans_legacy_adapter::proxy::{
    as_contract, proxy_factory, ContractDescriptor, Dynamic, DynamicObject, Value, ValueKind,
};
use beans_legacy_adapter::Error;
use beans_provider::BindingFailure;

pub trait Runnable {
    fn run(&self);
}

pub trait LegacyRunnable {
    fn run(&self);
}

forwarding_proxy! {
    pub struct RunnableProxy: Runnable => LegacyRunnable {
        fn run(&self);
    }
}

struct Task {
    runs: Arc<AtomicUsize>,
}

impl LegacyRunnable for Task {
    fn run(&self) {
        self.runs.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn legacy_as_factory() {
    let factory = proxy_factory::<dyn Runnable>();
    let runs = Arc::new(AtomicUsize::new(0));

    let proxy = factory
        .proxy(Some(Task { runs: runs.clone() }))
        .unwrap();
    proxy.run();

    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[test]
fn legacy_proxy_null() {
    let factory = proxy_factory::<dyn Runnable>();
    assert!(factory.proxy::<Task>(None).is_none());
}

#[test]
fn explicit_proxy_struct() {
    let runs = Arc::new(AtomicUsize::new(0));
    let proxy = RunnableProxy(Task { runs: runs.clone() });

    let as_current: &dyn Runnable = &proxy;
    as_current.run();
    as_current.run();

    assert_eq!(runs.load(Ordering::SeqCst), 2);
}

fn legacy_store() -> DynamicObject {
    DynamicObject::new("LegacyStore")
        .with_method("get", 1, |args| match args[0].as_str() {
            Some("answer") => Ok(Value::from(42i64)),
            Some(_) => Ok(Value::Null),
            None => Err(Error::provision("key must be a string")),
        })
        .with_method("size", 0, |_| Ok(Value::from(1i64)))
}

#[test]
fn configured_contract_forwards_calls() {
    let contract = ContractDescriptor::from_json(
        r#"{
            "name": "Store",
            "methods": [
                {"name": "get", "params": ["any"]},
                {"name": "size"},
                {"name": "clear"}
            ]
        }"#,
    )
    .unwrap();

    let store: Arc<dyn Dynamic> = Arc::new(legacy_store());
    let proxy = as_contract(contract).proxy(Some(store.clone())).unwrap();

    let args = [Value::from("answer")];
    assert_eq!(proxy.invoke("get", &args).unwrap(), store.invoke("get", &args).unwrap());
    assert_eq!(proxy.invoke("size", &[]).unwrap(), Value::from(1i64));

    // Failures from the wrapped object come through untouched.
    let err = proxy.invoke("get", &[Value::from(1i64)]).unwrap_err();
    assert!(matches!(err, Error::Provision { ref message, .. } if message == "key must be a string"));

    // Declared but missing: a binding failure, at call time.
    let err = proxy.invoke("clear", &[]).unwrap_err();
    assert!(matches!(
        err,
        Error::Binding {
            reason: BindingFailure::Missing,
            ..
        }
    ));
}

#[test]
fn declared_kinds_are_checked() {
    let contract = ContractDescriptor::new("Store").method("get", [ValueKind::String]);
    let proxy = as_contract(contract)
        .proxy(Some(Arc::new(legacy_store())))
        .unwrap();

    assert_eq!(
        proxy.invoke("get", &[Value::from("answer")]).unwrap(),
        Value::from(42i64)
    );

    let err = proxy.invoke("get", &[Value::from(true)]).unwrap_err();
    assert!(matches!(
        err,
        Error::Binding {
            reason: BindingFailure::SignatureMismatch { .. },
            ..
        }
    ));

    let err = proxy.invoke("size", &[]).unwrap_err();
    assert!(matches!(
        err,
        Error::Binding {
            reason: BindingFailure::NotDeclared,
            ..
        }
    ));
}

#[test]
fn null_argument_reaches_typed_parameter() {
    let contract = ContractDescriptor::new("Store").method("get", [ValueKind::String]);
    let store: Arc<dyn Dynamic> = Arc::new(
        DynamicObject::new("LegacyStore")
            .with_method("get", 1, |args| Ok(Value::from(args[0].is_null()))),
    );
    let proxy = as_contract(contract).proxy(Some(store.clone())).unwrap();

    let direct = store.invoke("get", &[Value::Null]).unwrap();
    let proxied = proxy.invoke("get", &[Value::Null]).unwrap();

    assert_eq!(proxied, direct);
    assert_eq!(proxied.as_bool(), Some(true));
}

#[test]
fn objects_pass_through_by_identity() {
    let handle = Value::object(String::from("session"));
    let contract = ContractDescriptor::new("Echo").method("echo", [ValueKind::Object]);
    let echo = DynamicObject::new("LegacyEcho").with_method("echo", 1, |args| Ok(args[0].clone()));

    let proxy = as_contract(contract).proxy(Some(Arc::new(echo))).unwrap();
    let returned = proxy.invoke("echo", &[handle.clone()]).unwrap();

    assert_eq!(returned, handle);
    assert_ne!(returned, Value::object(String::from("session")));
}

#[test]
fn null_wrapped_object() {
    let factory = as_contract(ContractDescriptor::new("Anything"));
    assert!(factory.proxy(None).is_none());
}
