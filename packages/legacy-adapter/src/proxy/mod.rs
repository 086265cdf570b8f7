//! Proxies for objects with no adapter type.
//!
//! Two ways to present an object under a contract it does not implement:
//!
//! - [`forwarding_proxy!`](crate::forwarding_proxy) plus [`proxy_factory`]:
//!   for Rust traits with identical methods. The forwarding struct is
//!   generated at compile time and checked by the compiler.
//! - [`as_contract`] plus [`DynamicProxy`]: for objects reachable only by
//!   method name ([`Dynamic`]). Calls are checked against a
//!   [`ContractDescriptor`] when they are made.
//!
//! Both factories are cheap, reusable, and map `None` to `None`.

mod contract;
mod dynamic;
mod forwarding;
mod value;

pub use contract::{ContractDescriptor, MethodSignature};
pub use dynamic::{as_contract, Dynamic, DynamicObject, DynamicProxy, DynamicProxyFactory};
pub use forwarding::{proxy_factory, ProxyFactory, Substitute};
pub use value::{Value, ValueKind};
