//! Compile-time forwarding proxies.
//!
//! When both the target contract and the wrapped object's contract are Rust
//! traits with the same methods, [`forwarding_proxy!`](crate::forwarding_proxy)
//! writes the adapter: a struct holding the wrapped value whose target-trait
//! methods call the same-named source-trait methods. A missing or mismatched
//! method is then a compile error instead of a call-time one.

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

/// Builds a boxed `Self` (a trait object type) around a wrapped `W`.
///
/// Implemented for `dyn Target` by [`forwarding_proxy!`](crate::forwarding_proxy).
pub trait Substitute<W> {
    fn substitute(wrapped: W) -> Box<Self>;
}

/// Produces forwarding proxies for the contract `C` (a `dyn Trait` type).
pub struct ProxyFactory<C: ?Sized> {
    contract: PhantomData<fn() -> Box<C>>,
}

impl<C: ?Sized> ProxyFactory<C> {
    pub fn new() -> Self {
        Self {
            contract: PhantomData,
        }
    }

    /// Wrap `wrapped` in a fresh proxy implementing `C`. `None` stays `None`.
    pub fn proxy<W>(&self, wrapped: Option<W>) -> Option<Box<C>>
    where
        C: Substitute<W>,
    {
        let wrapped = wrapped?;
        log::debug!(
            "synthesizing {} proxy around {}",
            type_name::<C>(),
            type_name::<W>()
        );
        Some(C::substitute(wrapped))
    }
}

/// Bind a forwarding proxy factory to the contract `C`.
pub fn proxy_factory<C: ?Sized>() -> ProxyFactory<C> {
    ProxyFactory::new()
}

impl<C: ?Sized> Clone for ProxyFactory<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for ProxyFactory<C> {}

impl<C: ?Sized> Default for ProxyFactory<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> fmt::Debug for ProxyFactory<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProxyFactory<{}>", type_name::<C>())
    }
}

/// Generate a forwarding proxy from one trait to another with the same methods.
///
/// ```rust
/// use beans_legacy_adapter::forwarding_proxy;
/// use beans_legacy_adapter::proxy::proxy_factory;
///
/// pub trait Greeter {
///     fn greet(&self, name: &str) -> String;
/// }
///
/// pub trait LegacyGreeter {
///     fn greet(&self, name: &str) -> String;
/// }
///
/// forwarding_proxy! {
///     /// A legacy greeter seen as a current one.
///     pub struct GreeterProxy: Greeter => LegacyGreeter {
///         fn greet(&self, name: &str) -> String;
///     }
/// }
///
/// struct Old;
///
/// impl LegacyGreeter for Old {
///     fn greet(&self, name: &str) -> String {
///         format!("hello {}", name)
///     }
/// }
///
/// let greeter = proxy_factory::<dyn Greeter>().proxy(Some(Old)).unwrap();
/// assert_eq!(greeter.greet("ann"), "hello ann");
/// ```
///
/// Both traits must be in scope where the macro is invoked, and the target
/// trait must be defined in the invoking crate.
#[macro_export]
macro_rules! forwarding_proxy {
    (
        $(#[$meta:meta])*
        $vis:vis struct $proxy:ident: $target:ident => $source:ident {
            $(fn $method:ident(&self $(, $arg:ident: $ty:ty)*) $(-> $ret:ty)?;)*
        }
    ) => {
        $(#[$meta])*
        $vis struct $proxy<W>(pub W);

        impl<W: $source> $target for $proxy<W> {
            $(
                fn $method(&self $(, $arg: $ty)*) $(-> $ret)? {
                    <W as $source>::$method(&self.0 $(, $arg)*)
                }
            )*
        }

        impl<W: $source + 'static> $crate::proxy::Substitute<W> for dyn $target {
            fn substitute(wrapped: W) -> ::std::boxed::Box<Self> {
                ::std::boxed::Box::new($proxy(wrapped))
            }
        }
    };
}
