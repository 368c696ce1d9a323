//! # Function-backed callback (`CallbackFn`)
//!
//! [`CallbackFn`] wraps a closure `F: Fn(&Event<S, P>) -> Result<(), CallbackError>`
//! together with a name used in logs.
//!
//! ## Example
//! ```rust
//! use evdispatch::{CallbackError, CallbackFn, CallbackRef, Event};
//!
//! let cb: CallbackRef<&'static str, String> =
//!     CallbackFn::arc("printer", |ev: &Event<&'static str, String>| {
//!         println!("{}", ev.payload());
//!         Ok::<_, CallbackError>(())
//!     });
//!
//! assert_eq!(cb.name(), "printer");
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use crate::callbacks::callback::Callback;
use crate::error::CallbackError;
use crate::events::Event;

/// Function-backed callback implementation.
#[derive(Debug)]
pub struct CallbackFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> CallbackFn<F> {
    /// Creates a new function-backed callback.
    ///
    /// Prefer [`CallbackFn::arc`] when you immediately need a [`CallbackRef`](crate::CallbackRef).
    pub fn new<S, P>(name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        F: Fn(&Event<S, P>) -> Result<(), CallbackError>,
    {
        Self { name: name.into(), f }
    }

    /// Creates the callback and returns it as a shared handle.
    ///
    /// Every call allocates a new handle: two `arc` calls with the same closure
    /// are distinct callbacks for [`Dispatcher::remove_callback`](crate::Dispatcher::remove_callback).
    pub fn arc<S, P>(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self>
    where
        F: Fn(&Event<S, P>) -> Result<(), CallbackError>,
    {
        Arc::new(Self::new(name, f))
    }
}

impl<S, P, F> Callback<S, P> for CallbackFn<F>
where
    F: Fn(&Event<S, P>) -> Result<(), CallbackError> + Send + Sync + 'static,
{
    fn call(&self, event: &Event<S, P>) -> Result<(), CallbackError> {
        (self.f)(event)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventCategory;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_calls_closure() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let cb = CallbackFn::new("counter", move |ev: &Event<(), u32>| {
            counter.fetch_add(*ev.payload() as usize, Ordering::SeqCst);
            Ok(())
        });

        let ev = Event::new(EventCategory::COMMIT, (), 5);
        cb.call(&ev).unwrap();
        cb.call(&ev).unwrap();

        assert_eq!(hits.load(Ordering::SeqCst), 10);
        assert_eq!(Callback::<(), u32>::name(&cb), "counter");
    }

    #[test]
    fn test_propagates_error() {
        let cb = CallbackFn::new("rejecter", |_ev: &Event<(), ()>| {
            Err(CallbackError::fail("rejected"))
        });
        let err = cb.call(&Event::new(EventCategory::UNKNOWN, (), ())).unwrap_err();
        assert_eq!(err.to_string(), "callback failed: rejected");
    }
}
