//! # Callback abstraction.
//!
//! A [`Callback`] is host code invoked once per registration per dispatch. It
//! receives the immutable [`Event`] and returns `Ok(())` or a
//! [`CallbackError`]. An error stops the current dispatch (fail-fast).
//!
//! The dispatcher stores callbacks as [`CallbackRef`], a shared
//! `Arc<dyn Callback<S, P>>`. Registering the same handle twice is allowed and
//! makes it run twice per dispatch.
//!
//! # Example
//! ```
//! use evdispatch::{Callback, CallbackError, Event};
//!
//! struct CountBytes;
//!
//! impl Callback<&'static str, Vec<u8>> for CountBytes {
//!     fn name(&self) -> &str { "count-bytes" }
//!
//!     fn call(&self, event: &Event<&'static str, Vec<u8>>) -> Result<(), CallbackError> {
//!         if event.payload().is_empty() {
//!             return Err(CallbackError::fail("empty payload"));
//!         }
//!         Ok(())
//!     }
//! }
//! ```

use std::sync::Arc;

use crate::error::CallbackError;
use crate::events::Event;

/// Shared handle to a registered callback.
pub type CallbackRef<S, P> = Arc<dyn Callback<S, P>>;

/// Synchronous event handler.
///
/// ### Implementation requirements
/// - Runs on the dispatching thread while the dispatcher's table is read-locked:
///   keep it short and do not block.
/// - Must not register or remove callbacks on the dispatcher that is invoking it.
///   Reading it (`dispatch`, `callback_count`, `categories`, `is_empty`, `Debug`)
///   is fine, even while a writer on another thread is waiting.
/// - Report failures by returning `Err`; the remaining callbacks are skipped.
pub trait Callback<S, P>: Send + Sync + 'static {
    /// Handles one event.
    fn call(&self, event: &Event<S, P>) -> Result<(), CallbackError>;

    /// Returns the callback name used in logs.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose; override it when possible.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
