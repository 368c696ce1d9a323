//! # Callbacks invoked by the dispatcher.
//!
//! This module provides the [`Callback`] trait and built-in implementations.
//!
//! ## Architecture
//! ```text
//! Dispatcher::dispatch(category, payload)
//!     │  builds Event { category, source, payload }
//!     ▼
//! [cb #0] ─► [cb #1] ─► ... ─► [cb #n-1]      (registration order, calling thread)
//!     │
//!     └─ first Err ─► stop, return it to the dispatch caller
//! ```
//!
//! ## Callback types
//! - [`CallbackFn`] wraps a closure and a name
//! - `LogCallback` writes events through `tracing` (feature `logging`)
//! - custom types implement [`Callback`] directly

mod callback;
mod callback_fn;
#[cfg(feature = "logging")]
mod log;

pub use callback::{Callback, CallbackRef};
pub use callback_fn::CallbackFn;
#[cfg(feature = "logging")]
pub use log::LogCallback;
