//! # evdispatch
//!
//! **evdispatch** is a minimal in-process publish/subscribe library for Rust.
//!
//! Hosts register callbacks against an [`EventCategory`] on a per-source
//! [`Dispatcher`]. Dispatching a payload for that category invokes every
//! registered callback synchronously, in registration order, with one immutable
//! [`Event`]. The first callback error stops the fan-out and is returned to the
//! caller.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   host code                       Dispatcher<S, P>  (source: S)
//!  ───────────                ┌─────────────────────────────────────────┐
//!  register(cat, cb) ───────► │ RwLock<RegistrationTable>               │
//!  remove(cat, id)   ───────► │   MESSAGE  ─► [cb A, cb B, cb A]        │
//!  remove_callback(cat, &cb)► │   COMMIT   ─► [cb C]                    │
//!                             │   #900     ─► [cb D]                    │
//!                             └───────────────────┬─────────────────────┘
//!  dispatch(cat, payload) ────────────────────────┘
//!        │  Event { category, source, payload, seq, at }
//!        ▼
//!   cb #0 ─► cb #1 ─► ... ─► cb #n-1      (calling thread, in order)
//!        └─ first Err(CallbackError) ─► returned as is, rest skipped
//! ```
//!
//! ### Concurrency
//! ```text
//! register / remove / clear   exclusive (write lock)
//! dispatch                    shared (read lock held for the whole fan-out)
//! ```
//! Concurrent dispatches proceed in parallel; writers wait for in-flight
//! dispatches and new dispatches queue behind a waiting writer. No timeouts:
//! a slow callback stalls its dispatch and any writer waiting behind it.
//! A callback may read (or dispatch on) the dispatcher invoking it, but must not
//! register or remove on it.
//!
//! ## Features
//! | Area              | Description                                                  | Key types / traits                        |
//! |-------------------|--------------------------------------------------------------|-------------------------------------------|
//! | **Dispatch**      | Register, remove, and fan out to callbacks per category.      | [`Dispatcher`], [`RegistrationId`]        |
//! | **Events**        | Open category set and immutable event records.               | [`EventCategory`], [`Event`], [`AnyPayload`] |
//! | **Callbacks**     | Trait and closure wrapper for handlers.                      | [`Callback`], [`CallbackFn`], [`CallbackRef`] |
//! | **Errors**        | Single fail-fast error kind.                                 | [`CallbackError`]                         |
//! | **Configuration** | Dispatcher settings and builder.                             | [`DispatcherConfig`], [`DispatcherBuilder`] |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in `LogCallback` _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use evdispatch::{CallbackError, CallbackFn, CallbackRef, Dispatcher, Event, EventCategory};
//!
//! type Ev = Event<&'static str, String>;
//!
//! let d: Dispatcher<&'static str, String> = Dispatcher::new("arni");
//!
//! let failing: CallbackRef<&'static str, String> =
//!     CallbackFn::arc("failing", |_ev: &Ev| Err(CallbackError::fail("rejected")));
//! let never: CallbackRef<&'static str, String> =
//!     CallbackFn::arc("never", |_ev: &Ev| panic!("not reached"));
//!
//! d.register(EventCategory::COMMIT, failing);
//! d.register(EventCategory::COMMIT, never);
//!
//! let err = d.dispatch(EventCategory::COMMIT, "abc123".to_string()).unwrap_err();
//! assert_eq!(err.to_string(), "callback failed: rejected");
//! ```
mod callbacks;
mod core;
mod error;
mod events;

// ---- Public re-exports ----

pub use callbacks::{Callback, CallbackFn, CallbackRef};
pub use crate::core::{Dispatcher, DispatcherBuilder, DispatcherConfig, RegistrationId};
pub use error::CallbackError;
pub use events::{AnyPayload, Event, EventCategory};

// Optional: expose a simple built-in logging callback (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use callbacks::LogCallback;
