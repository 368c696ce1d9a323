//! Event data model: categories and event records.
//!
//! ## Contents
//! - [`EventCategory`] open, `u16`-backed category identifier
//! - [`Event`] immutable record handed to every callback of one dispatch
//! - [`AnyPayload`] untyped payload alias
//!
//! Events are produced by [`Dispatcher::dispatch`](crate::Dispatcher::dispatch)
//! only for the duration of one fan-out. Nothing here is stored or queued.

mod category;
mod event;

pub use category::EventCategory;
pub use event::{AnyPayload, Event};
