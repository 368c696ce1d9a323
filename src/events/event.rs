//! # Event records passed to callbacks.
//!
//! An [`Event`] bundles the [`EventCategory`] being dispatched, the source
//! identity of the dispatcher that produced it, and the payload supplied to
//! [`Dispatcher::dispatch`](crate::Dispatcher::dispatch).
//!
//! Events are created fresh for each dispatch call and are immutable: all
//! fields are private and exposed through read accessors only. The dispatcher
//! does not keep them after the fan-out returns.
//!
//! ## Ordering
//! Each event has a process-wide sequence number (`seq`) that increases
//! monotonically. Use it to restore the order of events collected from several
//! dispatchers or threads.
//!
//! ## Payload typing
//! The payload type `P` is fixed per dispatcher and shared by all categories.
//! When categories carry different shapes, use an enum as `P` and let the
//! category tell which variant to expect. [`AnyPayload`] keeps the payload
//! fully untyped; see [`Event::payload_as`].
//!
//! ## Example
//! ```rust
//! use evdispatch::{Event, EventCategory};
//!
//! let ev = Event::new(EventCategory::MESSAGE, "arni", "hello");
//!
//! assert_eq!(ev.category(), EventCategory::MESSAGE);
//! assert_eq!(*ev.source(), "arni");
//! assert_eq!(*ev.payload(), "hello");
//! ```

use std::any::Any;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::SystemTime;

use super::category::EventCategory;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Untyped payload, for dispatchers that carry arbitrary values.
pub type AnyPayload = Arc<dyn Any + Send + Sync>;

/// One occurrence of an event category.
///
/// - `category`: what happened
/// - `source`: identity of the producing dispatcher
/// - `payload`: caller-supplied value
/// - `seq` / `at`: ordering and timestamp metadata
#[derive(Debug)]
pub struct Event<S, P> {
    seq: u64,
    at: SystemTime,
    category: EventCategory,
    source: S,
    payload: P,
}

impl<S, P> Event<S, P> {
    /// Creates an event with the current timestamp and the next sequence number.
    pub fn new(category: EventCategory, source: S, payload: P) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            category,
            source,
            payload,
        }
    }

    /// Category of this event.
    #[inline]
    pub fn category(&self) -> EventCategory {
        self.category
    }

    /// Source identity of the dispatcher that produced this event.
    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Payload supplied by the dispatch caller.
    #[inline]
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Globally unique, monotonically increasing sequence number.
    #[inline]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Wall-clock creation time.
    #[inline]
    pub fn at(&self) -> SystemTime {
        self.at
    }
}

impl<S> Event<S, AnyPayload> {
    /// Downcasts an untyped payload to `T`.
    ///
    /// Returns `None` if the payload holds a different type.
    ///
    /// ## Example
    /// ```rust
    /// use std::sync::Arc;
    /// use evdispatch::{AnyPayload, Event, EventCategory};
    ///
    /// let payload: AnyPayload = Arc::new(String::from("First Hello World!"));
    /// let ev = Event::new(EventCategory::MESSAGE, "arni", payload);
    ///
    /// assert_eq!(ev.payload_as::<String>().map(String::as_str), Some("First Hello World!"));
    /// assert!(ev.payload_as::<u32>().is_none());
    /// ```
    pub fn payload_as<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_is_monotonic() {
        let a = Event::new(EventCategory::COMMIT, (), 1u32);
        let b = Event::new(EventCategory::COMMIT, (), 2u32);
        assert!(b.seq() > a.seq());
    }

    #[test]
    fn test_accessors() {
        let ev = Event::new(EventCategory::FILE_OPENED, String::from("editor"), vec![1u8, 2, 3]);
        assert_eq!(ev.category(), EventCategory::FILE_OPENED);
        assert_eq!(ev.source(), "editor");
        assert_eq!(ev.payload(), &vec![1u8, 2, 3]);
    }

    #[test]
    fn test_any_payload_downcast() {
        let payload: AnyPayload = Arc::new(42i64);
        let ev = Event::new(EventCategory::UNKNOWN, "src", payload);
        assert_eq!(ev.payload_as::<i64>(), Some(&42));
        assert_eq!(ev.payload_as::<i32>(), None);
    }
}
