//! # Dispatcher: ordered, synchronous, fail-fast fan-out.
//!
//! The [`Dispatcher`] owns a fixed source identity and a [`RegistrationTable`]
//! behind a reader/writer lock. Hosts register callbacks per
//! [`EventCategory`], then dispatch payloads to them.
//!
//! ## Key responsibilities
//! - keep callbacks per category in **registration order**
//! - build one [`Event`] per dispatch and hand it to every callback, in order,
//!   on the calling thread
//! - stop at the first callback error and return it **untouched**
//! - allow register/remove/dispatch from many threads at once
//!
//! ## High-level architecture
//! ```text
//! register(cat, cb) ──► write lock ──► table[cat].push(cb) ──► RegistrationId
//! remove(cat, id)   ──► write lock ──► table[cat].remove(first match)
//!
//! dispatch(cat, payload)
//!   └─► read lock (held for the whole fan-out)
//!         ├─ table[cat] empty/absent ─► Ok(())
//!         └─ Event { cat, source.clone(), payload }
//!              cb #0 ─► Ok ─► cb #1 ─► Ok ─► ... ─► Ok(())
//!                              └─► Err(e) ─► return Err(e)  (cb #2.. never run)
//! ```
//!
//! ## Rules
//! - Writers (register/remove/clear) serialize with each other and with dispatches.
//! - Dispatches share the lock and may run in parallel, on any categories.
//! - An in-flight dispatch never observes a concurrent register/remove: it sees
//!   the sequence as it was when it acquired the lock.
//! - A top-level dispatch takes the fair read lock: it queues behind a waiting
//!   writer, so writers only wait for the dispatches already in flight.
//! - Inside a callback, reads of the dispatcher running it (`dispatch`,
//!   `callback_count`, `categories`, `is_empty`, `Debug`) re-enter the read lock
//!   the thread already holds and never block behind a queued writer.
//!   A callback that registers or removes on the dispatcher invoking it deadlocks.
//! - The lock does not poison: a panicking callback unwinds out of `dispatch`
//!   and the dispatcher stays usable.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use evdispatch::{CallbackFn, CallbackRef, Dispatcher, Event, EventCategory};
//!
//! let d: Dispatcher<&'static str, String> = Dispatcher::new("arni");
//!
//! let handler1: CallbackRef<&'static str, String> =
//!     CallbackFn::arc("handler1", |ev: &Event<&'static str, String>| {
//!         println!("In Handler1: {}", ev.payload());
//!         Ok(())
//!     });
//! let handler2: CallbackRef<&'static str, String> =
//!     CallbackFn::arc("handler2", |ev: &Event<&'static str, String>| {
//!         println!("In Handler2: {}", ev.payload());
//!         Ok(())
//!     });
//!
//! d.register(EventCategory::MESSAGE, Arc::clone(&handler1));
//! d.register(EventCategory::MESSAGE, handler2);
//! d.dispatch(EventCategory::MESSAGE, "First Hello World!".into()).unwrap();
//!
//! d.remove_callback(EventCategory::MESSAGE, &handler1);
//! d.dispatch(EventCategory::MESSAGE, "Second Hello World!".into()).unwrap();
//!
//! assert_eq!(d.callback_count(EventCategory::MESSAGE), 1);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::callbacks::CallbackRef;
use crate::core::builder::DispatcherBuilder;
use crate::core::config::DispatcherConfig;
use crate::core::table::{RegistrationId, RegistrationTable};
use crate::error::CallbackError;
use crate::events::{Event, EventCategory};

thread_local! {
    /// Addresses of the dispatchers running a fan-out on this thread.
    static DISPATCHING: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

/// Marks one dispatcher as dispatching on the current thread until dropped.
struct DispatchScope {
    addr: usize,
}

impl DispatchScope {
    fn enter(addr: usize) -> Self {
        DISPATCHING.with(|active| active.borrow_mut().push(addr));
        Self { addr }
    }

    fn is_active(addr: usize) -> bool {
        DISPATCHING.with(|active| active.borrow().contains(&addr))
    }
}

impl Drop for DispatchScope {
    fn drop(&mut self) {
        DISPATCHING.with(|active| {
            let mut active = active.borrow_mut();
            if let Some(pos) = active.iter().rposition(|&a| a == self.addr) {
                active.remove(pos);
            }
        });
    }
}

/// Per-source event dispatcher.
///
/// `S` is the source identity attached to every event (cloned per dispatch;
/// prefer cheap clones such as `&'static str` or `Arc<str>`).
/// `P` is the payload type shared by all categories.
///
/// `Dispatcher<S, P>` is `Send + Sync` whenever `S` is; share it with `Arc`.
pub struct Dispatcher<S, P> {
    source: S,
    cfg: DispatcherConfig,
    table: RwLock<RegistrationTable<S, P>>,
}

impl<S: 'static, P: 'static> Dispatcher<S, P> {
    /// Creates an initialized dispatcher with the given source and the default config.
    pub fn new(source: S) -> Self {
        Self::with_config(source, DispatcherConfig::default())
    }

    /// Returns a builder for a dispatcher with a custom [`DispatcherConfig`].
    pub fn builder(source: S) -> DispatcherBuilder<S, P> {
        DispatcherBuilder::new(source)
    }

    pub(crate) fn with_config(source: S, cfg: DispatcherConfig) -> Self {
        let table = RegistrationTable::new(cfg.preallocation(), cfg.prune_empty);
        Self {
            source,
            cfg,
            table: RwLock::new(table),
        }
    }

    /// Source identity attached to every event of this dispatcher.
    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Configuration this dispatcher was built with.
    #[inline]
    pub fn config(&self) -> &DispatcherConfig {
        &self.cfg
    }

    /// Appends `callback` to `category`'s sequence.
    ///
    /// Any category is accepted. Registering the same handle twice makes it run
    /// twice per dispatch; each registration gets its own id.
    pub fn register(&self, category: EventCategory, callback: CallbackRef<S, P>) -> RegistrationId {
        let name = callback.name().to_owned();
        let id = self.table.write().insert(category, callback);
        tracing::debug!(%category, callback = %name, registration = %id, "callback registered");
        id
    }

    /// Removes the registration `id` from `category`.
    ///
    /// Unknown ids and categories are a silent no-op. Returns whether a
    /// registration was removed.
    pub fn remove(&self, category: EventCategory, id: RegistrationId) -> bool {
        let removed = self.table.write().remove(category, id);
        if removed {
            tracing::debug!(%category, registration = %id, "callback removed");
        }
        removed
    }

    /// Removes the earliest registration under `category` of this exact
    /// callback handle (pointer identity, not value equality).
    ///
    /// Exactly one occurrence is removed per call; later duplicates stay.
    /// Absent handles are a silent no-op. Returns whether a registration was removed.
    pub fn remove_callback<C: ?Sized>(&self, category: EventCategory, callback: &Arc<C>) -> bool {
        let removed = self.table.write().remove_callback(category, callback);
        if removed {
            tracing::debug!(%category, "callback removed by handle");
        }
        removed
    }

    /// Removes every registration of `category`; returns how many were removed.
    pub fn clear(&self, category: EventCategory) -> usize {
        let n = self.table.write().clear(category);
        if n > 0 {
            tracing::debug!(%category, removed = n, "category cleared");
        }
        n
    }

    /// Number of callbacks currently registered under `category`.
    pub fn callback_count(&self, category: EventCategory) -> usize {
        self.read_table().get(category).len()
    }

    /// Sorted list of categories with at least one registration.
    pub fn categories(&self) -> Vec<EventCategory> {
        self.read_table().categories()
    }

    /// True if no category has a registration.
    pub fn is_empty(&self) -> bool {
        self.read_table().is_empty()
    }

    fn addr(&self) -> usize {
        (self as *const Self).cast::<()>() as usize
    }

    /// Shared access to the table.
    ///
    /// Re-enters the read lock when this thread is already dispatching on this
    /// dispatcher; otherwise queues fairly behind waiting writers.
    fn read_table(&self) -> RwLockReadGuard<'_, RegistrationTable<S, P>> {
        if DispatchScope::is_active(self.addr()) {
            self.table.read_recursive()
        } else {
            self.table.read()
        }
    }
}

impl<S: Clone + 'static, P: 'static> Dispatcher<S, P> {
    /// Dispatches `payload` to every callback of `category`, in registration order.
    ///
    /// Callbacks run synchronously on the calling thread. The first callback
    /// error stops the fan-out and is returned as is; the callbacks after it are
    /// not invoked. A category without callbacks succeeds without doing anything.
    ///
    /// # Errors
    /// Returns the [`CallbackError`] of the first failing callback.
    pub fn dispatch(&self, category: EventCategory, payload: P) -> Result<(), CallbackError> {
        let table = self.read_table();
        let regs = table.get(category);
        if regs.is_empty() {
            return Ok(());
        }
        let _scope = DispatchScope::enter(self.addr());

        let event = Event::new(category, self.source.clone(), payload);
        for (position, reg) in regs.iter().enumerate() {
            if self.cfg.trace_dispatch {
                tracing::trace!(
                    %category,
                    seq = event.seq(),
                    callback = reg.callback.name(),
                    registration = %reg.id,
                    "invoking callback"
                );
            }

            if let Err(err) = reg.callback.call(&event) {
                tracing::debug!(
                    %category,
                    seq = event.seq(),
                    callback = reg.callback.name(),
                    position,
                    skipped = regs.len() - position - 1,
                    error = %err,
                    "callback failed; aborting dispatch"
                );
                return Err(err);
            }
        }
        Ok(())
    }
}

impl<S: fmt::Debug + 'static, P: 'static> fmt::Debug for Dispatcher<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("source", &self.source)
            .field("config", &self.cfg)
            .field("categories", &self.categories())
            .finish()
    }
}
