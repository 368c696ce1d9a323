//! # Registration table - category → ordered callbacks.
//!
//! [`RegistrationTable`] is the plain data structure behind a dispatcher.
//! It has no locking of its own: the [`Dispatcher`](crate::Dispatcher) wraps it
//! in a reader/writer lock.
//!
//! ## Rules
//! - Sequences are append-only on insert: registration order is dispatch order.
//! - No deduplication: the same callback handle may appear several times,
//!   each occurrence with its own [`RegistrationId`].
//! - Removal never fails; removing something absent is a no-op returning `false`.
//! - A category is only present after at least one registration. With
//!   `prune_empty`, it disappears again once its sequence is empty.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::callbacks::CallbackRef;
use crate::events::EventCategory;

/// Opaque handle identifying one registration.
///
/// Returned by [`Dispatcher::register`](crate::Dispatcher::register) and
/// accepted by [`Dispatcher::remove`](crate::Dispatcher::remove). Ids are unique
/// per dispatcher and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegistrationId(u64);

impl fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "reg#{}", self.0)
    }
}

/// One registered callback.
pub(crate) struct Registration<S, P> {
    pub(crate) id: RegistrationId,
    pub(crate) callback: CallbackRef<S, P>,
}

/// Ordered callback sequences keyed by category.
pub(crate) struct RegistrationTable<S, P> {
    entries: HashMap<EventCategory, Vec<Registration<S, P>>>,
    next_id: u64,
    preallocation: Option<usize>,
    prune_empty: bool,
}

impl<S, P> RegistrationTable<S, P> {
    /// Creates an empty table.
    pub(crate) fn new(preallocation: Option<usize>, prune_empty: bool) -> Self {
        Self {
            entries: HashMap::new(),
            next_id: 0,
            preallocation,
            prune_empty,
        }
    }

    /// Appends `callback` to the end of `category`'s sequence.
    pub(crate) fn insert(
        &mut self,
        category: EventCategory,
        callback: CallbackRef<S, P>,
    ) -> RegistrationId {
        let id = RegistrationId(self.next_id);
        self.next_id += 1;

        let preallocation = self.preallocation;
        self.entries
            .entry(category)
            .or_insert_with(|| preallocation.map_or_else(Vec::new, Vec::with_capacity))
            .push(Registration { id, callback });
        id
    }

    /// Removes the registration with `id` from `category`.
    pub(crate) fn remove(&mut self, category: EventCategory, id: RegistrationId) -> bool {
        self.remove_first(category, |reg| reg.id == id)
    }

    /// Removes the earliest registration under `category` whose callback is the
    /// same allocation as `callback`.
    pub(crate) fn remove_callback<C: ?Sized>(
        &mut self,
        category: EventCategory,
        callback: &Arc<C>,
    ) -> bool {
        let target = Arc::as_ptr(callback).cast::<()>();
        self.remove_first(category, |reg| {
            Arc::as_ptr(&reg.callback).cast::<()>() == target
        })
    }

    /// Removes every registration under `category`; returns how many were removed.
    pub(crate) fn clear(&mut self, category: EventCategory) -> usize {
        if self.prune_empty {
            return self.entries.remove(&category).map_or(0, |regs| regs.len());
        }
        match self.entries.get_mut(&category) {
            Some(regs) => {
                let n = regs.len();
                regs.clear();
                n
            }
            None => 0,
        }
    }

    /// Registrations of `category` in dispatch order (empty if absent).
    pub(crate) fn get(&self, category: EventCategory) -> &[Registration<S, P>] {
        self.entries
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Sorted categories with at least one registration.
    pub(crate) fn categories(&self) -> Vec<EventCategory> {
        let mut out: Vec<EventCategory> = self
            .entries
            .iter()
            .filter(|(_, regs)| !regs.is_empty())
            .map(|(category, _)| *category)
            .collect();
        out.sort_unstable();
        out
    }

    /// True if no category holds a registration.
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }

    /// True if `category` has an entry, empty or not.
    #[cfg(test)]
    pub(crate) fn has_entry(&self, category: EventCategory) -> bool {
        self.entries.contains_key(&category)
    }

    // ---------------------------
    // Helpers
    // ---------------------------

    fn remove_first<F>(&mut self, category: EventCategory, pred: F) -> bool
    where
        F: Fn(&Registration<S, P>) -> bool,
    {
        let Some(regs) = self.entries.get_mut(&category) else {
            return false;
        };
        let Some(pos) = regs.iter().position(pred) else {
            return false;
        };

        // `Vec::remove` shifts the tail, keeping the order of the rest.
        regs.remove(pos);
        if self.prune_empty && regs.is_empty() {
            self.entries.remove(&category);
        }
        true
    }
}
