//! # Dispatcher configuration.
//!
//! Provides [`DispatcherConfig`] centralized settings for a [`Dispatcher`](crate::Dispatcher).
//!
//! Config is passed once, at construction:
//! - `Dispatcher::new(source)` uses [`DispatcherConfig::default`]
//! - `Dispatcher::builder(source).with_config(cfg).build()` uses `cfg`
//!
//! ## Sentinel values
//! - `category_capacity = 0` → no preallocation (sequences grow on demand)

/// Configuration of a dispatcher.
///
/// ## Field semantics
/// - `category_capacity`: initial capacity of a category's callback sequence
/// - `prune_empty`: drop a category from the table once its last registration is removed
/// - `trace_dispatch`: emit a `trace`-level record for every callback invocation
///
/// None of these change dispatch results: an emptied category and an absent one
/// both dispatch as a successful no-op.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatcherConfig {
    /// Capacity reserved for a category's sequence on its first registration.
    pub category_capacity: usize,

    /// Remove a category's entry when it becomes empty.
    ///
    /// - `false` = keep the empty entry (it is reused by later registrations)
    /// - `true` = release it, keeping the table small when categories churn
    pub prune_empty: bool,

    /// Trace each callback invocation (`tracing::trace!`).
    ///
    /// Failures are always logged at `debug` level regardless of this flag.
    pub trace_dispatch: bool,
}

impl DispatcherConfig {
    /// Returns the per-category preallocation as an `Option`.
    ///
    /// - `None` → no preallocation
    /// - `Some(n)` → reserve `n` slots
    #[inline]
    pub fn preallocation(&self) -> Option<usize> {
        if self.category_capacity == 0 {
            None
        } else {
            Some(self.category_capacity)
        }
    }
}

impl Default for DispatcherConfig {
    /// Default configuration:
    ///
    /// - `category_capacity = 4` (a handful of callbacks per category)
    /// - `prune_empty = false` (emptied categories stay in the table)
    /// - `trace_dispatch = true`
    fn default() -> Self {
        Self {
            category_capacity: 4,
            prune_empty: false,
            trace_dispatch: true,
        }
    }
}
