//! # Dispatcher builder.
//!
//! [`DispatcherBuilder`] collects a source and a [`DispatcherConfig`] and
//! produces a ready [`Dispatcher`]. `Dispatcher::new` is the shortcut for the
//! default config.

use std::marker::PhantomData;

use crate::core::{config::DispatcherConfig, dispatcher::Dispatcher};

/// Builder for constructing a [`Dispatcher`] with a custom configuration.
///
/// ```rust
/// use evdispatch::{Dispatcher, DispatcherConfig};
///
/// let d: Dispatcher<&'static str, u64> = Dispatcher::builder("indexer")
///     .with_config(DispatcherConfig::default())
///     .prune_empty(true)
///     .build();
///
/// assert!(d.config().prune_empty);
/// ```
pub struct DispatcherBuilder<S, P> {
    source: S,
    cfg: DispatcherConfig,
    _payload: PhantomData<fn() -> P>,
}

impl<S: 'static, P: 'static> DispatcherBuilder<S, P> {
    /// Creates a new builder with the given source and the default configuration.
    pub fn new(source: S) -> Self {
        Self {
            source,
            cfg: DispatcherConfig::default(),
            _payload: PhantomData,
        }
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, cfg: DispatcherConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Sets [`DispatcherConfig::category_capacity`].
    pub fn category_capacity(mut self, capacity: usize) -> Self {
        self.cfg.category_capacity = capacity;
        self
    }

    /// Sets [`DispatcherConfig::prune_empty`].
    pub fn prune_empty(mut self, prune: bool) -> Self {
        self.cfg.prune_empty = prune;
        self
    }

    /// Sets [`DispatcherConfig::trace_dispatch`].
    pub fn trace_dispatch(mut self, trace: bool) -> Self {
        self.cfg.trace_dispatch = trace;
        self
    }

    /// Builds the dispatcher.
    pub fn build(self) -> Dispatcher<S, P> {
        Dispatcher::with_config(self.source, self.cfg)
    }
}
