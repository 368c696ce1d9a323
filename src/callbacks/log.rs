//! # LogCallback: tracing event printer
//!
//! A minimal callback that writes every received [`Event`] through
//! `tracing::info!`. Use it for tests, demos, or to watch a category while
//! debugging. It never fails, so it never stops a dispatch.
//!
//! ## Example output (fmt subscriber)
//! ```text
//! INFO evdispatch::callbacks::log: event seq=0 category=messageReceived source="arni" payload="First Hello World!"
//! ```

use std::fmt::Debug;

use crate::callbacks::callback::Callback;
use crate::error::CallbackError;
use crate::events::Event;

/// Tracing-backed logging callback.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogCallback;

impl LogCallback {
    /// Construct a new [`LogCallback`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<S, P> Callback<S, P> for LogCallback
where
    S: Debug,
    P: Debug,
{
    fn call(&self, e: &Event<S, P>) -> Result<(), CallbackError> {
        tracing::info!(
            seq = e.seq(),
            category = %e.category(),
            source = ?e.source(),
            payload = ?e.payload(),
            "event"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "log"
    }
}
