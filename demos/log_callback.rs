//! # Example: log_callback
//!
//! Attaches the built-in [`LogCallback`] to a few categories of an untyped
//! ([`AnyPayload`]) dispatcher and removes it again by [`RegistrationId`].
//!
//! ## Run
//! Requires the `logging` feature to export [`LogCallback`].
//! ```bash
//! cargo run --example log_callback --features logging
//! ```

use std::sync::Arc;

use evdispatch::{AnyPayload, CallbackRef, Dispatcher, EventCategory, LogCallback};

const BUILD_FINISHED: EventCategory = EventCategory::new(100);

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let d: Arc<Dispatcher<Arc<str>, AnyPayload>> = Arc::new(Dispatcher::new(Arc::from("editor")));
    let log: CallbackRef<Arc<str>, AnyPayload> = Arc::new(LogCallback::new());

    let ids = [EventCategory::FILE_OPENED, EventCategory::COMMIT, BUILD_FINISHED]
        .map(|category| (category, d.register(category, Arc::clone(&log))));

    d.dispatch(EventCategory::FILE_OPENED, Arc::new("src/main.rs"))?;
    d.dispatch(EventCategory::COMMIT, Arc::new(0x5eed_u32))?;
    d.dispatch(BUILD_FINISHED, Arc::new(("release", true)))?;

    for (category, id) in ids {
        d.remove(category, id);
    }
    // No callbacks left: a silent no-op.
    d.dispatch(BUILD_FINISHED, Arc::new(()))?;
    println!("categories with callbacks: {:?}", d.categories());
    Ok(())
}
