//! # Example: hello
//!
//! Registers two handlers for the same category, dispatches, removes one
//! handler, and dispatches again.
//!
//! ## Flow
//! ```text
//! Dispatcher::new("arni")
//!     ├─► register(MESSAGE, handler1)
//!     ├─► register(MESSAGE, handler2)
//!     ├─► dispatch(MESSAGE, "First Hello World!")   → handler1, handler2
//!     ├─► remove_callback(MESSAGE, handler1)
//!     └─► dispatch(MESSAGE, "Second Hello World!")  → handler2
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=evdispatch=debug cargo run --example hello
//! ```

use std::sync::Arc;

use evdispatch::{CallbackFn, CallbackRef, Dispatcher, Event, EventCategory};
use tracing_subscriber::EnvFilter;

type Source = &'static str;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let d: Dispatcher<Source, String> = Dispatcher::new("arni");

    let handler1: CallbackRef<Source, String> =
        CallbackFn::arc("handler1", |e: &Event<Source, String>| {
            println!("In Handler1");
            println!("{}", e.payload());
            Ok(())
        });
    let handler2: CallbackRef<Source, String> =
        CallbackFn::arc("handler2", |e: &Event<Source, String>| {
            println!("In Handler2");
            println!("{}", e.payload());
            Ok(())
        });

    d.register(EventCategory::MESSAGE, Arc::clone(&handler1));
    d.register(EventCategory::MESSAGE, Arc::clone(&handler2));

    d.dispatch(EventCategory::MESSAGE, "First Hello World!".to_string())?;
    d.remove_callback(EventCategory::MESSAGE, &handler1);

    d.dispatch(EventCategory::MESSAGE, "Second Hello World!".to_string())?;
    Ok(())
}
