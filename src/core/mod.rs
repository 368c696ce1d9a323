//! Dispatcher core: registration table, configuration and fan-out.
//!
//! The public API from this module is [`Dispatcher`], its builder and config,
//! and the [`RegistrationId`] handle returned by registration.
//!
//! Internal modules:
//! - [`table`]: category → ordered registrations, no locking;
//! - [`dispatcher`]: locking, dispatch loop, logging;
//! - [`builder`]: dispatcher construction with a custom config;
//! - [`config`]: dispatcher settings.

mod builder;
mod config;
mod dispatcher;
mod table;

pub use builder::DispatcherBuilder;
pub use config::DispatcherConfig;
pub use dispatcher::Dispatcher;
pub use table::RegistrationId;
