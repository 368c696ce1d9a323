//! # Event categories.
//!
//! [`EventCategory`] is the key callbacks are grouped under. It is an
//! **open** enumeration: a newtype over `u16` with a few predefined constants.
//! Any other id is a valid category and can be registered and dispatched like
//! the predefined ones.
//!
//! ## Predefined categories
//! ```text
//! id  const        display
//! 0   UNKNOWN      unknown
//! 1   COMMIT       entryCommitted
//! 2   MESSAGE      messageReceived
//! 3   FILE_OPENED  fileOpened
//! ```
//!
//! Custom categories display as `category#<id>`.
//!
//! ## Example
//! ```rust
//! use evdispatch::EventCategory;
//!
//! const BUILD_FINISHED: EventCategory = EventCategory::new(100);
//!
//! assert_eq!(EventCategory::MESSAGE.to_string(), "messageReceived");
//! assert_eq!(BUILD_FINISHED.to_string(), "category#100");
//! assert!(!BUILD_FINISHED.is_predefined());
//! ```

use std::fmt;

/// Display names of the predefined categories, indexed by id.
const PREDEFINED_NAMES: [&str; 4] = ["unknown", "entryCommitted", "messageReceived", "fileOpened"];

/// Identifier of an event category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EventCategory(u16);

impl EventCategory {
    /// Fallback category for events without a more specific kind.
    pub const UNKNOWN: EventCategory = EventCategory(0);
    /// An entry was committed.
    pub const COMMIT: EventCategory = EventCategory(1);
    /// A message was received.
    pub const MESSAGE: EventCategory = EventCategory(2);
    /// A file was opened.
    pub const FILE_OPENED: EventCategory = EventCategory(3);

    /// Creates a category from its raw id.
    #[inline]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    #[inline]
    pub const fn id(self) -> u16 {
        self.0
    }

    /// Returns the stable display name of a predefined category,
    /// or `None` for custom ones.
    pub fn name(self) -> Option<&'static str> {
        PREDEFINED_NAMES.get(usize::from(self.0)).copied()
    }

    /// True for the predefined categories (`UNKNOWN`..=`FILE_OPENED`).
    #[inline]
    pub fn is_predefined(self) -> bool {
        self.name().is_some()
    }
}

impl From<u16> for EventCategory {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

impl From<EventCategory> for u16 {
    fn from(category: EventCategory) -> Self {
        category.0
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "category#{}", self.0),
        }
    }
}
