//! Key-value persistence for Jotter
//!
//! Everything Jotter persists lives under a handful of string keys, the way a
//! browser widget keeps its state in local storage. Backends only need to
//! store and return opaque strings.

mod memory;
mod migrations;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::Result;

/// Key holding the JSON-encoded note list
pub const NOTES_KEY: &str = "notes";

/// Key holding the theme preference (`light` or `dark`)
pub const THEME_KEY: &str = "theme";

/// Trait for string-keyed storage backends
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` when absent
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}
