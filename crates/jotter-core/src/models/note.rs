//! Note model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::Error;

/// An opaque, unique note identifier.
///
/// Fresh ids are UUID v7 strings (time-sortable with random tail bits), so
/// rapid successive creation cannot collide. Ids read back from storage are
/// kept verbatim, whatever scheme produced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Create a new unique note ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NoteId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidInput("Note ID cannot be empty".into()));
        }
        Ok(Self(s.to_string()))
    }
}

/// A note in the system
///
/// Serialized as `{"id", "title", "description"}`, which is also the shape of
/// each element under the `notes` storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier, immutable after creation
    pub id: NoteId,
    /// Note title
    pub title: String,
    /// Free text body, may be empty
    pub description: String,
}

impl Note {
    /// Create a new note with a freshly generated id
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: NoteId::new(),
            title: title.into(),
            description: description.into(),
        }
    }
}
