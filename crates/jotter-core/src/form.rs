//! Note form values and the submission mapping step

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::Note;

/// Name of the title form field
pub const TITLE_FIELD: &str = "title";

/// Name of the description form field
pub const DESCRIPTION_FIELD: &str = "description";

/// Current values of the note form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub title: String,
    pub description: String,
}

impl FormFields {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Snapshot the editable fields of a stored note
    #[must_use]
    pub fn from_note(note: &Note) -> Self {
        Self::new(note.title.clone(), note.description.clone())
    }

    /// Set a field by its form name, returning `false` for unknown names
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match name {
            TITLE_FIELD => self.title = value.into(),
            DESCRIPTION_FIELD => self.description = value.into(),
            _ => return false,
        }
        true
    }

    /// Clear both fields
    pub fn reset(&mut self) {
        self.title.clear();
        self.description.clear();
    }

    /// Whether both fields are empty
    pub fn is_blank(&self) -> bool {
        self.title.is_empty() && self.description.is_empty()
    }

    /// Name/value pairs as a submitted form would carry them
    pub fn entries(&self) -> [(&str, &str); 2] {
        [
            (TITLE_FIELD, self.title.as_str()),
            (DESCRIPTION_FIELD, self.description.as_str()),
        ]
    }
}

/// Validated title/description pair ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteInput {
    pub title: String,
    pub description: String,
}

impl NoteInput {
    /// Map submitted form entries to a typed input.
    ///
    /// The title must be present and not blank. A missing description
    /// defaults to empty. Unknown entries are ignored. Values are kept
    /// verbatim.
    pub fn from_fields<'a, I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut title = None;
        let mut description = None;

        for (name, value) in entries {
            match name {
                TITLE_FIELD => title = Some(value.to_string()),
                DESCRIPTION_FIELD => description = Some(value.to_string()),
                other => tracing::debug!("Ignoring unknown form field '{other}'"),
            }
        }

        let title = title.ok_or_else(|| Error::InvalidInput("missing field 'title'".into()))?;
        if title.trim().is_empty() {
            return Err(Error::InvalidInput("title is required".into()));
        }

        Ok(Self {
            title,
            description: description.unwrap_or_default(),
        })
    }
}

impl TryFrom<&FormFields> for NoteInput {
    type Error = Error;

    fn try_from(fields: &FormFields) -> Result<Self> {
        Self::from_fields(fields.entries())
    }
}
