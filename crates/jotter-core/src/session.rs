//! Edit session: which note, if any, the form is editing

use crate::form::FormFields;
use crate::models::{Note, NoteId};

/// Dialog title while adding a note
pub const ADD_TITLE: &str = "Add New Note";

/// Dialog title while editing a note
pub const EDIT_TITLE: &str = "Edit Note";

/// Edit target state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No note staged; a submit creates a new note
    #[default]
    Idle,
    /// The form holds values for the note with this id
    Editing(NoteId),
}

/// Tracks the edit target and the staged form values.
///
/// The staged fields are a copy taken when editing begins; changing them
/// never touches the stored note until the form is submitted.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    state: SessionState,
    form: FormFields,
}

impl EditSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage `note` for editing and pre-fill the form from the record
    pub fn begin(&mut self, note: &Note) {
        tracing::debug!("Editing note {}", note.id);
        self.state = SessionState::Editing(note.id.clone());
        self.form = FormFields::from_note(note);
    }

    /// Start a blank form for a new note
    pub fn begin_new(&mut self) {
        self.state = SessionState::Idle;
        self.form.reset();
    }

    /// Drop the edit target and clear the form
    pub fn end(&mut self) {
        self.state = SessionState::Idle;
        self.form.reset();
    }

    pub const fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Editing(_))
    }

    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    pub const fn editing_id(&self) -> Option<&NoteId> {
        match &self.state {
            SessionState::Editing(id) => Some(id),
            SessionState::Idle => None,
        }
    }

    /// Dialog title for the current mode
    pub const fn dialog_title(&self) -> &'static str {
        if self.is_active() {
            EDIT_TITLE
        } else {
            ADD_TITLE
        }
    }

    pub const fn form(&self) -> &FormFields {
        &self.form
    }

    /// Replace a staged field value, `false` for unknown field names
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        self.form.set(name, value)
    }

    /// Replace all staged values, e.g. with what the user submitted
    pub fn set_form(&mut self, fields: FormFields) {
        self.form = fields;
    }
}
