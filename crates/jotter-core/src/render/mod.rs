//! View derivation
//!
//! [`View`] is the render instruction handed to a display surface. It is a
//! pure function of the note list; [`html`] and [`text`] turn it into markup
//! or a terminal listing.

mod html;
mod text;

pub use html::{escape_html, render_html};
pub use text::{escape_terminal, render_text};

use serde::Serialize;

use crate::models::{Note, NoteId};

pub const EMPTY_HEADING: &str = "No notes yet";
pub const EMPTY_MESSAGE: &str = "Create your first note to get started!";
pub const EMPTY_CTA_LABEL: &str = "+ Add Your First Note";

/// What a display surface should show
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum View {
    /// No notes: a call-to-action in place of the list
    Empty(EmptyState),
    /// One row per note, newest first
    List { rows: Vec<NoteRow> },
}

/// Empty-state copy with its add call-to-action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub heading: &'static str,
    pub message: &'static str,
    pub cta_label: &'static str,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self {
            heading: EMPTY_HEADING,
            message: EMPTY_MESSAGE,
            cta_label: EMPTY_CTA_LABEL,
        }
    }
}

/// Actions a row exposes, each tagged with the note id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteAction {
    Edit,
    Delete,
}

impl NoteAction {
    pub const ALL: [Self; 2] = [Self::Edit, Self::Delete];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Edit => "Edit Note",
            Self::Delete => "Delete Note",
        }
    }
}

/// A single displayed note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteRow {
    pub id: NoteId,
    pub title: String,
    pub description: String,
    pub actions: [NoteAction; 2],
}

impl From<&Note> for NoteRow {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id.clone(),
            title: note.title.clone(),
            description: note.description.clone(),
            actions: NoteAction::ALL,
        }
    }
}

impl View {
    /// Derive the view for a note list
    #[must_use]
    pub fn from_notes(notes: &[Note]) -> Self {
        if notes.is_empty() {
            Self::Empty(EmptyState::default())
        } else {
            Self::List {
                rows: notes.iter().map(NoteRow::from).collect(),
            }
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }

    /// Displayed rows, none for the empty state
    pub fn rows(&self) -> &[NoteRow] {
        match self {
            Self::Empty(_) => &[],
            Self::List { rows } => rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_list_renders_empty_state() {
        let view = View::from_notes(&[]);
        assert_eq!(view, View::Empty(EmptyState::default()));
        assert!(view.rows().is_empty());
    }

    #[test]
    fn test_rows_follow_list_order() {
        let notes = vec![Note::new("B", "b"), Note::new("A", "a")];
        let view = View::from_notes(&notes);

        assert!(!view.is_empty());
        let titles: Vec<&str> = view.rows().iter().map(|row| row.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
        assert_eq!(view.rows()[0].id, notes[0].id);
        assert_eq!(view.rows()[1].actions, [NoteAction::Edit, NoteAction::Delete]);
    }

    #[test]
    fn test_view_serializes_with_kind_tag() {
        let json = serde_json::to_value(View::from_notes(&[])).unwrap();
        assert_eq!(json["kind"], "empty");
        assert_eq!(json["cta_label"], EMPTY_CTA_LABEL);
    }
}
