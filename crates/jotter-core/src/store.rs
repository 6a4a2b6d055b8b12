//! Note store: the single owner of the note list and its persisted mirror

use crate::error::Result;
use crate::models::{Note, NoteId};
use crate::render::View;
use crate::storage::{KeyValueStore, NOTES_KEY};

/// Ordered, newest-first list of notes mirrored to a key-value backend.
///
/// Every mutation writes the whole list back under [`NOTES_KEY`] before
/// returning, so the stored value always matches the in-memory list. When a
/// write fails the error is returned and the in-memory list keeps the change.
pub struct NoteStore<S> {
    storage: S,
    notes: Vec<Note>,
}

impl<S: KeyValueStore> NoteStore<S> {
    /// Load the persisted note list, starting empty when none is stored.
    ///
    /// A stored value that does not parse is returned as an error.
    pub fn load(storage: S) -> Result<Self> {
        let notes: Vec<Note> = match storage.get_item(NOTES_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };
        tracing::debug!("Loaded {} notes", notes.len());
        Ok(Self { storage, notes })
    }

    /// Create a note at the head of the list
    pub fn add(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Note> {
        let mut note = Note::new(title, description);
        while self.get(&note.id).is_some() {
            note.id = NoteId::new();
        }

        self.notes.insert(0, note.clone());
        tracing::debug!("Added note {}", note.id);
        self.persist()?;
        Ok(note)
    }

    /// Replace the title and description of the note with `id`.
    ///
    /// Returns whether a note matched. Position and id are preserved; with no
    /// match the list is left as it was and still written back.
    pub fn update(
        &mut self,
        id: &NoteId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<bool> {
        let matched = match self.notes.iter_mut().find(|note| &note.id == id) {
            Some(note) => {
                note.title = title.into();
                note.description = description.into();
                true
            }
            None => false,
        };

        tracing::debug!("Update note {id}: matched={matched}");
        self.persist()?;
        Ok(matched)
    }

    /// Remove the note with `id`, returning whether one was removed
    pub fn delete(&mut self, id: &NoteId) -> Result<bool> {
        let before = self.notes.len();
        self.notes.retain(|note| &note.id != id);
        let removed = self.notes.len() != before;

        tracing::debug!("Delete note {id}: removed={removed}");
        self.persist()?;
        Ok(removed)
    }

    /// Get a note by ID
    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| &note.id == id)
    }

    /// Resolve a full id or an unambiguous id prefix
    pub fn resolve_id(&self, query: &str) -> Option<NoteId> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        if let Some(note) = self.notes.iter().find(|note| note.id.as_str() == query) {
            return Some(note.id.clone());
        }

        match self.matching_ids(query).as_slice() {
            [id] => Some(id.clone()),
            _ => None,
        }
    }

    /// Ids starting with `prefix`, in display order
    pub fn matching_ids(&self, prefix: &str) -> Vec<NoteId> {
        self.notes
            .iter()
            .filter(|note| note.id.as_str().starts_with(prefix))
            .map(|note| note.id.clone())
            .collect()
    }

    /// Notes in display order, newest first
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Derive the display structure from the current list
    pub fn render(&self) -> View {
        View::from_notes(&self.notes)
    }

    /// Shared access to the backend for keys the store does not own
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutable access to the backend for keys the store does not own.
    ///
    /// Callers must not write [`NOTES_KEY`] through this handle.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Give the backend back, dropping the in-memory list
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.notes)?;
        self.storage.set_item(NOTES_KEY, &raw)
    }
}
