use std::path::Path;

use jotter_core::{HeadlessSurface, NoteId, NoteStore, SqliteStore, Widget};

use crate::error::CliError;

pub fn open_storage(db_path: &Path) -> Result<SqliteStore, CliError> {
    Ok(SqliteStore::open(db_path)?)
}

pub fn open_store(db_path: &Path) -> Result<NoteStore<SqliteStore>, CliError> {
    Ok(NoteStore::load(open_storage(db_path)?)?)
}

pub fn open_widget(db_path: &Path) -> Result<Widget<SqliteStore, HeadlessSurface>, CliError> {
    Ok(Widget::start(open_storage(db_path)?, HeadlessSurface::new())?)
}

pub fn normalize_title(parts: &[String]) -> Result<String, CliError> {
    let title = parts.join(" ");
    let trimmed = title.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyTitle)
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn normalize_note_identifier(id: &str) -> Result<String, CliError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyNoteId)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Resolve a full id or unique prefix against the stored notes
pub fn resolve_note_id(query: &str, store: &NoteStore<SqliteStore>) -> Result<NoteId, CliError> {
    let normalized = normalize_note_identifier(query)?;
    if let Some(id) = store.resolve_id(&normalized) {
        return Ok(id);
    }

    let matching_ids = store.matching_ids(&normalized);
    if matching_ids.is_empty() {
        return Err(CliError::NoteNotFound(normalized));
    }

    let options = matching_ids
        .iter()
        .take(3)
        .map(|id| id.as_str().chars().take(13).collect::<String>())
        .collect::<Vec<_>>()
        .join(", ");

    Err(CliError::AmbiguousNoteId(format!(
        "ID prefix '{normalized}' is ambiguous; matches: {options}"
    )))
}
