use std::path::Path;

use jotter_core::form::{DESCRIPTION_FIELD, TITLE_FIELD};
use jotter_core::UiEvent;

use crate::commands::common::{open_widget, resolve_note_id};
use crate::error::CliError;

/// Edit a note through the same session a dialog would use: stage the
/// stored values, overwrite the given fields, then submit.
pub fn run_edit(
    id: &str,
    title: Option<String>,
    description: Option<String>,
    db_path: &Path,
) -> Result<(), CliError> {
    let mut widget = open_widget(db_path)?;
    let note_id = resolve_note_id(id, widget.store())?;

    if title.is_none() && description.is_none() {
        tracing::info!("Nothing to change for note {note_id}");
        println!("{note_id}");
        return Ok(());
    }

    widget.handle(UiEvent::EditClicked(note_id.clone()))?;
    for (name, value) in [(TITLE_FIELD, title), (DESCRIPTION_FIELD, description)] {
        if let Some(value) = value {
            widget.handle(UiEvent::FieldChanged {
                name: name.to_string(),
                value,
            })?;
        }
    }

    if widget.session().form().title.trim().is_empty() {
        return Err(CliError::EmptyTitle);
    }
    widget.submit_staged()?;

    println!("{note_id}");
    Ok(())
}
