use std::path::Path;

use jotter_core::UiEvent;

use crate::commands::common::{open_widget, resolve_note_id};
use crate::error::CliError;

pub fn run_delete(id: &str, db_path: &Path) -> Result<(), CliError> {
    let mut widget = open_widget(db_path)?;
    let note_id = resolve_note_id(id, widget.store())?;

    widget.handle(UiEvent::DeleteClicked(note_id.clone()))?;
    println!("{note_id}");
    Ok(())
}
