use std::path::Path;

use crate::commands::common::{normalize_title, open_store};
use crate::error::CliError;

pub fn run_add(title_parts: &[String], description: &str, db_path: &Path) -> Result<(), CliError> {
    let title = normalize_title(title_parts)?;

    let mut store = open_store(db_path)?;
    let note = store.add(title, description)?;

    println!("{}", note.id);
    Ok(())
}
