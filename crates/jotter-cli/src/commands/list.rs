use std::path::Path;

use jotter_core::render::render_text;

use crate::commands::common::open_store;
use crate::error::CliError;

pub fn run_list(as_json: bool, db_path: &Path) -> Result<(), CliError> {
    let store = open_store(db_path)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(store.notes())?);
    } else {
        for line in render_text(&store.render()) {
            println!("{line}");
        }
    }

    Ok(())
}
