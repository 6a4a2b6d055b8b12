use std::path::Path;

use jotter_core::render::{render_html, render_text};
use jotter_core::View;

use crate::cli::OutputFormat;
use crate::commands::common::open_store;
use crate::error::CliError;

pub fn run_render(format: OutputFormat, db_path: &Path) -> Result<(), CliError> {
    let store = open_store(db_path)?;
    println!("{}", format_view(&store.render(), format)?);
    Ok(())
}

pub fn format_view(view: &View, format: OutputFormat) -> Result<String, CliError> {
    let rendered = match format {
        OutputFormat::Text => render_text(view).join("\n"),
        OutputFormat::Html => render_html(view).trim_end().to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(view)?,
    };
    Ok(rendered)
}
