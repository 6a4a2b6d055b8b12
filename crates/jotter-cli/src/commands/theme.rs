use std::path::Path;

use jotter_core::Theme;

use crate::cli::ThemeCommands;
use crate::commands::common::open_storage;
use crate::error::CliError;

pub fn run_theme(command: Option<ThemeCommands>, db_path: &Path) -> Result<(), CliError> {
    let mut storage = open_storage(db_path)?;

    let theme = match command.unwrap_or(ThemeCommands::Show) {
        ThemeCommands::Show => Theme::load(&storage)?,
        ThemeCommands::Light => {
            Theme::Light.save(&mut storage)?;
            Theme::Light
        }
        ThemeCommands::Dark => {
            Theme::Dark.save(&mut storage)?;
            Theme::Dark
        }
        ThemeCommands::Toggle => Theme::toggle(&mut storage)?,
    };

    println!("{theme}");
    Ok(())
}
