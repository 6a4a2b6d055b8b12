use std::path::{Path, PathBuf};

use crate::cli::{ConfigCommands, OutputFormat};
use crate::config::{default_config_path, CliConfig};
use crate::error::CliError;

pub fn run_config(
    command: ConfigCommands,
    config: CliConfig,
    db_path: &Path,
) -> Result<(), CliError> {
    match command {
        ConfigCommands::Show => {
            let path = default_config_path().map_err(CliError::Config)?;
            println!("config: {}", path.display());
            println!("database: {}", db_path.display());
            println!("format: {:?}", config.output_format());
            Ok(())
        }
        ConfigCommands::Init { storage, format } => {
            let updated = apply_init(config, storage, format);
            let path = updated.save().map_err(CliError::Config)?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

pub fn apply_init(
    mut config: CliConfig,
    storage: Option<PathBuf>,
    format: Option<OutputFormat>,
) -> CliConfig {
    config.version = 1;
    if let Some(path) = storage {
        config.db_path = Some(path);
    }
    if let Some(format) = format {
        config.output_format = Some(format);
    }
    config
}
