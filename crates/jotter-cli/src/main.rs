//! Jotter CLI - keep short notes from the terminal
//!
//! One-shot commands for scripting plus an interactive shell that drives the
//! note widget event by event.

mod cli;
mod commands;
mod config;
mod error;
mod surface;


use clap::{CommandFactory, Parser};

use crate::cli::{Cli, Commands};
use crate::commands::{
    add::run_add, completions::run_completions, config::run_config, delete::run_delete,
    edit::run_edit, list::run_list, render::run_render, shell::run_shell, theme::run_theme,
};
use crate::config::CliConfig;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("jotter=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = CliConfig::load().map_err(CliError::Config)?;
    let db_path = config.resolve_db_path(cli.db_path);
    tracing::debug!("Using database at {}", db_path.display());

    match cli.command {
        Some(Commands::Add { title, description }) => run_add(&title, &description, &db_path)?,
        Some(Commands::Edit {
            id,
            title,
            description,
        }) => run_edit(&id, title, description, &db_path)?,
        Some(Commands::Delete { id }) => run_delete(&id, &db_path)?,
        Some(Commands::List { json }) => run_list(json, &db_path)?,
        Some(Commands::Render { format }) => {
            run_render(format.unwrap_or_else(|| config.output_format()), &db_path)?;
        }
        Some(Commands::Theme { command }) => run_theme(command, &db_path)?,
        Some(Commands::Shell) => run_shell(&db_path)?,
        Some(Commands::Completions { shell, output }) => {
            run_completions(shell, output.as_deref())?;
        }
        Some(Commands::Config { command }) => run_config(command, config, &db_path)?,
        None => {
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
