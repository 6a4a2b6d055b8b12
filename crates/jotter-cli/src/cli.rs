use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "jotter")]
#[command(about = "Keep short notes from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Optional path to local database file
    #[arg(long, global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new note
    #[command(alias = "new")]
    Add {
        /// Note title
        #[arg(required = true)]
        title: Vec<String>,
        /// Note description
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Edit an existing note
    Edit {
        /// Note ID or unique ID prefix
        id: String,
        /// Replacement title
        #[arg(long)]
        title: Option<String>,
        /// Replacement description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete an existing note
    Delete {
        /// Note ID or unique ID prefix
        id: String,
    },
    /// List notes, newest first
    List {
        /// Output the stored JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the rendered notes view
    Render {
        /// Output format (defaults to the configured format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Show or change the theme preference
    Theme {
        #[command(subcommand)]
        command: Option<ThemeCommands>,
    },
    /// Drive the widget interactively, one event per line
    Shell,
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Manage the CLI configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Subcommand)]
pub enum ThemeCommands {
    /// Print the current theme
    Show,
    /// Use the light theme
    Light,
    /// Use the dark theme
    Dark,
    /// Switch between light and dark
    Toggle,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Create or update the configuration file
    Init {
        /// Database file to use by default
        #[arg(long = "storage", value_name = "PATH")]
        storage: Option<PathBuf>,
        /// Default output format for `render`
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
}
