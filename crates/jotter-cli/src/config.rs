//! Persistent CLI configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;

const CONFIG_FILE_NAME: &str = "config.json";
const DB_FILE_NAME: &str = "jotter.db";
const DB_PATH_ENV: &str = "JOTTER_DB_PATH";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CliConfig {
    #[serde(default = "default_config_version")]
    pub version: u32,
    #[serde(default)]
    pub db_path: Option<PathBuf>,
    #[serde(default)]
    pub output_format: Option<OutputFormat>,
}

const fn default_config_version() -> u32 {
    1
}

pub fn default_config_path() -> Result<PathBuf, String> {
    dirs::config_dir()
        .map(|dir| dir.join("jotter").join(CONFIG_FILE_NAME))
        .ok_or_else(|| "Failed to resolve CLI config directory".to_string())
}

pub fn default_db_path() -> PathBuf {
    dirs::data_local_dir().map_or_else(
        || PathBuf::from(DB_FILE_NAME),
        |dir| dir.join("jotter").join(DB_FILE_NAME),
    )
}

impl CliConfig {
    pub fn load() -> Result<Self, String> {
        Self::load_from_path(&default_config_path()?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self {
                version: default_config_version(),
                ..Self::default()
            });
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|error| format!("Failed to read config at {}: {}", path.display(), error))?;
        serde_json::from_str::<Self>(&raw)
            .map_err(|error| format!("Failed to parse config at {}: {}", path.display(), error))
    }

    pub fn save(&self) -> Result<PathBuf, String> {
        let path = default_config_path()?;
        self.save_to_path(&path)?;
        Ok(path)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| {
                format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    error
                )
            })?;
        }

        let serialized = serde_json::to_string_pretty(self)
            .map_err(|error| format!("Failed to serialize config: {error}"))?;
        std::fs::write(path, serialized)
            .map_err(|error| format!("Failed to write config at {}: {}", path.display(), error))
    }

    /// Database path: `--db-path`, then `JOTTER_DB_PATH`, then the config
    /// file, then the platform data directory.
    pub fn resolve_db_path(&self, explicit: Option<PathBuf>) -> PathBuf {
        self.resolve_db_path_with_env(explicit, std::env::var_os(DB_PATH_ENV).map(PathBuf::from))
    }

    fn resolve_db_path_with_env(&self, explicit: Option<PathBuf>, env: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| env.filter(|path| !path.as_os_str().is_empty()))
            .or_else(|| self.db_path.clone())
            .unwrap_or_else(default_db_path)
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = tempdir().unwrap();
        let config = CliConfig::load_from_path(&tmp.path().join("absent.json")).unwrap();
        assert_eq!(config.version, 1);
        assert_eq!(config.db_path, None);
        assert_eq!(config.output_format(), OutputFormat::Text);
    }

    #[test]
    fn config_roundtrip_preserves_fields() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("nested").join("config.json");

        let config = CliConfig {
            version: 1,
            db_path: Some(PathBuf::from("/tmp/notes.db")),
            output_format: Some(OutputFormat::Html),
        };
        config.save_to_path(&path).unwrap();

        let loaded = CliConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn malformed_config_is_reported() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, "{ nope").unwrap();

        let error = CliConfig::load_from_path(&path).unwrap_err();
        assert!(error.contains("Failed to parse config"));
    }

    #[test]
    fn db_path_precedence() {
        let config = CliConfig {
            db_path: Some(PathBuf::from("from-config.db")),
            ..CliConfig::default()
        };

        assert_eq!(
            config.resolve_db_path_with_env(
                Some(PathBuf::from("explicit.db")),
                Some(PathBuf::from("env.db"))
            ),
            PathBuf::from("explicit.db")
        );
        assert_eq!(
            config.resolve_db_path_with_env(None, Some(PathBuf::from("env.db"))),
            PathBuf::from("env.db")
        );
        assert_eq!(
            config.resolve_db_path_with_env(None, Some(PathBuf::new())),
            PathBuf::from("from-config.db")
        );
        assert_eq!(
            CliConfig::default().resolve_db_path_with_env(None, None),
            default_db_path()
        );
    }
}
