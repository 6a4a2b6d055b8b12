//! Light/dark theme preference

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::storage::{KeyValueStore, THEME_KEY};

/// Theme options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Read the stored preference; absent or unrecognised values mean light
    pub fn load(storage: &impl KeyValueStore) -> Result<Self> {
        let theme = match storage.get_item(THEME_KEY)? {
            Some(value) => value.parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring unknown theme '{value}'");
                Self::default()
            }),
            None => Self::default(),
        };
        Ok(theme)
    }

    /// Write this preference
    pub fn save(self, storage: &mut impl KeyValueStore) -> Result<()> {
        storage.set_item(THEME_KEY, self.as_str())
    }

    /// Flip the stored preference and return the new value
    pub fn toggle(storage: &mut impl KeyValueStore) -> Result<Self> {
        let next = Self::load(&*storage)?.toggled();
        next.save(storage)?;
        Ok(next)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(Error::InvalidInput(format!("unknown theme '{other}'"))),
        }
    }
}
