use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use game::constants::RNG_SEED;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub setup: String,
    pub seed: Option<u64>,
    pub promotion: String,
    pub show_board: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            setup: "standard".into(),
            seed: None,
            promotion: "legacy".into(),
            show_board: true,
        }
    }
}

impl Config {
    /// Reads `path`; no path means defaults. A path that cannot be read is
    /// an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(RNG_SEED)
    }
}
