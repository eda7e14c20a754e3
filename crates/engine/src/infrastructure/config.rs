//! Engine configuration from environment variables.
//!
//! `main` loads `.env.local` / `.env` through dotenvy first, so either the
//! process environment or those files can supply:
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `AXISMUNDI_DATA_DIR` | `data` | Directory holding actor JSON files |
//! | `AXISMUNDI_LOCALE_FILE` | unset | JSON label catalog for sheet labels |
//! | `AXISMUNDI_SEED_DEFAULT_SKILLS` | `true` | Seed starter skills on new characters |

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DATA_DIR_VAR: &str = "AXISMUNDI_DATA_DIR";
pub const LOCALE_FILE_VAR: &str = "AXISMUNDI_LOCALE_FILE";
pub const SEED_DEFAULT_SKILLS_VAR: &str = "AXISMUNDI_SEED_DEFAULT_SKILLS";

const DEFAULT_DATA_DIR: &str = "data";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_seed_default_skills() -> bool {
    true
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a boolean (true/false, yes/no, on/off, 1/0), got {value:?}")]
    InvalidBool { var: &'static str, value: String },
}

/// Runtime settings for the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub locale_file: Option<PathBuf>,
    #[serde(default = "default_seed_default_skills")]
    pub seed_default_skills: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            locale_file: None,
            seed_default_skills: default_seed_default_skills(),
        }
    }
}

impl EngineConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| {
            lookup(var)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let mut config = Self::default();
        if let Some(dir) = get(DATA_DIR_VAR) {
            config.data_dir = PathBuf::from(dir);
        }
        config.locale_file = get(LOCALE_FILE_VAR).map(PathBuf::from);
        if let Some(raw) = get(SEED_DEFAULT_SKILLS_VAR) {
            config.seed_default_skills = parse_bool(&raw).ok_or(ConfigError::InvalidBool {
                var: SEED_DEFAULT_SKILLS_VAR,
                value: raw,
            })?;
        }
        Ok(config)
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
