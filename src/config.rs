use std::env;

use thiserror::Error;

use crate::blockchain::{DEFAULT_DIFFICULTY, DIFF_MAX, DIFF_MIN};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("POW_DIFFICULTY must be between {min} and {max}, got {value}")]
    DifficultyOutOfRange { value: u32, min: u32, max: u32 },
}

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    pub host: String,
    pub port: u16,
    pub difficulty: u32,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            difficulty: DEFAULT_DIFFICULTY,
        }
    }
}

impl NodeConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = match lookup("PORT") {
            Some(v) => parse("PORT", v)?,
            None => defaults.port,
        };
        let difficulty = match lookup("POW_DIFFICULTY") {
            Some(v) => parse("POW_DIFFICULTY", v)?,
            None => defaults.difficulty,
        };
        if !(DIFF_MIN..=DIFF_MAX).contains(&difficulty) {
            return Err(ConfigError::DifficultyOutOfRange {
                value: difficulty,
                min: DIFF_MIN,
                max: DIFF_MAX,
            });
        }

        Ok(Self {
            host,
            port,
            difficulty,
        })
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}
