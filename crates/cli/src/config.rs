//! Process configuration, read once from the environment.

use std::path::PathBuf;

use stockroom_observability::{LogFormat, ParseLogFormatError};
use thiserror::Error;

pub const SCRIPT_VAR: &str = "STOCKROOM_SCRIPT";
pub const FAIL_FAST_VAR: &str = "STOCKROOM_FAIL_FAST";
pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: expected a boolean (true/false), got '{value}'")]
    InvalidBool { var: &'static str, value: String },

    #[error("STOCKROOM_LOG_FORMAT: {0}")]
    InvalidLogFormat(#[from] ParseLogFormatError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Script to replay when no path is given on the command line.
    pub script: Option<PathBuf>,
    /// Stop at the first rejected command instead of logging and moving on.
    pub fail_fast: bool,
    pub log_format: LogFormat,
}

impl CliConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup. Unset and empty
    /// variables fall back to defaults; malformed ones are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let script = get(SCRIPT_VAR).map(PathBuf::from);

        let fail_fast = match get(FAIL_FAST_VAR) {
            None => false,
            Some(value) => parse_bool(&value).ok_or(ConfigError::InvalidBool {
                var: FAIL_FAST_VAR,
                value,
            })?,
        };

        let log_format = match get(LOG_FORMAT_VAR) {
            None => LogFormat::default(),
            Some(value) => value.parse()?,
        };

        Ok(Self {
            script,
            fail_fast,
            log_format,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
