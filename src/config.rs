use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const TITLE_VAR: &str = "HOTEL_TITLE";
pub const LOG_VAR: &str = "HOTEL_LOG";
pub const OUTPUT_VAR: &str = "HOTEL_OUTPUT";

// How history and waiting-list views are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                key: OUTPUT_VAR.to_string(),
                value: s.to_string(),
            }),
        }
    }
}

// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub title: String,
    // env-filter directive for the log subscriber, e.g. "info" or "hotel_reservations=debug"
    pub log_filter: String,
    pub output_format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Hotel Management System".to_string(),
            log_filter: "warn".to_string(),
            output_format: OutputFormat::Text,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Builds a config from `lookup`, keeping the default for every key it
    // returns `None` for.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(title) = lookup(TITLE_VAR) {
            config.title = title;
        }
        if let Some(filter) = lookup(LOG_VAR) {
            config.log_filter = filter;
        }
        if let Some(format) = lookup(OUTPUT_VAR) {
            config.output_format = format.parse()?;
        }

        Ok(config)
    }
}
