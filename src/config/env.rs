use std::time::Duration;

use chrono_tz::Tz;
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub directories: DirectoryConfig,
    pub logging: LoggingConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Backend base URL. `None` when `TOXIGUARD_API_URL` is unset.
    pub base_url: Option<Url>,
    pub request_timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub logs_dir: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub timezone: Tz,
    pub history_preview_limit: usize,
    pub text_preview_len: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::Europe::Madrid,
            history_preview_limit: 6,
            text_preview_len: 50,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}
