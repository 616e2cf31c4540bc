use std::{env, time::Duration};

use chrono_tz::Tz;
use url::Url;

use super::env::{
    ApiConfig, AppConfig, ConfigError, DirectoryConfig, DisplayConfig, LoggingConfig,
};

pub const API_URL_VAR: &str = "TOXIGUARD_API_URL";

pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_env()
}

impl AppConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let api = ApiConfig {
            base_url: env::var(API_URL_VAR)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| parse_base_url(&v))
                .transpose()?,
            request_timeout: parse_u64("TOXIGUARD_REQUEST_TIMEOUT_MS").map(Duration::from_millis),
        };

        let directories = DirectoryConfig {
            logs_dir: env::var("LOGS_DIR").unwrap_or_else(|_| "logs".to_string()),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()),
        };

        let defaults = DisplayConfig::default();
        let timezone = match env::var("TOXIGUARD_TIMEZONE") {
            Ok(value) => value.parse::<Tz>().map_err(|err| ConfigError::Invalid {
                key: "TOXIGUARD_TIMEZONE",
                reason: err.to_string(),
            })?,
            Err(_) => defaults.timezone,
        };
        let display = DisplayConfig {
            timezone,
            history_preview_limit: parse_u64("HISTORY_PREVIEW_LIMIT")
                .map(|v| v as usize)
                .unwrap_or(defaults.history_preview_limit),
            text_preview_len: parse_u64("TEXT_PREVIEW_LENGTH")
                .map(|v| v as usize)
                .unwrap_or(defaults.text_preview_len),
        };

        Ok(Self {
            api,
            directories,
            logging,
            display,
        })
    }
}

/// Parses the backend base URL. A trailing slash is dropped so endpoint
/// paths can be appended verbatim.
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|err| ConfigError::Invalid {
        key: API_URL_VAR,
        reason: err.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid {
            key: API_URL_VAR,
            reason: format!("unsupported scheme `{}`", url.scheme()),
        });
    }
    Ok(url)
}

fn parse_u64(key: &str) -> Option<u64> {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
}
