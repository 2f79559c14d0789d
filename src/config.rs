use std::env;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("MACRO_NEWS_BASE_URL is empty")]
    EmptyBaseUrl,
    #[error("invalid MACRO_NEWS_TIMEOUT_SECS value {value:?}: {source}")]
    InvalidTimeout {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Runtime settings for the news host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    /// Opt-in client timeout; `None` (the default) never times out.
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl Config {
    /// Read `MACRO_NEWS_BASE_URL` and `MACRO_NEWS_TIMEOUT_SECS` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var("MACRO_NEWS_BASE_URL").ok(),
            env::var("MACRO_NEWS_TIMEOUT_SECS").ok(),
        )
    }

    fn from_vars(base_url: Option<String>, timeout: Option<String>) -> Result<Self, ConfigError> {
        let base_url = match base_url {
            Some(url) => {
                let url = url.trim().trim_end_matches('/').to_string();
                if url.is_empty() {
                    return Err(ConfigError::EmptyBaseUrl);
                }
                url
            }
            None => DEFAULT_BASE_URL.to_string(),
        };

        let timeout = timeout
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map_err(|source| ConfigError::InvalidTimeout {
                        value: raw.clone(),
                        source,
                    })
            })
            .transpose()?
            // 0 disables the timeout
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Ok(Self { base_url, timeout })
    }
}
