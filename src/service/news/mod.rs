use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use crate::config::Config;
use crate::models::NewsItem;

pub mod macro_news;

#[derive(Debug, thiserror::Error)]
pub enum NewsServiceError {
    /// Non-success status. The code is logged, the user sees the fixed message.
    #[error("Failed to fetch macro news")]
    Status(StatusCode),
    #[error(transparent)]
    Request(reqwest::Error),
    #[error(transparent)]
    Parse(serde_json::Error),
    #[error("invalid news base url {0}")]
    InvalidBaseUrl(String),
}

pub struct NewsService {
    client: Client,
    endpoint: Url,
}

impl NewsService {
    /// Build a news service targeting `{base_url}/macro-news`.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, NewsServiceError> {
        let endpoint = Url::parse(&format!(
            "{}{}",
            base_url.trim_end_matches('/'),
            macro_news::MACRO_NEWS_PATH
        ))
        .map_err(|e| NewsServiceError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(NewsServiceError::Request)?;

        Ok(Self { client, endpoint })
    }

    pub fn from_config(config: &Config) -> Result<Self, NewsServiceError> {
        Self::new(&config.base_url, config.timeout)
    }

    /// Full URL the service fetches from.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch the current macro news list. One request, no retry.
    pub async fn get_macro_news(&self) -> Result<Vec<NewsItem>, NewsServiceError> {
        macro_news::fetch_macro_news(&self.client, &self.endpoint).await
    }
}

pub use NewsServiceError as Error;
