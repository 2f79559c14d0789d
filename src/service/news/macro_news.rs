use reqwest::{Client, Url};
use tracing::{info, warn};

use crate::models::{MacroNewsResponse, NewsItem};
use crate::service::news::NewsServiceError;

pub const MACRO_NEWS_PATH: &str = "/macro-news";

/// Fetch the macro news list with a single GET against `endpoint`.
pub async fn fetch_macro_news(
    client: &Client,
    endpoint: &Url,
) -> Result<Vec<NewsItem>, NewsServiceError> {
    info!("Fetching macro news from {}", endpoint);

    let resp = client.get(endpoint.clone()).send().await.map_err(|e| {
        warn!("Macro news request failed: {}", e);
        NewsServiceError::Request(e)
    })?;

    let status = resp.status();
    info!("Received response with status: {}", status);

    // Fail on the status line alone; the error body is never awaited.
    if !status.is_success() {
        warn!("Macro news endpoint returned error status {}", status);
        return Err(NewsServiceError::Status(status));
    }

    let raw_bytes = resp.bytes().await.map_err(|e| {
        warn!("Failed to read macro news body: {}", e);
        NewsServiceError::Request(e)
    })?;

    let parsed = parse_macro_news(&raw_bytes)?;
    info!("Parsed {} macro news items", parsed.len());

    Ok(parsed)
}

fn parse_macro_news(raw_bytes: &[u8]) -> Result<Vec<NewsItem>, NewsServiceError> {
    let parsed: MacroNewsResponse = serde_json::from_slice(raw_bytes).map_err(|e| {
        let preview = String::from_utf8_lossy(&raw_bytes[..raw_bytes.len().min(500)]);
        warn!(
            "Failed to parse macro news response: {}; body preview: {}",
            e, preview
        );
        NewsServiceError::Parse(e)
    })?;

    Ok(parsed.macro_news)
}
