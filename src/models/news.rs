use serde::{Deserialize, Deserializer, Serialize};

/// One macro-economic headline as delivered by `GET /macro-news`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub time_published: String, // display string, never parsed
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
}

/// Wire envelope of the macro news endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MacroNewsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub macro_news: Vec<NewsItem>,
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
