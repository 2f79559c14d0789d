use std::fmt::Display;

use crate::models::NewsItem;

/// View state of the macro news component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NewsState {
    #[default]
    Loading,
    Failed(String),
    Loaded(Vec<NewsItem>),
}

impl NewsState {
    /// The single transition out of `Loading`.
    pub fn from_result<E: Display>(result: Result<Vec<NewsItem>, E>) -> Self {
        match result {
            Ok(items) => NewsState::Loaded(items),
            Err(err) => NewsState::Failed(err.to_string()),
        }
    }

    /// `Failed` and `Loaded` are terminal.
    pub fn is_settled(&self) -> bool {
        !matches!(self, NewsState::Loading)
    }
}
