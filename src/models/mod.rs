pub mod news;

pub use news::{MacroNewsResponse, NewsItem};
