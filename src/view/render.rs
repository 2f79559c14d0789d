use std::borrow::Cow;

use askama::Template;

use crate::models::NewsItem;
use crate::view::state::NewsState;
use crate::view::theme::Theme;

/// Summaries longer than this many characters are clamped.
pub const SUMMARY_LIMIT: usize = 250;

pub const TITLE_TEXT: &str = "Macro-Economic News";
pub const LOADING_TEXT: &str = "Loading macro-economic news...";
pub const EMPTY_TEXT: &str = "No macro-economic news available at the moment.";

#[derive(Template)]
#[template(path = "partials/loading.html")]
struct LoadingFragment;

#[derive(Template)]
#[template(path = "partials/error.html")]
struct ErrorFragment<'a> {
    message: &'a str,
}

/// Display fields of one card; the summary is already clamped.
struct CardView<'a> {
    source: &'a str,
    time_published: &'a str,
    title: &'a str,
    url: &'a str,
    summary: Cow<'a, str>,
}

impl<'a> From<&'a NewsItem> for CardView<'a> {
    fn from(item: &'a NewsItem) -> Self {
        Self {
            source: &item.source,
            time_published: &item.time_published,
            title: &item.title,
            url: &item.url,
            summary: clamp_summary(&item.summary),
        }
    }
}

#[derive(Template)]
#[template(path = "partials/news_list.html")]
struct NewsListFragment<'a> {
    include_styles: bool,
    stylesheet: String,
    cards: Vec<CardView<'a>>,
}

#[derive(Template)]
#[template(path = "page.html")]
struct NewsPage {
    stylesheet: String,
    body: String,
}

/// Render the view fragment for `state`.
///
/// Pure: identical inputs give byte-identical output. The loaded branch
/// carries its own `<style>` block built from `theme`.
pub fn render(state: &NewsState, theme: &Theme) -> askama::Result<String> {
    render_body(state, theme, true)
}

/// Render a standalone HTML document: page shell, stylesheet and the fragment.
pub fn render_page(state: &NewsState, theme: &Theme) -> askama::Result<String> {
    NewsPage {
        stylesheet: theme.stylesheet(),
        body: render_body(state, theme, false)?,
    }
    .render()
}

/// Clamp a summary to [`SUMMARY_LIMIT`] characters, appending `...` when cut.
///
/// Counts Unicode scalar values and cuts mid-word if needed.
pub fn clamp_summary(summary: &str) -> Cow<'_, str> {
    match summary.char_indices().nth(SUMMARY_LIMIT) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &summary[..cut])),
        None => Cow::Borrowed(summary),
    }
}

fn render_body(state: &NewsState, theme: &Theme, include_styles: bool) -> askama::Result<String> {
    match state {
        NewsState::Loading => LoadingFragment.render(),
        NewsState::Failed(message) => ErrorFragment {
            message: message.as_str(),
        }
        .render(),
        NewsState::Loaded(items) => NewsListFragment {
            include_styles,
            stylesheet: if include_styles {
                theme.stylesheet()
            } else {
                String::new()
            },
            cards: items.iter().map(CardView::from).collect(),
        }
        .render(),
    }
}
