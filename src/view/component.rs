use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::models::NewsItem;
use crate::service::news::NewsService;
use crate::view::render;
use crate::view::state::NewsState;
use crate::view::theme::Theme;

/// A mounted macro news view.
///
/// Mounting starts exactly one fetch. The view renders `Loading` until that
/// fetch settles and never fetches again. Dropping the view aborts a fetch
/// still in flight and its result is discarded.
pub struct MacroNewsView {
    state: watch::Receiver<NewsState>,
    task: JoinHandle<()>,
    theme: Theme,
}

impl MacroNewsView {
    /// Mount the view over an arbitrary fetch future. Must run inside a tokio runtime.
    pub fn mount<F, E>(fetch: F, theme: Theme) -> Self
    where
        F: Future<Output = Result<Vec<NewsItem>, E>> + Send + 'static,
        E: Display + Send + 'static,
    {
        let (tx, rx) = watch::channel(NewsState::Loading);

        let task = tokio::spawn(async move {
            let next = NewsState::from_result(fetch.await);
            publish(&tx, next);
        });

        Self {
            state: rx,
            task,
            theme,
        }
    }

    /// Mount the view against the live news endpoint.
    pub fn mount_service(service: Arc<NewsService>, theme: Theme) -> Self {
        Self::mount(async move { service.get_macro_news().await }, theme)
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> NewsState {
        self.state.borrow().clone()
    }

    /// Receiver that wakes on every state change, for hosts that re-render.
    pub fn subscribe(&self) -> watch::Receiver<NewsState> {
        self.state.clone()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Render the fragment for the current state.
    pub fn render(&self) -> askama::Result<String> {
        render::render(&self.state.borrow(), &self.theme)
    }

    /// Render the standalone page for the current state.
    pub fn render_page(&self) -> askama::Result<String> {
        render::render_page(&self.state.borrow(), &self.theme)
    }

    /// Wait until the fetch settles and return the terminal state.
    ///
    /// If the fetch task died without publishing (panic), the current
    /// state is returned as-is.
    pub async fn settled(&mut self) -> NewsState {
        let settled = match self.state.wait_for(NewsState::is_settled).await {
            Ok(state) => Some((*state).clone()),
            Err(_) => None,
        };
        settled.unwrap_or_else(|| self.state())
    }

    /// Tear the view down, cancelling a fetch still in flight.
    ///
    /// Same as dropping the view.
    pub fn unmount(self) {
        drop(self);
    }
}

/// Publish a settled state unless every receiver is gone.
///
/// Returns whether the state was published.
fn publish(tx: &watch::Sender<NewsState>, next: NewsState) -> bool {
    if tx.is_closed() {
        debug!("Macro news view unmounted before fetch completed; dropping result");
        return false;
    }

    match &next {
        NewsState::Loaded(items) => info!("Macro news view loaded {} items", items.len()),
        NewsState::Failed(message) => info!("Macro news view failed: {}", message),
        NewsState::Loading => {}
    }
    tx.send(next).is_ok()
}

impl Drop for MacroNewsView {
    fn drop(&mut self) {
        if !self.task.is_finished() {
            debug!("Aborting in-flight macro news fetch");
        }
        self.task.abort();
    }
}
