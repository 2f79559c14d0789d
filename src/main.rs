use std::sync::Arc;

use anyhow::Result;
use dotenv::dotenv;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use macro_news::config::Config;
use macro_news::service::news::NewsService;
use macro_news::view::{MacroNewsView, NewsState, Theme};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    // Logs go to stderr; stdout carries the rendered page only.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;

    info!("Initializing NewsService for {}...", config.base_url);
    let service = Arc::new(NewsService::from_config(&config)?);

    let mut view = MacroNewsView::mount_service(service, Theme::default());
    debug!("Initial render: {}", view.render()?);

    match view.settled().await {
        NewsState::Loaded(items) => info!("Rendering {} macro news items", items.len()),
        NewsState::Failed(message) => info!("Rendering error notice: {}", message),
        NewsState::Loading => info!("Fetch ended without a result; rendering loading notice"),
    }

    print!("{}", view.render_page()?);

    Ok(())
}
