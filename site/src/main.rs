//! Portfolio site prerenderer
//!
//! Builds the portfolio page, runs the page-ready wiring and loads the
//! DEV.to article feed once, then prints the resulting HTML to stdout.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Datelike;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_site::{portfolio_document, ArticleFeedLoader, Config, DevToClient, Page, Viewport};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr, stdout carries the page
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,folio_site=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    tracing::info!(
        username = %config.devto_username,
        per_page = config.articles_per_page,
        timeout_ms = config.fetch_timeout.as_millis() as u64,
        "Rendering portfolio"
    );

    let document = portfolio_document(&config.profile_url());
    let viewport = Viewport::new(config.viewport_height);
    let mut page = Page::ready(document, viewport, chrono::Local::now().year());

    let source = Arc::new(
        DevToClient::new(&config.devto_api_url).context("Failed to build HTTP client")?,
    );
    let loader = ArticleFeedLoader::new(source, config.article_query(), config.fetch_timeout);

    match page.load_articles(&loader).await {
        Some(outcome) => tracing::info!(outcome = outcome.label(), "Article feed settled"),
        None => tracing::info!("Page has no article feed"),
    }

    print!("{}", page.into_document().to_html());
    Ok(())
}
