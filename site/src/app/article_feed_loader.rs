//! Article feed loader
//!
//! Fetches the article list once, bounded by a timeout, and renders the
//! outcome into a feed view. Every failure ends up as fallback content.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{ArticleQuery, ArticleRecord, LoadOutcome};
use crate::domain::ports::{ArticleSource, FeedView, SourceResponse};
use crate::error::{DomError, FeedError};

pub const EMPTY_MESSAGE: &str = "No articles found.";
pub const FAILURE_MESSAGE: &str =
    "Unable to load articles directly. You can read them on my DEV.to profile.";

pub struct ArticleFeedLoader<S: ArticleSource> {
    source: Arc<S>,
    query: ArticleQuery,
    timeout: Duration,
}

impl<S: ArticleSource> ArticleFeedLoader<S> {
    pub fn new(source: Arc<S>, query: ArticleQuery, timeout: Duration) -> Self {
        Self {
            source,
            query,
            timeout,
        }
    }

    /// Run the request/timer race and classify the result
    ///
    /// Exactly one request is issued. If the timer wins, the request future
    /// is dropped, which aborts it.
    pub async fn load(&self) -> LoadOutcome {
        let request = self.source.fetch_articles(&self.query);
        let result = match tokio::time::timeout(self.timeout, request).await {
            Ok(response) => response.and_then(|r| self.interpret(r)),
            Err(_) => Err(FeedError::Timeout(self.timeout)),
        };

        let outcome = LoadOutcome::from(result);
        match &outcome {
            LoadOutcome::Success(records) => {
                tracing::info!(count = records.len(), "Articles loaded");
            }
            LoadOutcome::EmptyResult => {
                tracing::info!(username = %self.query.username, "No articles published");
            }
            LoadOutcome::Failure(e) => {
                tracing::warn!(kind = e.kind(), error = %e, "Error fetching articles");
            }
        }
        outcome
    }

    /// Load and render into `view`
    ///
    /// A view that is already settled is left alone and no request is made.
    pub async fn load_into<V: FeedView>(&self, view: &mut V) -> Result<LoadOutcome, DomError> {
        if view.is_settled() {
            return Err(DomError::AlreadySettled);
        }
        let outcome = self.load().await;
        render_outcome(&outcome, view)?;
        Ok(outcome)
    }

    fn interpret(&self, response: SourceResponse) -> Result<Vec<ArticleRecord>, FeedError> {
        if !response.is_success() {
            return Err(FeedError::BadStatus(response.status));
        }
        let mut records: Vec<ArticleRecord> = serde_json::from_str(&response.body)?;
        records.truncate(self.query.per_page as usize);
        Ok(records)
    }
}

/// Render a terminal outcome
///
/// Clears the placeholder, writes the articles or a fallback message, then
/// reveals "view more". Fails without touching the view if it is settled.
pub fn render_outcome<V: FeedView>(outcome: &LoadOutcome, view: &mut V) -> Result<(), DomError> {
    view.settle()?;
    match outcome {
        LoadOutcome::Success(records) => {
            for record in records {
                view.append_article(record)?;
            }
        }
        LoadOutcome::EmptyResult => view.show_message(EMPTY_MESSAGE)?,
        LoadOutcome::Failure(_) => view.show_message(FAILURE_MESSAGE)?,
    }
    view.reveal_view_more()
}
