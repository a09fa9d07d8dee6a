//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing and
//! record what happened to them.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{ArticleQuery, ArticleRecord};
use crate::domain::ports::{ArticleSource, FeedView, SourceResponse};
use crate::error::{DomError, FeedError};

// ============================================================================
// Stub Article Source
// ============================================================================

/// How long the stub takes to answer
#[derive(Debug, Clone, Copy)]
pub enum Latency {
    Immediate,
    After(Duration),
    Never,
}

pub struct StubArticleSource {
    result: Result<SourceResponse, FeedError>,
    latency: Latency,
    calls: AtomicUsize,
    aborted: Arc<AtomicBool>,
}

impl StubArticleSource {
    pub fn responding(status: u16, body: impl Into<String>) -> Self {
        Self::with_result(Ok(SourceResponse::new(status, body)))
    }

    pub fn failing(error: FeedError) -> Self {
        Self::with_result(Err(error))
    }

    fn with_result(result: Result<SourceResponse, FeedError>) -> Self {
        Self {
            result,
            latency: Latency::Immediate,
            calls: AtomicUsize::new(0),
            aborted: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Whether an in-flight request was dropped before it completed
    pub fn was_aborted(&self) -> bool {
        self.aborted.load(Ordering::SeqCst)
    }
}

/// Flags the request as aborted if it is dropped while still armed
struct AbortGuard {
    flag: Arc<AtomicBool>,
    armed: bool,
}

impl Drop for AbortGuard {
    fn drop(&mut self) {
        if self.armed {
            self.flag.store(true, Ordering::SeqCst);
        }
    }
}

#[async_trait]
impl ArticleSource for StubArticleSource {
    async fn fetch_articles(&self, _query: &ArticleQuery) -> Result<SourceResponse, FeedError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut guard = AbortGuard {
            flag: self.aborted.clone(),
            armed: true,
        };

        match self.latency {
            Latency::Immediate => {}
            Latency::After(delay) => tokio::time::sleep(delay).await,
            Latency::Never => std::future::pending::<()>().await,
        }

        guard.armed = false;
        self.result.clone()
    }
}

// ============================================================================
// Recording Feed View
// ============================================================================

/// Feed view that records every call
#[derive(Debug, Default)]
pub struct RecordingFeedView {
    pub settled: bool,
    pub articles: Vec<ArticleRecord>,
    pub messages: Vec<String>,
    pub reveal_count: usize,
}

impl RecordingFeedView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeedView for RecordingFeedView {
    fn is_settled(&self) -> bool {
        self.settled
    }

    fn settle(&mut self) -> Result<(), DomError> {
        if self.settled {
            return Err(DomError::AlreadySettled);
        }
        self.settled = true;
        Ok(())
    }

    fn append_article(&mut self, article: &ArticleRecord) -> Result<(), DomError> {
        self.articles.push(article.clone());
        Ok(())
    }

    fn show_message(&mut self, message: &str) -> Result<(), DomError> {
        self.messages.push(message.to_string());
        Ok(())
    }

    fn reveal_view_more(&mut self) -> Result<(), DomError> {
        self.reveal_count += 1;
        Ok(())
    }
}
