//! Article domain entity
//!
//! Articles live on DEV.to (source of truth). The page only holds them for
//! the duration of one render pass.

use serde::{Deserialize, Serialize};

use crate::error::FeedError;

/// A single article as listed by the API
///
/// The API sends many more fields per article; only these two are read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: String,
    pub url: String,
}

impl ArticleRecord {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Which articles to ask for: account and page-size limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleQuery {
    pub username: String,
    pub per_page: u32,
}

impl ArticleQuery {
    pub fn new(username: &str, per_page: u32) -> Self {
        Self {
            username: username.to_string(),
            per_page,
        }
    }
}

/// Terminal state of one feed load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// At least one article arrived in time
    Success(Vec<ArticleRecord>),
    /// The account exists but has no articles
    EmptyResult,
    /// Timeout, bad status, transport error or malformed payload
    Failure(FeedError),
}

impl LoadOutcome {
    /// Short label for structured logs
    pub fn label(&self) -> &'static str {
        match self {
            LoadOutcome::Success(_) => "success",
            LoadOutcome::EmptyResult => "empty",
            LoadOutcome::Failure(e) => e.kind(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LoadOutcome::Success(_))
    }
}

impl From<Result<Vec<ArticleRecord>, FeedError>> for LoadOutcome {
    fn from(result: Result<Vec<ArticleRecord>, FeedError>) -> Self {
        match result {
            Ok(records) if records.is_empty() => LoadOutcome::EmptyResult,
            Ok(records) => LoadOutcome::Success(records),
            Err(e) => LoadOutcome::Failure(e),
        }
    }
}
