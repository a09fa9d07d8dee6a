//! Article source port trait
//!
//! Defines the network boundary of the feed loader.

use async_trait::async_trait;

use crate::domain::entities::ArticleQuery;
use crate::error::FeedError;

/// Raw HTTP response as seen by the loader
///
/// Status and body are left uninterpreted so the loader owns the
/// status check and the payload parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceResponse {
    pub status: u16,
    pub body: String,
}

impl SourceResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Port trait for listing articles
///
/// Dropping the returned future must abort the request.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Issue one GET for the given query
    async fn fetch_articles(&self, query: &ArticleQuery) -> Result<SourceResponse, FeedError>;
}
