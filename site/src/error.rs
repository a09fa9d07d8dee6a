//! Unified error types for the portfolio site
//!
//! This module defines error types for each layer:
//! - `FeedError`: Article feed errors (network, status, payload)
//! - `DomError`: Document model errors

use std::time::Duration;

use thiserror::Error;

/// Article feed errors
///
/// Every variant is absorbed by the feed loader and turned into fallback
/// content; none of them escape to the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Network response was not ok: status {0}")]
    BadStatus(u16),

    #[error("Malformed article payload: {0}")]
    Parse(String),

    #[error("Request failed: {0}")]
    Transport(String),
}

impl FeedError {
    /// Short machine-readable kind, used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            FeedError::Timeout(_) => "timeout",
            FeedError::BadStatus(_) => "bad-status",
            FeedError::Parse(_) => "parse-error",
            FeedError::Transport(_) => "transport",
        }
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(e: reqwest::Error) -> Self {
        FeedError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(e: serde_json::Error) -> Self {
        FeedError::Parse(e.to_string())
    }
}

/// Document model errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("Feed container already settled")]
    AlreadySettled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_error_kinds() {
        assert_eq!(FeedError::Timeout(Duration::from_secs(5)).kind(), "timeout");
        assert_eq!(FeedError::BadStatus(500).kind(), "bad-status");
        assert_eq!(FeedError::Parse("eof".into()).kind(), "parse-error");
        assert_eq!(FeedError::Transport("refused".into()).kind(), "transport");
    }

    #[test]
    fn json_errors_become_parse_errors() {
        let err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let feed_err: FeedError = err.into();
        assert!(matches!(feed_err, FeedError::Parse(_)));
    }

    #[test]
    fn display_includes_status() {
        assert_eq!(
            FeedError::BadStatus(503).to_string(),
            "Network response was not ok: status 503"
        );
    }
}
