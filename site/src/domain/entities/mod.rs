//! Domain entities
//!
//! Pure domain models for the article feed.
//! These carry no DOM or HTTP types.

pub mod article;

pub use article::{ArticleQuery, ArticleRecord, LoadOutcome};
