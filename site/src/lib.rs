//! Portfolio site
//!
//! The portfolio page as a library: an in-memory document, the page-ready
//! wiring (footer year, reveal animations, navigation, scroll spy,
//! back-to-top) and the DEV.to article feed loader.
//! Uses hexagonal (ports & adapters) architecture: the feed loader only
//! sees an `ArticleSource` and a `FeedView`.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;


pub use adapters::dom::{portfolio_document, ClickEvent, Document, ElementId, Viewport};
pub use adapters::DevToClient;
pub use app::{ArticleFeedLoader, Page};
pub use config::Config;
