//! Domain ports (traits)
//!
//! Port traits define interfaces that the feed loader requires.
//! Adapters provide concrete implementations of these traits.

pub mod article_source;
pub mod feed_view;

pub use article_source::{ArticleSource, SourceResponse};
pub use feed_view::FeedView;
