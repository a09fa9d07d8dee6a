//! In-memory DOM adapter
//!
//! Stands in for the browser document: element tree, viewport, click
//! events, and the `FeedView` implementation the feed loader renders into.

pub mod document;
pub mod feed_view;
pub mod html;
pub mod layout;
pub mod window;

pub use document::{Document, Element, ElementId, LayoutBox};
pub use feed_view::{DocumentFeedView, ARTICLES_WRAPPER_ID, VIEW_MORE_CONTAINER_ID};
pub use layout::portfolio_document;
pub use window::{ClickEvent, ScrollBehavior, ScrollRequest, Viewport};
