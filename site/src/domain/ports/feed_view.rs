//! Feed view port trait
//!
//! The part of the page the feed loader is allowed to touch.

use crate::domain::entities::ArticleRecord;
use crate::error::DomError;

/// Port trait for rendering a feed outcome
pub trait FeedView {
    /// Whether a terminal outcome has already been rendered
    fn is_settled(&self) -> bool;

    /// Remove the loading placeholder and mark the container settled
    fn settle(&mut self) -> Result<(), DomError>;

    /// Append one clickable article entry
    fn append_article(&mut self, article: &ArticleRecord) -> Result<(), DomError>;

    /// Render a single static message in place of the articles
    fn show_message(&mut self, message: &str) -> Result<(), DomError>;

    /// Make the "view more" link visible, if the page has one
    fn reveal_view_more(&mut self) -> Result<(), DomError>;
}
