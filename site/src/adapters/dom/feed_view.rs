//! `FeedView` over a document
//!
//! The settled marker lives on the container element, so it survives the
//! view handle and blocks any second render against the same page.

use super::document::{Document, ElementId};
use crate::domain::entities::ArticleRecord;
use crate::domain::ports::FeedView;
use crate::error::DomError;

pub const ARTICLES_WRAPPER_ID: &str = "articles-wrapper";
pub const VIEW_MORE_CONTAINER_ID: &str = "view-more-container";

const FEED_STATE_ATTR: &str = "data-feed-state";
const FEED_STATE_SETTLED: &str = "settled";

/// The article container and the optional "view more" container
pub struct DocumentFeedView<'a> {
    doc: &'a mut Document,
    container: ElementId,
    view_more: Option<ElementId>,
}

impl<'a> DocumentFeedView<'a> {
    /// Bind to `#articles-wrapper` and `#view-more-container`
    ///
    /// Returns `None` when the page has no article container.
    pub fn attach(doc: &'a mut Document) -> Option<Self> {
        let container = doc.get_element_by_id(ARTICLES_WRAPPER_ID)?;
        let view_more = doc.get_element_by_id(VIEW_MORE_CONTAINER_ID);
        Some(Self {
            doc,
            container,
            view_more,
        })
    }

    #[cfg(test)]
    pub fn container(&self) -> ElementId {
        self.container
    }
}

impl FeedView for DocumentFeedView<'_> {
    fn is_settled(&self) -> bool {
        self.doc.attribute(self.container, FEED_STATE_ATTR) == Some(FEED_STATE_SETTLED)
    }

    fn settle(&mut self) -> Result<(), DomError> {
        if self.is_settled() {
            return Err(DomError::AlreadySettled);
        }
        self.doc.clear_children(self.container);
        self.doc
            .set_attribute(self.container, FEED_STATE_ATTR, FEED_STATE_SETTLED);
        Ok(())
    }

    fn append_article(&mut self, article: &ArticleRecord) -> Result<(), DomError> {
        let link = self.doc.append_new(self.container, "a");
        self.doc.set_attribute(link, "href", &article.url);
        self.doc.set_attribute(link, "target", "_blank");
        self.doc.set_attribute(link, "rel", "noopener noreferrer");
        self.doc.add_class(link, "article-card");

        let icon = self.doc.append_new(link, "i");
        self.doc.set_attribute(icon, "class", "fab fa-dev");

        let label = self.doc.append_new(link, "span");
        self.doc.set_text(label, &article.title);
        Ok(())
    }

    fn show_message(&mut self, message: &str) -> Result<(), DomError> {
        let wrapper = self.doc.append_new(self.container, "div");
        self.doc.set_attribute(wrapper, "class", "text-center feed-message");
        let paragraph = self.doc.append_new(wrapper, "p");
        self.doc.set_text(paragraph, message);
        Ok(())
    }

    fn reveal_view_more(&mut self) -> Result<(), DomError> {
        if let Some(view_more) = self.view_more {
            self.doc.set_display(view_more, "block");
        }
        Ok(())
    }
}
