//! Page wiring
//!
//! `Page::ready` is the page-ready entry point: it takes the document and
//! viewport explicitly, runs the one-off setup, and keeps the controllers
//! that later scroll and click events are dispatched to.

use crate::adapters::dom::{ClickEvent, Document, DocumentFeedView, ElementId, Viewport};
use crate::domain::entities::LoadOutcome;
use crate::domain::ports::ArticleSource;

use super::article_feed_loader::ArticleFeedLoader;
use super::back_to_top::BackToTopController;
use super::nav::NavController;
use super::scroll_reveal::{ObserverOptions, ScrollRevealController};
use super::scroll_spy::ScrollSpyController;
use super::year::inject_year;

pub struct Page {
    document: Document,
    viewport: Viewport,
    reveal: ScrollRevealController,
    nav: NavController,
    spy: ScrollSpyController,
    back_to_top: BackToTopController,
}

impl Page {
    pub fn ready(mut document: Document, viewport: Viewport, year: i32) -> Self {
        inject_year(&mut document, year);

        let reveal = ScrollRevealController::init(&mut document, ObserverOptions::default());
        reveal.observe(&mut document, &viewport);

        let nav = NavController::init(&document);
        let spy = ScrollSpyController::init(&document);
        let back_to_top = BackToTopController::init(&document);

        tracing::debug!(
            sections = reveal.targets().len(),
            nav_links = nav.links().len(),
            "Page ready"
        );

        Self {
            document,
            viewport,
            reveal,
            nav,
            spy,
            back_to_top,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Load the article feed into `#articles-wrapper`
    ///
    /// Returns `None` without issuing a request when the page has no
    /// article container or the feed has already been rendered.
    pub async fn load_articles<S: ArticleSource>(
        &mut self,
        loader: &ArticleFeedLoader<S>,
    ) -> Option<LoadOutcome> {
        let Some(mut view) = DocumentFeedView::attach(&mut self.document) else {
            tracing::debug!("No article container, skipping feed");
            return None;
        };

        match loader.load_into(&mut view).await {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                tracing::debug!(error = %e, "Article feed not rendered");
                None
            }
        }
    }

    /// User scroll to `y`
    pub fn scroll(&mut self, y: f64) {
        self.viewport.set_scroll_y(y);
        self.dispatch_scroll();
    }

    /// Dispatch a click on `target`, bubbling through its ancestors
    pub fn click(&mut self, target: ElementId) -> ClickEvent {
        let mut event = ClickEvent::new(target);
        let scroll_before = self.viewport.scroll_y();

        for node in self.document.ancestors(event.target()) {
            if Some(node) == self.nav.toggle() {
                self.nav.on_toggle_click(&mut self.document);
            }
            if self.nav.is_link(node) {
                self.nav
                    .on_link_click(&mut self.document, &mut self.viewport, node, &mut event);
            }
            if Some(node) == self.back_to_top.button() {
                self.back_to_top.on_click(&mut self.viewport, &mut event);
            }
        }

        if self.viewport.scroll_y() != scroll_before {
            self.dispatch_scroll();
        }
        event
    }

    fn dispatch_scroll(&mut self) {
        self.back_to_top.on_scroll(&mut self.document, &self.viewport);
        self.spy.on_scroll(&mut self.document, &self.viewport);
        self.reveal.observe(&mut self.document, &self.viewport);
    }
}
