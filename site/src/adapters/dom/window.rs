//! Viewport and event types
//!
//! Scrolling is modelled as an instant position change. The requested
//! behaviour is kept so callers can tell smooth scrolls from jumps.

use super::document::{Document, ElementId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
}

/// A programmatic scroll issued by a controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Clone)]
pub struct Viewport {
    scroll_y: f64,
    height: f64,
    last_request: Option<ScrollRequest>,
}

impl Viewport {
    pub fn new(height: f64) -> Self {
        Self {
            scroll_y: 0.0,
            height,
            last_request: None,
        }
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// The most recent programmatic scroll, if any
    pub fn last_request(&self) -> Option<ScrollRequest> {
        self.last_request
    }

    /// User scroll: move without recording a request
    pub fn set_scroll_y(&mut self, y: f64) {
        self.scroll_y = y.max(0.0);
    }

    /// `window.scrollTo`
    pub fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        self.set_scroll_y(top);
        self.last_request = Some(ScrollRequest {
            top: self.scroll_y,
            behavior,
        });
    }

    /// `element.scrollIntoView` with `block: 'start'`
    pub fn scroll_into_view(&mut self, doc: &Document, id: ElementId, behavior: ScrollBehavior) {
        self.scroll_to(doc.layout(id).top, behavior);
    }
}

/// A click being dispatched through the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    target: ElementId,
    default_prevented: bool,
}

impl ClickEvent {
    pub fn new(target: ElementId) -> Self {
        Self {
            target,
            default_prevented: false,
        }
    }

    pub fn target(&self) -> ElementId {
        self.target
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
