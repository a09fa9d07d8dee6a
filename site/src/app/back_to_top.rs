//! Back-to-top control

use crate::adapters::dom::{ClickEvent, Document, ElementId, ScrollBehavior, Viewport};

pub const BACK_TO_TOP_ID: &str = "backToTop";
pub const SHOW_THRESHOLD: f64 = 300.0;

const SHOW_CLASS: &str = "show";

pub struct BackToTopController {
    button: Option<ElementId>,
}

impl BackToTopController {
    pub fn init(doc: &Document) -> Self {
        Self {
            button: doc.get_element_by_id(BACK_TO_TOP_ID),
        }
    }

    pub fn button(&self) -> Option<ElementId> {
        self.button
    }

    pub fn on_scroll(&self, doc: &mut Document, viewport: &Viewport) {
        let Some(button) = self.button else {
            return;
        };
        if viewport.scroll_y() > SHOW_THRESHOLD {
            doc.add_class(button, SHOW_CLASS);
        } else {
            doc.remove_class(button, SHOW_CLASS);
        }
    }

    pub fn on_click(&self, viewport: &mut Viewport, event: &mut ClickEvent) {
        event.prevent_default();
        viewport.scroll_to(0.0, ScrollBehavior::Smooth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_document;

    #[test]
    fn shown_only_past_threshold() {
        let mut doc = test_document();
        let controller = BackToTopController::init(&doc);
        let button = controller.button().unwrap();
        let mut viewport = Viewport::new(900.0);

        viewport.set_scroll_y(SHOW_THRESHOLD);
        controller.on_scroll(&mut doc, &viewport);
        assert!(!doc.has_class(button, SHOW_CLASS));

        viewport.set_scroll_y(SHOW_THRESHOLD + 1.0);
        controller.on_scroll(&mut doc, &viewport);
        assert!(doc.has_class(button, SHOW_CLASS));

        viewport.set_scroll_y(10.0);
        controller.on_scroll(&mut doc, &viewport);
        assert!(!doc.has_class(button, SHOW_CLASS));
    }

    #[test]
    fn click_scrolls_smoothly_to_top() {
        let doc = test_document();
        let controller = BackToTopController::init(&doc);
        let button = controller.button().unwrap();
        let mut viewport = Viewport::new(900.0);
        viewport.set_scroll_y(2400.0);

        let mut event = ClickEvent::new(button);
        controller.on_click(&mut viewport, &mut event);

        assert!(event.default_prevented());
        assert_eq!(viewport.scroll_y(), 0.0);
        assert_eq!(
            viewport.last_request().map(|r| r.behavior),
            Some(ScrollBehavior::Smooth)
        );
    }

    #[test]
    fn page_without_button_is_inert() {
        let mut doc = Document::new();
        let controller = BackToTopController::init(&doc);
        let mut viewport = Viewport::new(900.0);
        viewport.set_scroll_y(1000.0);
        controller.on_scroll(&mut doc, &viewport);
        assert!(controller.button().is_none());
    }
}
