//! Scroll reveal
//!
//! Intersection-based reveal of page sections. A section becomes `active`
//! as soon as any part of it, edges included, is inside the margin-adjusted
//! viewport and stays active afterwards.

use crate::adapters::dom::{Document, ElementId, Viewport};

pub const SECTION_CLASS: &str = "section";
pub const REVEAL_CLASS: &str = "reveal";
pub const ACTIVE_CLASS: &str = "active";

/// Root margins (`rootMargin` top and bottom); negative values shrink the root
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub root_margin_top: f64,
    pub root_margin_bottom: f64,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            root_margin_top: 0.0,
            root_margin_bottom: -50.0,
        }
    }
}

pub struct ScrollRevealController {
    options: ObserverOptions,
    targets: Vec<ElementId>,
}

impl ScrollRevealController {
    /// Tag every `.section` with `reveal` and start observing it
    pub fn init(doc: &mut Document, options: ObserverOptions) -> Self {
        let targets = doc.elements_by_class(SECTION_CLASS);
        for target in &targets {
            doc.add_class(*target, REVEAL_CLASS);
        }
        Self { options, targets }
    }

    pub fn targets(&self) -> &[ElementId] {
        &self.targets
    }

    /// Activate every target intersecting the viewport
    pub fn observe(&self, doc: &mut Document, viewport: &Viewport) {
        for target in &self.targets {
            if self.is_intersecting(doc, viewport, *target) {
                doc.add_class(*target, ACTIVE_CLASS);
            }
        }
    }

    fn is_intersecting(&self, doc: &Document, viewport: &Viewport, target: ElementId) -> bool {
        let layout = doc.layout(target);
        let root_top = viewport.scroll_y() - self.options.root_margin_top;
        let root_bottom =
            viewport.scroll_y() + viewport.height() + self.options.root_margin_bottom;

        layout.top <= root_bottom && layout.bottom() >= root_top
    }
}
