//! Scroll spy
//!
//! Highlights the nav link of the section currently under the header.

use crate::adapters::dom::{Document, ElementId, Viewport};

use super::nav::MAIN_NAV_CLASS;

const ACTIVE_CLASS: &str = "active";

/// Header allowance: a section counts as current this far before its top
pub const SPY_OFFSET: f64 = 150.0;

pub struct ScrollSpyController {
    sections: Vec<ElementId>,
    links: Vec<ElementId>,
}

impl ScrollSpyController {
    pub fn init(doc: &Document) -> Self {
        let links = doc
            .elements_by_class(MAIN_NAV_CLASS)
            .into_iter()
            .flat_map(|nav| doc.descendants_by_tag(nav, "a"))
            .collect();

        Self {
            sections: doc.elements_by_tag("section"),
            links,
        }
    }

    /// Id of the last section whose top (less the offset) has been reached
    pub fn current_section(&self, doc: &Document, viewport: &Viewport) -> Option<String> {
        self.sections
            .iter()
            .filter(|s| viewport.scroll_y() >= doc.layout(**s).top - SPY_OFFSET)
            .filter_map(|s| doc.attribute(*s, "id"))
            .last()
            .map(str::to_string)
    }

    /// Mark the link whose `href` fragment equals the current section id
    pub fn on_scroll(&self, doc: &mut Document, viewport: &Viewport) {
        let current = self.current_section(doc, viewport);
        for link in &self.links {
            doc.remove_class(*link, ACTIVE_CLASS);
            let fragment = doc
                .attribute(*link, "href")
                .and_then(|href| href.rsplit_once('#'))
                .map(|(_, fragment)| fragment);
            if current.is_some() && fragment == current.as_deref() {
                doc.add_class(*link, ACTIVE_CLASS);
            }
        }
    }
}
