//! Navigation controller
//!
//! Mobile menu toggle plus in-page navigation for `.main-nav` links.

use crate::adapters::dom::{ClickEvent, Document, ElementId, ScrollBehavior, Viewport};

pub const MOBILE_TOGGLE_ID: &str = "mobile-toggle";
pub const MAIN_NAV_ID: &str = "main-nav";
pub const MAIN_NAV_CLASS: &str = "main-nav";

const OPEN_CLASS: &str = "active";
const ICON_CLOSED: &str = "fa-bars";
const ICON_OPEN: &str = "fa-times";

pub struct NavController {
    toggle: Option<ElementId>,
    nav: Option<ElementId>,
    links: Vec<ElementId>,
}

impl NavController {
    pub fn init(doc: &Document) -> Self {
        let links = doc
            .elements_by_class(MAIN_NAV_CLASS)
            .into_iter()
            .flat_map(|nav| doc.descendants_by_tag(nav, "a"))
            .collect();

        Self {
            toggle: doc.get_element_by_id(MOBILE_TOGGLE_ID),
            nav: doc.get_element_by_id(MAIN_NAV_ID),
            links,
        }
    }

    pub fn toggle(&self) -> Option<ElementId> {
        self.toggle
    }

    pub fn links(&self) -> &[ElementId] {
        &self.links
    }

    pub fn is_link(&self, id: ElementId) -> bool {
        self.links.contains(&id)
    }

    #[cfg(test)]
    pub fn is_open(&self, doc: &Document) -> bool {
        self.nav.is_some_and(|nav| doc.has_class(nav, OPEN_CLASS))
    }

    /// Open or close the mobile menu and swap the toggle icon
    pub fn on_toggle_click(&self, doc: &mut Document) {
        let Some(nav) = self.nav else {
            return;
        };
        let open = doc.toggle_class(nav, OPEN_CLASS);
        self.set_icon(doc, open);
    }

    /// Smooth-scroll to the link's section and close the menu
    ///
    /// Default navigation is always prevented so the URL keeps no hash.
    pub fn on_link_click(
        &self,
        doc: &mut Document,
        viewport: &mut Viewport,
        link: ElementId,
        event: &mut ClickEvent,
    ) {
        event.prevent_default();

        let Some(target_id) = doc
            .attribute(link, "href")
            .and_then(|href| href.strip_prefix('#'))
            .map(str::to_string)
        else {
            return;
        };

        if let Some(section) = doc.get_element_by_id(&target_id) {
            viewport.scroll_into_view(doc, section, ScrollBehavior::Smooth);
        }

        if let Some(nav) = self.nav {
            doc.remove_class(nav, OPEN_CLASS);
        }
        self.set_icon(doc, false);
    }

    fn set_icon(&self, doc: &mut Document, open: bool) {
        let Some(icon) = self
            .toggle
            .and_then(|toggle| doc.first_descendant_by_tag(toggle, "i"))
        else {
            return;
        };
        let (from, to) = if open {
            (ICON_CLOSED, ICON_OPEN)
        } else {
            (ICON_OPEN, ICON_CLOSED)
        };
        doc.remove_class(icon, from);
        doc.add_class(icon, to);
    }
}
