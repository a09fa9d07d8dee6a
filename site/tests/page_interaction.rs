//! Drives a rendered page through the public API only

use folio_site::adapters::dom::ScrollBehavior;
use folio_site::{portfolio_document, Page, Viewport};

fn ready_page() -> Page {
    let document = portfolio_document("https://dev.to/someone");
    Page::ready(document, Viewport::new(900.0), 2026)
}

fn active_nav_links(page: &Page) -> Vec<String> {
    let doc = page.document();
    let nav = doc.get_element_by_id("main-nav").unwrap();
    doc.descendants_by_tag(nav, "a")
        .into_iter()
        .filter(|l| doc.has_class(*l, "active"))
        .filter_map(|l| doc.attribute(l, "href").map(str::to_string))
        .collect()
}

#[test]
fn menu_toggle_and_nav_link_round_trip() {
    let mut page = ready_page();
    let toggle = page.document().get_element_by_id("mobile-toggle").unwrap();
    let nav = page.document().get_element_by_id("main-nav").unwrap();

    page.click(toggle);
    assert!(page.document().has_class(nav, "active"));

    let link = page
        .document()
        .descendants_by_tag(nav, "a")
        .into_iter()
        .find(|l| page.document().attribute(*l, "href") == Some("#projects"))
        .unwrap();
    let event = page.click(link);

    let projects = page.document().get_element_by_id("projects").unwrap();
    assert!(event.default_prevented());
    assert!(!page.document().has_class(nav, "active"));
    assert_eq!(page.viewport().scroll_y(), page.document().layout(projects).top);
    assert_eq!(
        page.viewport().last_request().map(|r| r.behavior),
        Some(ScrollBehavior::Smooth)
    );
    assert_eq!(active_nav_links(&page), vec!["#projects"]);
}

#[test]
fn scrolling_down_and_back_to_top() {
    let mut page = ready_page();
    let button = page.document().get_element_by_id("backToTop").unwrap();
    assert!(!page.document().has_class(button, "show"));

    page.scroll(2000.0);
    assert!(page.document().has_class(button, "show"));

    page.click(button);
    assert_eq!(page.viewport().scroll_y(), 0.0);
    assert!(!page.document().has_class(button, "show"));
    assert_eq!(active_nav_links(&page), vec!["#home"]);
}

#[test]
fn year_is_injected_into_footer() {
    let page = ready_page();
    let doc = page.document();
    let year = doc.get_element_by_id("year").unwrap();
    assert_eq!(doc.text_content(year), "2026");
}
