//! Default portfolio page
//!
//! Builds the static markup the controllers are wired against: header with
//! navigation, one `<section>` per nav entry, the article feed, footer and
//! the back-to-top control. Sections are stacked with a fixed height so the
//! scroll-driven controllers have a layout to work with.

use super::document::{Document, ElementId, LayoutBox};
use super::feed_view::{ARTICLES_WRAPPER_ID, VIEW_MORE_CONTAINER_ID};

const HEADER_HEIGHT: f64 = 80.0;
const SECTION_HEIGHT: f64 = 800.0;

/// `(id, nav label)` for every page section, top to bottom
pub const SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("projects", "Projects"),
    ("articles", "Articles"),
    ("contact", "Contact"),
];

/// Build the portfolio page
///
/// `profile_url` is the target of the "view more" link under the articles.
pub fn portfolio_document(profile_url: &str) -> Document {
    let mut doc = Document::new();
    let root = doc.root();

    build_header(&mut doc, root);

    let main = doc.append_new(root, "main");
    for (index, (id, label)) in SECTIONS.iter().enumerate() {
        let section = doc.append_new(main, "section");
        doc.set_attribute(section, "id", id);
        doc.set_attribute(section, "class", "section");
        doc.set_layout(
            section,
            LayoutBox::new(
                HEADER_HEIGHT + index as f64 * SECTION_HEIGHT,
                SECTION_HEIGHT,
            ),
        );

        let heading = doc.append_new(section, "h2");
        doc.set_text(heading, label);

        if *id == "articles" {
            build_article_feed(&mut doc, section, profile_url);
        }
    }

    build_footer(&mut doc, root);

    let back_to_top = doc.append_new(root, "a");
    doc.set_attribute(back_to_top, "id", "backToTop");
    doc.set_attribute(back_to_top, "href", "#");
    doc.set_attribute(back_to_top, "class", "back-to-top");
    let arrow = doc.append_new(back_to_top, "i");
    doc.set_attribute(arrow, "class", "fas fa-arrow-up");

    doc
}

fn build_header(doc: &mut Document, root: ElementId) {
    let header = doc.append_new(root, "header");
    doc.set_layout(header, LayoutBox::new(0.0, HEADER_HEIGHT));

    let toggle = doc.append_new(header, "button");
    doc.set_attribute(toggle, "id", "mobile-toggle");
    doc.set_attribute(toggle, "class", "mobile-toggle");
    let icon = doc.append_new(toggle, "i");
    doc.set_attribute(icon, "class", "fas fa-bars");

    let nav = doc.append_new(header, "nav");
    doc.set_attribute(nav, "id", "main-nav");
    doc.set_attribute(nav, "class", "main-nav");
    for (id, label) in SECTIONS {
        let link = doc.append_new(nav, "a");
        doc.set_attribute(link, "href", &format!("#{}", id));
        doc.set_text(link, label);
    }
}

fn build_article_feed(doc: &mut Document, section: ElementId, profile_url: &str) {
    let wrapper = doc.append_new(section, "div");
    doc.set_attribute(wrapper, "id", ARTICLES_WRAPPER_ID);
    doc.set_attribute(wrapper, "class", "articles-grid");
    let spinner = doc.append_new(wrapper, "div");
    doc.set_attribute(spinner, "class", "loading-spinner");
    let spinner_icon = doc.append_new(spinner, "i");
    doc.set_attribute(spinner_icon, "class", "fas fa-spinner fa-spin");

    let view_more = doc.append_new(section, "div");
    doc.set_attribute(view_more, "id", VIEW_MORE_CONTAINER_ID);
    doc.set_attribute(view_more, "class", "text-center");
    doc.set_display(view_more, "none");
    let link = doc.append_new(view_more, "a");
    doc.set_attribute(link, "href", profile_url);
    doc.set_attribute(link, "target", "_blank");
    doc.set_attribute(link, "rel", "noopener noreferrer");
    doc.set_attribute(link, "class", "btn btn-outline");
    doc.set_text(link, "View more on DEV.to");
}

fn build_footer(doc: &mut Document, root: ElementId) {
    let footer = doc.append_new(root, "footer");
    let copyright = doc.append_new(footer, "p");
    let prefix = doc.append_new(copyright, "span");
    doc.set_text(prefix, "\u{a9} ");
    let year = doc.append_new(copyright, "span");
    doc.set_attribute(year, "id", "year");
}
