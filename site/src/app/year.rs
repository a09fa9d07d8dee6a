//! Footer year

use crate::adapters::dom::Document;

pub const YEAR_ELEMENT_ID: &str = "year";

/// Write `year` into `#year`; pages without one are left untouched
pub fn inject_year(doc: &mut Document, year: i32) {
    if let Some(el) = doc.get_element_by_id(YEAR_ELEMENT_ID) {
        doc.set_text(el, &year.to_string());
    }
}
