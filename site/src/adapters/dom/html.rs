//! HTML serialization of the document model

use super::document::{Document, ElementId};

impl Document {
    /// Serialize an element and its subtree
    pub fn outer_html(&self, id: ElementId) -> String {
        let mut buf = String::new();
        self.write_element(id, &mut buf);
        buf
    }

    /// Serialize the children of an element
    pub fn inner_html(&self, id: ElementId) -> String {
        let mut buf = String::new();
        if let Some(text) = self.element(id).text() {
            buf.push_str(&html_escape(text));
        }
        for child in self.element(id).children() {
            self.write_element(*child, &mut buf);
        }
        buf
    }

    /// Serialize the whole page
    pub fn to_html(&self) -> String {
        let mut buf = String::from("<!DOCTYPE html>\n");
        self.write_element(self.root(), &mut buf);
        buf.push('\n');
        buf
    }

    fn write_element(&self, id: ElementId, buf: &mut String) {
        let element = self.element(id);
        buf.push('<');
        buf.push_str(element.tag());

        for (name, value) in element.attributes() {
            buf.push_str(&format!(" {}=\"{}\"", name, html_escape(value)));
        }
        if !element.classes().is_empty() {
            buf.push_str(&format!(
                " class=\"{}\"",
                html_escape(&element.classes().join(" "))
            ));
        }
        if let Some(display) = element.display() {
            buf.push_str(&format!(" style=\"display: {}\"", html_escape(display)));
        }
        buf.push('>');

        buf.push_str(&self.inner_html(id));

        buf.push_str("</");
        buf.push_str(element.tag());
        buf.push('>');
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
