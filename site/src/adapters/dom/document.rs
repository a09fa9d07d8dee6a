//! In-memory document model
//!
//! An arena of elements addressed by `ElementId`. Only the operations the
//! page controllers need are modelled: attributes, class lists, text,
//! inline `display`, a vertical layout box, and tree edits.

use std::collections::BTreeMap;

/// Handle to an element in a `Document`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// Vertical placement of an element, relative to the document top
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutBox {
    pub top: f64,
    pub height: f64,
}

impl LayoutBox {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    text: Option<String>,
    display: Option<String>,
    layout: LayoutBox,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: BTreeMap::new(),
            classes: Vec::new(),
            text: None,
            display: None,
            layout: LayoutBox::default(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn display(&self) -> Option<&str> {
        self.display.as_deref()
    }

    pub fn layout(&self) -> LayoutBox {
        self.layout
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }
}

/// A page: a `body` root plus everything attached beneath it
///
/// Detached elements stay in the arena but are invisible to lookups.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
    root: ElementId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Element::new("body")],
            root: ElementId(0),
        }
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn element(&self, id: ElementId) -> &Element {
        &self.nodes[id.0]
    }

    fn element_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.nodes[id.0]
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        self.nodes.push(Element::new(tag));
        ElementId(self.nodes.len() - 1)
    }

    /// Move `child` to the end of `parent`'s children
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        self.detach(child);
        self.element_mut(child).parent = Some(parent);
        self.element_mut(parent).children.push(child);
    }

    /// Create an element and append it in one step
    pub fn append_new(&mut self, parent: ElementId, tag: &str) -> ElementId {
        let child = self.create_element(tag);
        self.append_child(parent, child);
        child
    }

    pub fn detach(&mut self, id: ElementId) {
        if let Some(parent) = self.element_mut(id).parent.take() {
            self.element_mut(parent).children.retain(|c| *c != id);
        }
    }

    /// Drop all children and text of an element (`innerHTML = ''`)
    pub fn clear_children(&mut self, id: ElementId) {
        let children = std::mem::take(&mut self.element_mut(id).children);
        for child in children {
            self.element_mut(child).parent = None;
        }
        self.element_mut(id).text = None;
    }

    /// Replace the content of an element with plain text
    pub fn set_text(&mut self, id: ElementId, text: &str) {
        self.clear_children(id);
        self.element_mut(id).text = Some(text.to_string());
    }

    /// Concatenated text of an element and its descendants
    pub fn text_content(&self, id: ElementId) -> String {
        let mut buf = String::new();
        for node in self.descendants(id) {
            if let Some(text) = self.element(node).text() {
                buf.push_str(text);
            }
        }
        buf
    }

    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) {
        if name == "class" {
            self.element_mut(id).classes = value.split_whitespace().map(String::from).collect();
        } else {
            self.element_mut(id)
                .attributes
                .insert(name.to_string(), value.to_string());
        }
    }

    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.element(id).attribute(name)
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if !self.has_class(id, class) {
            self.element_mut(id).classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        self.element_mut(id).classes.retain(|c| c != class);
    }

    /// Toggle a class; returns whether it is now present
    pub fn toggle_class(&mut self, id: ElementId, class: &str) -> bool {
        if self.has_class(id, class) {
            self.remove_class(id, class);
            false
        } else {
            self.add_class(id, class);
            true
        }
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.element(id).has_class(class)
    }

    /// Set the inline `display` style
    pub fn set_display(&mut self, id: ElementId, display: &str) {
        self.element_mut(id).display = Some(display.to_string());
    }

    pub fn display(&self, id: ElementId) -> Option<&str> {
        self.element(id).display()
    }

    pub fn set_layout(&mut self, id: ElementId, layout: LayoutBox) {
        self.element_mut(id).layout = layout;
    }

    pub fn layout(&self, id: ElementId) -> LayoutBox {
        self.element(id).layout()
    }

    /// Pre-order walk of `id` and everything beneath it
    pub fn descendants(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.element(node).children.iter().rev().copied());
        }
        out
    }

    /// `id` followed by its ancestors up to the root
    pub fn ancestors(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = vec![id];
        let mut current = id;
        while let Some(parent) = self.element(current).parent {
            out.push(parent);
            current = parent;
        }
        out
    }

    #[cfg(test)]
    pub fn is_attached(&self, id: ElementId) -> bool {
        self.ancestors(id).last() == Some(&self.root)
    }

    pub fn get_element_by_id(&self, element_id: &str) -> Option<ElementId> {
        self.descendants(self.root)
            .into_iter()
            .find(|node| self.element(*node).attribute("id") == Some(element_id))
    }

    /// Attached elements carrying `class`, in document order
    pub fn elements_by_class(&self, class: &str) -> Vec<ElementId> {
        self.descendants(self.root)
            .into_iter()
            .filter(|node| self.element(*node).has_class(class))
            .collect()
    }

    /// Attached elements with the given tag, in document order
    pub fn elements_by_tag(&self, tag: &str) -> Vec<ElementId> {
        self.descendants_by_tag(self.root, tag)
    }

    /// Strict descendants of `id` with the given tag, in document order
    pub fn descendants_by_tag(&self, id: ElementId, tag: &str) -> Vec<ElementId> {
        self.descendants(id)
            .into_iter()
            .skip(1)
            .filter(|node| self.element(*node).tag == tag)
            .collect()
    }

    /// First strict descendant with the given tag (`querySelector(tag)`)
    pub fn first_descendant_by_tag(&self, id: ElementId, tag: &str) -> Option<ElementId> {
        self.descendants_by_tag(id, tag).into_iter().next()
    }
}
