//! Element Tree - In-memory stand-in for the page document
//!
//! Renderers mutate [`Element`] values instead of a live document, which
//! keeps every component testable without a browser. The tree serializes
//! to HTML through [`Element::to_html`] (or `Display`).

use std::collections::BTreeMap;
use std::fmt::{self, Write};

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Nested element
    Element(Element),
    /// Plain text, escaped on serialization
    Text(String),
    /// Pre-resolved markup, emitted verbatim
    Markup(String),
}

/// A single element: tag, identity, classes, attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    hidden: bool,
    children: Vec<Node>,
}

impl Element {
    /// Create an empty, visible element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            hidden: false,
            children: Vec::new(),
        }
    }

    /// Builder: set the element id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builder: add every class in `classes`.
    pub fn with_classes(mut self, classes: &[&str]) -> Self {
        for class in classes {
            self.add_class(class);
        }
        self
    }

    /// Builder: set an attribute.
    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder: start hidden.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Element id, if any
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Classes in insertion order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Add a class. Adding a class already present is a no-op.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Remove a class. Removing an absent class is a no-op.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Whether the element carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Set (or overwrite) an attribute.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attrs.insert(name.to_string(), value.into());
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.remove(name)
    }

    /// Attribute value, if set
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Whether the attribute is set at all
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Make the element visible.
    pub fn show(&mut self) {
        self.hidden = false;
    }

    /// Hide the element (`display: none`).
    pub fn hide(&mut self) {
        self.hidden = true;
    }

    /// Whether the element is displayed
    pub fn is_visible(&self) -> bool {
        !self.hidden
    }

    /// Replace all children with one text node.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children.clear();
        self.children.push(Node::Text(text.into()));
    }

    /// Append a child element.
    pub fn append(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Append a text node.
    pub fn append_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    /// Append pre-resolved markup.
    pub fn append_markup(&mut self, markup: impl Into<String>) {
        self.children.push(Node::Markup(markup.into()));
    }

    /// Remove every child.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// All child nodes
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements only, skipping text and markup (table rows, alerts).
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) | Node::Markup(_) => None,
        })
    }

    /// Mutable access to the `index`-th child element.
    pub fn child_element_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.children
            .iter_mut()
            .filter_map(|node| match node {
                Node::Element(el) => Some(el),
                Node::Text(_) | Node::Markup(_) => None,
            })
            .nth(index)
    }

    /// Detach the `index`-th child element.
    pub fn remove_child_element(&mut self, index: usize) -> Option<Element> {
        let pos = self
            .children
            .iter()
            .enumerate()
            .filter(|(_, node)| matches!(node, Node::Element(_)))
            .nth(index)
            .map(|(pos, _)| pos)?;
        match self.children.remove(pos) {
            Node::Element(el) => Some(el),
            Node::Text(_) | Node::Markup(_) => None,
        }
    }

    /// Concatenated text of the subtree. Markup contributes its raw source.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Element(el) => el.collect_text(out),
                Node::Text(text) | Node::Markup(text) => out.push_str(text),
            }
        }
    }

    /// Every descendant (depth-first, self excluded) carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        for child in self.child_elements() {
            if child.has_class(class) {
                found.push(child);
            }
            found.extend(child.find_by_class(class));
        }
        found
    }

    /// Serialize the subtree as HTML.
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        if let Some(id) = &self.id {
            write!(f, " id=\"{}\"", Escaped(id))?;
        }
        if !self.classes.is_empty() {
            write!(f, " class=\"{}\"", Escaped(&self.classes.join(" ")))?;
        }
        for (name, value) in &self.attrs {
            write!(f, " {name}=\"{}\"", Escaped(value))?;
        }
        if self.hidden {
            f.write_str(" style=\"display: none\"")?;
        }
        f.write_char('>')?;
        for node in &self.children {
            match node {
                Node::Element(el) => write!(f, "{el}")?,
                Node::Text(text) => write!(f, "{}", Escaped(text))?,
                Node::Markup(markup) => f.write_str(markup)?,
            }
        }
        write!(f, "</{}>", self.tag)
    }
}

/// HTML-escaping display adapter.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                c => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_are_a_set() {
        let mut el = Element::new("td").with_classes(&["badge", "bg-warning"]);
        el.add_class("badge");
        assert_eq!(el.classes(), ["badge", "bg-warning"]);
        el.remove_class("bg-warning");
        el.remove_class("bg-warning");
        assert!(!el.has_class("bg-warning"));
    }

    #[test]
    fn test_serialization_escapes_text_not_markup() {
        let mut el = Element::new("div").with_id("baseMessages");
        el.append_text("a < b");
        el.append_markup("<b>bold</b>");
        assert_eq!(
            el.to_html(),
            "<div id=\"baseMessages\">a &lt; b<b>bold</b></div>"
        );
    }

    #[test]
    fn test_hidden_serializes_display_none() {
        let mut el = Element::new("div").hidden();
        assert!(!el.is_visible());
        assert!(el.to_html().contains("style=\"display: none\""));
        el.show();
        assert!(!el.to_html().contains("display"));
    }

    #[test]
    fn test_remove_child_element_skips_text() {
        let mut el = Element::new("div");
        el.append_text("lead");
        el.append(Element::new("p").with_id("first"));
        el.append(Element::new("p").with_id("second"));

        let removed = el.remove_child_element(1).unwrap();
        assert_eq!(removed.id(), Some("second"));
        assert_eq!(el.children().len(), 2);
        assert!(el.remove_child_element(5).is_none());
    }

    #[test]
    fn test_text_content_and_find() {
        let mut row = Element::new("tr");
        let mut cell = Element::new("td").with_classes(&["x"]);
        cell.set_text("one");
        row.append(cell);
        let mut link = Element::new("a").with_classes(&["x"]);
        link.set_text("two");
        let mut td = Element::new("td");
        td.append(link);
        row.append(td);

        assert_eq!(row.text_content(), "onetwo");
        assert_eq!(row.find_by_class("x").len(), 2);
    }
}
