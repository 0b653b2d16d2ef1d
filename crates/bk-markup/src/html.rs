//! HTML serialization of the node tree.

use crate::node::{Element, Node};

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input"];

/// Escape special HTML characters in text and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

impl Element {
    /// Serialize the element and its subtree to HTML.
    ///
    /// Output is deterministic: class tokens and attributes appear in
    /// insertion order, `class` first when non-empty.
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(128);
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag());

        if !self.class_list().is_empty() {
            push_attr(out, "class", &self.class_list().to_string());
        }
        for (name, value) in self.attrs().iter() {
            push_attr(out, name, value);
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag()) {
            return;
        }

        for node in self.child_nodes() {
            match node {
                Node::Element(child) => child.write_html(out),
                Node::Text(text) => out.push_str(&escape_html(text)),
                Node::Html(html) => out.push_str(html),
            }
        }

        out.push_str("</");
        out.push_str(self.tag());
        out.push('>');
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_html(value));
    out.push('"');
}
