//! Structural node tree.

use crate::attrs::Attrs;
use crate::class::ClassList;

/// Structural purpose of an element, independent of its tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Role {
    /// Root wrapper of a component.
    Container,
    /// Ordered list of entries.
    List,
    /// One entry of a list or group.
    Item,
    /// Navigable anchor.
    Link,
    /// Trigger that toggles another node.
    Button,
    /// Visual separator.
    Divider,
    /// Section heading.
    Heading,
    /// Region shown or hidden by a trigger.
    Panel,
}

/// A node in the derived tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Node {
    Element(Element),
    /// Text, escaped on output.
    Text(String),
    /// Trusted markup, emitted verbatim.
    Html(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Element with a tag, role, classes, attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Element {
    tag: &'static str,
    role: Role,
    classes: ClassList,
    attrs: Attrs,
    children: Vec<Node>,
}

impl Element {
    #[must_use]
    pub fn new(tag: &'static str, role: Role) -> Self {
        Self {
            tag,
            role,
            classes: ClassList::new(),
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn class(mut self, token: impl Into<String>) -> Self {
        self.classes.push(token);
        self
    }

    #[must_use]
    pub fn class_if(mut self, flag: bool, token: impl Into<String>) -> Self {
        self.classes.push_if(flag, token);
        self
    }

    /// Replace the class list.
    #[must_use]
    pub fn classes(mut self, classes: ClassList) -> Self {
        self.classes = classes;
        self
    }

    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(name, value);
        self
    }

    /// Add an attribute only when `flag` is set.
    #[must_use]
    pub fn attr_if(
        mut self,
        flag: bool,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.attrs.set_if(flag, name, value);
        self
    }

    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    #[must_use]
    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn class_list(&self) -> &ClassList {
        &self.classes
    }

    pub fn has_class(&self, token: &str) -> bool {
        self.classes.contains(token)
    }

    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    /// Value of attribute `name`, if present.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    pub fn id(&self) -> Option<&str> {
        self.attrs.get("id")
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Direct children that are elements.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) | Node::Html(_) => None,
        })
    }

    /// All descendant elements in document order, excluding `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants::new(self)
    }

    /// First element (self included) whose `id` attribute equals `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.descendants().find(|el| el.id() == Some(id))
    }

    /// Descendant elements carrying class `token`, in document order.
    pub fn find_by_class(&self, token: &str) -> Vec<&Element> {
        self.descendants().filter(|el| el.has_class(token)).collect()
    }

    /// Concatenated text of all text descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(el: &Element, out: &mut String) {
    for node in &el.children {
        match node {
            Node::Element(child) => collect_text(child, out),
            Node::Text(text) => out.push_str(text),
            Node::Html(_) => {}
        }
    }
}

/// Depth-first iterator over descendant elements.
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Descendants<'a> {
    fn new(root: &'a Element) -> Self {
        let mut stack: Vec<&Element> = root.child_elements().collect();
        stack.reverse();
        Self { stack }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let el = self.stack.pop()?;
        let start = self.stack.len();
        self.stack.extend(el.child_elements());
        self.stack[start..].reverse();
        Some(el)
    }
}
