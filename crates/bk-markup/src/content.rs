//! Caller-supplied content.

use crate::node::Node;

/// Content placed inside a derived node, such as a section header or body.
///
/// Text is escaped on output. Markup is trusted and emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawContent"))]
pub enum Content {
    Text(String),
    Markup(String),
}

impl Content {
    /// Plain text content.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Trusted markup content.
    pub fn markup(html: impl Into<String>) -> Self {
        Self::Markup(html.into())
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Content> for Node {
    fn from(content: Content) -> Self {
        match content {
            Content::Text(text) => Node::Text(text),
            Content::Markup(html) => Node::Html(html),
        }
    }
}

/// Configuration form: a bare string is text, `{ html = "..." }` is markup.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawContent {
    Text(String),
    Markup { html: String },
}

#[cfg(feature = "serde")]
impl From<RawContent> for Content {
    fn from(raw: RawContent) -> Self {
        match raw {
            RawContent::Text(text) => Self::Text(text),
            RawContent::Markup { html } => Self::Markup(html),
        }
    }
}
