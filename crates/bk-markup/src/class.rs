//! Class-list composition.

use std::fmt;

/// Ordered list of class tokens.
///
/// Empty tokens are dropped on insertion, so conditional modifiers can be
/// pushed unconditionally with an empty fallback. Order of insertion is the
/// order of output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ClassList(Vec<String>);

impl ClassList {
    /// Create an empty class list.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a token. Blank tokens are ignored.
    pub fn push(&mut self, token: impl Into<String>) -> &mut Self {
        let token = token.into();
        if !token.trim().is_empty() {
            self.0.push(token);
        }
        self
    }

    /// Append a token only when `flag` is set.
    pub fn push_if(&mut self, flag: bool, token: impl Into<String>) -> &mut Self {
        if flag {
            self.push(token);
        }
        self
    }

    /// Append every whitespace-separated token of a caller-supplied class string.
    pub fn extend_raw(&mut self, raw: &str) -> &mut Self {
        for token in raw.split_whitespace() {
            self.0.push(token.to_owned());
        }
        self
    }

    /// Builder form of [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, token: impl Into<String>) -> Self {
        self.push(token);
        self
    }

    /// Builder form of [`push_if`](Self::push_if).
    #[must_use]
    pub fn with_if(mut self, flag: bool, token: impl Into<String>) -> Self {
        self.push_if(flag, token);
        self
    }

    /// Whether the list contains `token`.
    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    /// Tokens in insertion order.
    pub fn tokens(&self) -> Vec<&str> {
        self.0.iter().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

impl<S: Into<String>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for token in iter {
            list.push(token);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tokens_are_dropped() {
        let list: ClassList = ["nav", "", "nav-pills", "  ", "flex-column"]
            .into_iter()
            .collect();
        assert_eq!(list.tokens(), ["nav", "nav-pills", "flex-column"]);
    }

    #[test]
    fn test_order_is_preserved() {
        let list = ClassList::new().with("b").with("a").with("c");
        assert_eq!(list.to_string(), "b a c");
    }

    #[test]
    fn test_push_if() {
        let mut list = ClassList::new();
        list.push("nav-link").push_if(false, "active").push_if(true, "disabled");
        assert_eq!(list.to_string(), "nav-link disabled");
    }

    #[test]
    fn test_extend_raw_splits_whitespace() {
        let mut list = ClassList::new().with("nav");
        list.extend_raw("  my-nav   shadow ");
        assert_eq!(list.tokens(), ["nav", "my-nav", "shadow"]);
    }

    #[test]
    fn test_empty_list_displays_empty() {
        assert_eq!(ClassList::new().to_string(), "");
        assert!(ClassList::new().is_empty());
    }

    #[test]
    fn test_contains() {
        let list = ClassList::new().with("accordion").with("accordion-flush");
        assert!(list.contains("accordion-flush"));
        assert!(!list.contains("accordion-item"));
        assert_eq!(list.len(), 2);
    }
}
