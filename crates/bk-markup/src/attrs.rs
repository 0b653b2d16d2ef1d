//! Ordered attribute map.

/// Ordered mapping from attribute name to value.
///
/// Attribute presence is a pure function of state: guarded attributes are
/// added with [`set_if`](Self::set_if) and are absent when the guard is false.
/// Setting an existing name replaces the value in place, keeping its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Attrs(Vec<(String, String)>);

impl Attrs {
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Set `name` to `value`.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.0.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.0.push((name, value));
        }
        self
    }

    /// Set `name` to `value` only when `flag` is set.
    pub fn set_if(
        &mut self,
        flag: bool,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        if flag {
            self.set(name, value);
        }
        self
    }

    /// Value of `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
