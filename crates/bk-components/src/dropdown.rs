//! Dropdown menus.
//!
//! Menu entry derivation is shared with [`Nav`](crate::Nav) submenus: a divider
//! renders as `li > hr.dropdown-divider`, any other entry as
//! `li > a.dropdown-item` with additive `active`/`disabled` modifiers.

use bk_markup::{ClassList, Element, Role};

use crate::click::ClickOutcome;
use crate::href_or_placeholder;

/// One entry of a standalone [`Dropdown`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DropdownEntry {
    pub label: String,
    pub href: Option<String>,
    pub disabled: bool,
    pub active: bool,
    /// Render a divider after this entry.
    pub divider_after: bool,
    /// Render as a non-clickable header.
    pub header: bool,
}

impl DropdownEntry {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
            ..Self::default()
        }
    }

    pub fn header(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            header: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    #[must_use]
    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    #[must_use]
    pub fn divider_after(mut self) -> Self {
        self.divider_after = true;
        self
    }
}

/// Direction the menu opens in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DropDirection {
    #[default]
    Down,
    Up,
    Start,
    End,
}

impl DropDirection {
    fn wrapper_class(self) -> &'static str {
        match self {
            Self::Down => "dropdown",
            Self::Up => "dropup",
            Self::Start => "dropstart",
            Self::End => "dropend",
        }
    }
}

/// Presentation options for a [`Dropdown`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DropdownOptions {
    /// Button style, rendered as `btn-{variant}`.
    pub variant: String,
    pub direction: DropDirection,
    pub dark: bool,
    /// Extra classes for the wrapper.
    pub class_name: String,
    /// Extra classes for the toggle button.
    pub button_class_name: String,
}

impl Default for DropdownOptions {
    fn default() -> Self {
        Self {
            variant: "secondary".to_owned(),
            direction: DropDirection::Down,
            dark: false,
            class_name: String::new(),
            button_class_name: String::new(),
        }
    }
}

/// Button that toggles a menu of links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    button_text: String,
    entries: Vec<DropdownEntry>,
    options: DropdownOptions,
}

impl Dropdown {
    pub fn new(button_text: impl Into<String>, entries: Vec<DropdownEntry>) -> Self {
        Self {
            button_text: button_text.into(),
            entries,
            options: DropdownOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: DropdownOptions) -> Self {
        self.options = options;
        self
    }

    pub fn entries(&self) -> &[DropdownEntry] {
        &self.entries
    }

    pub fn render(&self) -> Element {
        let opts = &self.options;

        let mut wrapper_classes = ClassList::new().with(opts.direction.wrapper_class());
        wrapper_classes.extend_raw(&opts.class_name);

        let mut button_classes = ClassList::new()
            .with("btn")
            .with(format!("btn-{}", opts.variant))
            .with("dropdown-toggle");
        button_classes.extend_raw(&opts.button_class_name);

        let button = Element::new("button", Role::Button)
            .classes(button_classes)
            .attr("type", "button")
            .attr("data-bs-toggle", "dropdown")
            .attr("aria-expanded", "false")
            .text(self.button_text.as_str());

        let mut menu = Element::new("ul", Role::List)
            .class("dropdown-menu")
            .class_if(opts.dark, "dropdown-menu-dark");
        for entry in &self.entries {
            if entry.header {
                menu = menu.child(
                    Element::new("li", Role::Item).child(
                        Element::new("h6", Role::Heading)
                            .class("dropdown-header")
                            .text(entry.label.as_str()),
                    ),
                );
                continue;
            }
            menu = menu.child(menu_link(
                &entry.label,
                entry.href.as_deref(),
                entry.active,
                entry.disabled,
            ));
            if entry.divider_after {
                menu = menu.child(menu_divider());
            }
        }

        tracing::debug!(entries = self.entries.len(), "Derived dropdown");

        Element::new("div", Role::Container)
            .classes(wrapper_classes)
            .child(button)
            .child(menu)
    }

    /// Handle a click on the entry at `index`.
    ///
    /// Headers are not clickable and yield `None`, as does an index out of range.
    pub fn click(&self, index: usize, on_activate: impl FnOnce(usize)) -> Option<ClickOutcome> {
        let entry = self.entries.get(index)?;
        if entry.header {
            return None;
        }
        if entry.disabled {
            return Some(ClickOutcome::Suppressed);
        }
        on_activate(index);
        Some(ClickOutcome::Selected)
    }
}

/// `li > a.dropdown-item` with additive `active`/`disabled` modifiers.
pub(crate) fn menu_link(label: &str, href: Option<&str>, active: bool, disabled: bool) -> Element {
    let link = Element::new("a", Role::Link)
        .class("dropdown-item")
        .class_if(active, "active")
        .class_if(disabled, "disabled")
        .attr("href", href_or_placeholder(href))
        .attr_if(active, "aria-current", "true")
        .attr_if(disabled, "aria-disabled", "true")
        .text(label);
    Element::new("li", Role::Item).child(link)
}

/// `li > hr.dropdown-divider`.
pub(crate) fn menu_divider() -> Element {
    Element::new("li", Role::Item)
        .child(Element::new("hr", Role::Divider).class("dropdown-divider"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> Dropdown {
        Dropdown::new(
            "Actions",
            vec![
                DropdownEntry::header("Manage"),
                DropdownEntry::link("Edit", "/edit").active(),
                DropdownEntry::link("Archive", "/archive").divider_after(),
                DropdownEntry::link("Delete", "/delete").disabled(),
            ],
        )
    }

    #[test]
    fn test_default_render() {
        let html = sample().render().to_html();
        assert_eq!(
            html,
            concat!(
                r#"<div class="dropdown">"#,
                r#"<button class="btn btn-secondary dropdown-toggle" type="button" data-bs-toggle="dropdown" aria-expanded="false">Actions</button>"#,
                r#"<ul class="dropdown-menu">"#,
                r#"<li><h6 class="dropdown-header">Manage</h6></li>"#,
                r#"<li><a class="dropdown-item active" href="/edit" aria-current="true">Edit</a></li>"#,
                r#"<li><a class="dropdown-item" href="/archive">Archive</a></li>"#,
                r#"<li><hr class="dropdown-divider"></li>"#,
                r#"<li><a class="dropdown-item disabled" href="/delete" aria-disabled="true">Delete</a></li>"#,
                "</ul></div>"
            )
        );
    }

    #[test]
    fn test_direction_and_dark() {
        let dropdown = sample().with_options(DropdownOptions {
            variant: "primary".to_owned(),
            direction: DropDirection::Up,
            dark: true,
            class_name: "me-2".to_owned(),
            button_class_name: "btn-sm".to_owned(),
        });
        let root = dropdown.render();
        assert_eq!(root.class_list().tokens(), ["dropup", "me-2"]);

        let button = root.child_elements().next().unwrap();
        assert_eq!(
            button.class_list().tokens(),
            ["btn", "btn-primary", "dropdown-toggle", "btn-sm"]
        );
        let menu = root.find_by_class("dropdown-menu");
        assert!(menu[0].has_class("dropdown-menu-dark"));
    }

    #[test]
    fn test_missing_href_uses_placeholder() {
        let dropdown = Dropdown::new(
            "More",
            vec![DropdownEntry {
                label: "Nowhere".to_owned(),
                ..DropdownEntry::default()
            }],
        );
        let root = dropdown.render();
        let item = root.find_by_class("dropdown-item")[0];
        assert_eq!(item.get_attr("href"), Some("#"));
    }

    #[test]
    fn test_click_outcomes() {
        let dropdown = sample();
        let mut activated = Vec::new();

        assert_eq!(dropdown.click(0, |i| activated.push(i)), None);
        assert_eq!(
            dropdown.click(1, |i| activated.push(i)),
            Some(ClickOutcome::Selected)
        );
        assert_eq!(
            dropdown.click(3, |i| activated.push(i)),
            Some(ClickOutcome::Suppressed)
        );
        assert_eq!(dropdown.click(9, |i| activated.push(i)), None);
        assert_eq!(activated, vec![1]);
    }
}
