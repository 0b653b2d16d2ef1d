//! Navigation item list.
//!
//! Renders `ul.nav` with one `li.nav-item` per [`NavItem`]. An item whose
//! `dropdown` field is present becomes a dropdown trigger with a submenu, even
//! when the submenu is empty.

use std::collections::HashSet;

use bk_markup::{ClassList, Element, Role};

use crate::click::ClickOutcome;
use crate::dropdown::{menu_divider, menu_link};
use crate::href_or_placeholder;

/// A selectable navigation entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavItem {
    /// Identifier passed to the selection callback. Expected unique within a list.
    pub id: String,
    pub label: String,
    pub href: Option<String>,
    pub active: bool,
    pub disabled: bool,
    /// Submenu entries. `Some(vec![])` still renders a dropdown trigger.
    pub dropdown: Option<Vec<NavDropdownItem>>,
}

impl NavItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    #[must_use]
    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    #[must_use]
    pub fn with_dropdown(mut self, entries: Vec<NavDropdownItem>) -> Self {
        self.dropdown = Some(entries);
        self
    }

    pub fn has_dropdown(&self) -> bool {
        self.dropdown.is_some()
    }
}

/// Entry of a navigation submenu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavDropdownItem {
    /// Ignored when `divider` is set.
    pub label: String,
    pub href: Option<String>,
    pub divider: bool,
    pub disabled: bool,
}

impl NavDropdownItem {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
            ..Self::default()
        }
    }

    pub fn divider() -> Self {
        Self {
            divider: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Visual style of the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NavVariant {
    #[default]
    Default,
    Tabs,
    Pills,
    Underline,
}

/// Horizontal alignment of the items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NavAlignment {
    #[default]
    Start,
    Center,
    End,
}

/// Layout direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NavLayout {
    #[default]
    Horizontal,
    Vertical,
}

/// How items share the available width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NavFill {
    #[default]
    None,
    Fill,
    Justified,
}

impl NavVariant {
    fn modifier(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Tabs => Some("nav-tabs"),
            Self::Pills => Some("nav-pills"),
            Self::Underline => Some("nav-underline"),
        }
    }
}

impl NavAlignment {
    fn modifier(self) -> Option<&'static str> {
        match self {
            Self::Start => None,
            Self::Center => Some("justify-content-center"),
            Self::End => Some("justify-content-end"),
        }
    }
}

impl NavLayout {
    fn modifier(self) -> Option<&'static str> {
        match self {
            Self::Horizontal => None,
            Self::Vertical => Some("flex-column"),
        }
    }
}

impl NavFill {
    fn modifier(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Fill => Some("nav-fill"),
            Self::Justified => Some("nav-justified"),
        }
    }
}

/// Presentation options for a [`Nav`]. Every field defaults to the unstyled form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavOptions {
    pub variant: NavVariant,
    pub alignment: NavAlignment,
    pub layout: NavLayout,
    pub fill: NavFill,
    /// Extra classes appended after the derived ones.
    pub class_name: String,
}

/// Navigation list with optional dropdown submenus.
///
/// # Output Structure
///
/// ```html
/// <ul class="nav nav-tabs">
///   <li class="nav-item">
///     <a class="nav-link active" href="/home" aria-current="page">Home</a>
///   </li>
///   <li class="nav-item dropdown">
///     <a class="nav-link dropdown-toggle" href="#" role="button"
///        data-bs-toggle="dropdown" aria-expanded="false">More</a>
///     <ul class="dropdown-menu">
///       <li><a class="dropdown-item" href="/a">A</a></li>
///       <li><hr class="dropdown-divider"></li>
///     </ul>
///   </li>
/// </ul>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nav {
    items: Vec<NavItem>,
    options: NavOptions,
}

impl Nav {
    pub fn new(items: Vec<NavItem>) -> Self {
        Self {
            items,
            options: NavOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: NavOptions) -> Self {
        self.options = options;
        self
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn options(&self) -> &NavOptions {
        &self.options
    }

    /// Classes of the root list: `nav`, then one modifier per non-default option.
    pub fn list_classes(&self) -> ClassList {
        let opts = &self.options;
        let mut classes = ClassList::new().with("nav");
        for modifier in [
            opts.variant.modifier(),
            opts.alignment.modifier(),
            opts.layout.modifier(),
            opts.fill.modifier(),
        ]
        .into_iter()
        .flatten()
        {
            classes.push(modifier);
        }
        classes.extend_raw(&opts.class_name);
        classes
    }

    pub fn render(&self) -> Element {
        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if !seen.insert(item.id.as_str()) {
                tracing::warn!(id = %item.id, "Duplicate nav item id");
            }
        }

        tracing::debug!(
            items = self.items.len(),
            variant = ?self.options.variant,
            "Derived nav"
        );

        Element::new("ul", Role::List)
            .classes(self.list_classes())
            .children(self.items.iter().map(render_item))
    }

    /// Handle a click on the item with `item_id`.
    ///
    /// `on_select` fires only for enabled items without a submenu. Returns
    /// `None` when no item has that id; with duplicate ids the first wins.
    pub fn click(&self, item_id: &str, on_select: impl FnOnce(&str)) -> Option<ClickOutcome> {
        let item = self.items.iter().find(|item| item.id == item_id)?;
        if item.disabled {
            return Some(ClickOutcome::Suppressed);
        }
        if item.has_dropdown() {
            return Some(ClickOutcome::Delegated);
        }
        on_select(&item.id);
        Some(ClickOutcome::Selected)
    }
}

fn render_item(item: &NavItem) -> Element {
    match &item.dropdown {
        Some(entries) => render_dropdown_item(item, entries),
        None => {
            let link = Element::new("a", Role::Link)
                .class("nav-link")
                .class_if(item.active, "active")
                .class_if(item.disabled, "disabled")
                .attr("href", href_or_placeholder(item.href.as_deref()))
                .attr_if(item.active, "aria-current", "page")
                .attr_if(item.disabled, "aria-disabled", "true")
                .text(item.label.as_str());
            Element::new("li", Role::Item).class("nav-item").child(link)
        }
    }
}

fn render_dropdown_item(item: &NavItem, entries: &[NavDropdownItem]) -> Element {
    let toggle = Element::new("a", Role::Button)
        .class("nav-link")
        .class("dropdown-toggle")
        .class_if(item.active, "active")
        .class_if(item.disabled, "disabled")
        .attr("href", crate::PLACEHOLDER_HREF)
        .attr("role", "button")
        .attr("data-bs-toggle", "dropdown")
        .attr("aria-expanded", "false")
        .attr_if(item.disabled, "aria-disabled", "true")
        .text(item.label.as_str());

    let menu = Element::new("ul", Role::List)
        .class("dropdown-menu")
        .children(entries.iter().map(|entry| {
            if entry.divider {
                menu_divider()
            } else {
                menu_link(&entry.label, entry.href.as_deref(), false, entry.disabled)
            }
        }));

    Element::new("li", Role::Item)
        .class("nav-item")
        .class("dropdown")
        .child(toggle)
        .child(menu)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_items() -> Vec<NavItem> {
        vec![
            NavItem::new("home", "Home").with_href("/home").active(),
            NavItem::new("docs", "Docs").with_href("/docs"),
            NavItem::new("admin", "Admin").disabled(),
        ]
    }

    #[test]
    fn test_default_options_render_plain_nav() {
        let html = Nav::new(sample_items()).render().to_html();
        assert_eq!(
            html,
            concat!(
                r#"<ul class="nav">"#,
                r#"<li class="nav-item"><a class="nav-link active" href="/home" aria-current="page">Home</a></li>"#,
                r#"<li class="nav-item"><a class="nav-link" href="/docs">Docs</a></li>"#,
                r##"<li class="nav-item"><a class="nav-link disabled" href="#" aria-disabled="true">Admin</a></li>"##,
                "</ul>"
            )
        );
    }

    #[test]
    fn test_list_classes_pills_center_vertical() {
        let nav = Nav::new(vec![]).with_options(NavOptions {
            variant: NavVariant::Pills,
            alignment: NavAlignment::Center,
            layout: NavLayout::Vertical,
            fill: NavFill::None,
            class_name: String::new(),
        });
        assert_eq!(
            nav.list_classes().tokens(),
            ["nav", "nav-pills", "justify-content-center", "flex-column"]
        );
    }

    #[test]
    fn test_list_classes_each_option() {
        let classes = |options: NavOptions| Nav::new(vec![]).with_options(options).list_classes();

        assert_eq!(
            classes(NavOptions {
                variant: NavVariant::Underline,
                ..NavOptions::default()
            })
            .tokens(),
            ["nav", "nav-underline"]
        );
        assert_eq!(
            classes(NavOptions {
                alignment: NavAlignment::End,
                fill: NavFill::Justified,
                ..NavOptions::default()
            })
            .tokens(),
            ["nav", "justify-content-end", "nav-justified"]
        );
        assert_eq!(
            classes(NavOptions {
                variant: NavVariant::Tabs,
                fill: NavFill::Fill,
                class_name: "mb-3 custom".to_owned(),
                ..NavOptions::default()
            })
            .tokens(),
            ["nav", "nav-tabs", "nav-fill", "mb-3", "custom"]
        );
    }

    #[test]
    fn test_explicit_defaults_match_omitted() {
        let explicit = Nav::new(sample_items()).with_options(NavOptions {
            variant: NavVariant::Default,
            alignment: NavAlignment::Start,
            layout: NavLayout::Horizontal,
            fill: NavFill::None,
            class_name: String::new(),
        });
        assert_eq!(explicit.render(), Nav::new(sample_items()).render());
    }

    #[test]
    fn test_active_and_disabled_are_additive() {
        let nav = Nav::new(vec![NavItem::new("x", "X").active().disabled()]);
        let root = nav.render();
        let link = root.find_by_class("nav-link")[0];

        assert_eq!(
            link.class_list().tokens(),
            ["nav-link", "active", "disabled"]
        );
        assert_eq!(link.get_attr("aria-current"), Some("page"));
        assert_eq!(link.get_attr("aria-disabled"), Some("true"));
    }

    #[test]
    fn test_flags_off_omit_attributes() {
        let root = Nav::new(vec![NavItem::new("x", "X")]).render();
        let link = root.find_by_class("nav-link")[0];
        assert!(!link.attrs().contains("aria-current"));
        assert!(!link.attrs().contains("aria-disabled"));
    }

    #[test]
    fn test_dropdown_item_render() {
        let nav = Nav::new(vec![NavItem::new("more", "More").with_dropdown(vec![
            NavDropdownItem::link("Action", "/action"),
            NavDropdownItem {
                label: "ignored".to_owned(),
                divider: true,
                ..NavDropdownItem::default()
            },
            NavDropdownItem::link("Off", "/off").disabled(),
        ])]);
        let html = nav.render().to_html();
        assert_eq!(
            html,
            concat!(
                r#"<ul class="nav"><li class="nav-item dropdown">"#,
                r##"<a class="nav-link dropdown-toggle" href="#" role="button" data-bs-toggle="dropdown" aria-expanded="false">More</a>"##,
                r#"<ul class="dropdown-menu">"#,
                r#"<li><a class="dropdown-item" href="/action">Action</a></li>"#,
                r#"<li><hr class="dropdown-divider"></li>"#,
                r#"<li><a class="dropdown-item disabled" href="/off" aria-disabled="true">Off</a></li>"#,
                "</ul></li></ul>"
            )
        );
        assert!(!html.contains("ignored"));
    }

    #[test]
    fn test_divider_discards_label() {
        let divider = NavDropdownItem {
            label: "Separator text".to_owned(),
            divider: true,
            ..NavDropdownItem::default()
        };
        let nav = Nav::new(vec![NavItem::new("m", "M").with_dropdown(vec![divider])]);
        let root = nav.render();
        let menu = root.find_by_class("dropdown-menu")[0];
        let entry = menu.child_elements().next().unwrap();
        let divider = entry.child_elements().next().unwrap();

        assert_eq!(divider.role(), Role::Divider);
        assert_eq!(divider.tag(), "hr");
        assert_eq!(entry.text_content(), "");
    }

    #[test]
    fn test_empty_dropdown_still_renders_trigger() {
        let root = Nav::new(vec![NavItem::new("m", "Menu").with_dropdown(vec![])]).render();
        let item = root.child_elements().next().unwrap();

        assert!(item.has_class("dropdown"));
        assert_eq!(root.find_by_class("dropdown-toggle").len(), 1);
        let menu = root.find_by_class("dropdown-menu")[0];
        assert_eq!(menu.child_nodes().len(), 0);
    }

    #[test]
    fn test_absent_dropdown_renders_plain_link() {
        let root = Nav::new(vec![NavItem::new("m", "Menu")]).render();
        assert!(root.find_by_class("dropdown-toggle").is_empty());
        assert!(root.find_by_class("dropdown-menu").is_empty());
    }

    #[test]
    fn test_dropdown_toggle_never_marks_current_page() {
        let item = NavItem::new("m", "Menu")
            .active()
            .disabled()
            .with_dropdown(vec![]);
        let root = Nav::new(vec![item]).render();
        let toggle = root.find_by_class("dropdown-toggle")[0];
        assert!(toggle.has_class("active"));
        assert!(!toggle.attrs().contains("aria-current"));
        assert_eq!(toggle.get_attr("aria-disabled"), Some("true"));
    }

    #[test]
    fn test_click_selects_enabled_item() {
        let nav = Nav::new(sample_items());
        let mut selected = None;
        let outcome = nav.click("docs", |id| selected = Some(id.to_owned()));

        assert_eq!(outcome, Some(ClickOutcome::Selected));
        assert!(!ClickOutcome::Selected.prevents_default());
        assert_eq!(selected.as_deref(), Some("docs"));
    }

    #[test]
    fn test_click_disabled_is_suppressed() {
        let nav = Nav::new(vec![
            NavItem::new("a", "A").disabled().active(),
            NavItem::new("b", "B").disabled().with_dropdown(vec![]),
        ]);
        let mut fired = false;

        let outcome = nav.click("a", |_| fired = true).unwrap();
        assert_eq!(outcome, ClickOutcome::Suppressed);
        assert!(outcome.prevents_default());

        assert_eq!(
            nav.click("b", |_| fired = true),
            Some(ClickOutcome::Suppressed)
        );
        assert!(!fired);
    }

    #[test]
    fn test_click_dropdown_owner_is_delegated() {
        let menu = vec![NavDropdownItem::link("A", "/a")];
        let nav = Nav::new(vec![NavItem::new("m", "Menu").with_dropdown(menu)]);
        let mut fired = false;
        assert_eq!(
            nav.click("m", |_| fired = true),
            Some(ClickOutcome::Delegated)
        );
        assert!(!fired);
    }

    #[test]
    fn test_click_unknown_id() {
        let nav = Nav::new(sample_items());
        assert_eq!(nav.click("missing", |_| {}), None);
    }

    #[test]
    fn test_duplicate_ids_still_render() {
        let nav = Nav::new(vec![
            NavItem::new("dup", "First").disabled(),
            NavItem::new("dup", "Second"),
        ]);
        let root = nav.render();
        assert_eq!(root.child_elements().count(), 2);
        assert_eq!(nav.click("dup", |_| {}), Some(ClickOutcome::Suppressed));
    }

    #[test]
    fn test_label_is_escaped() {
        let nav = Nav::new(vec![NavItem::new("x", "<b>X</b>")]);
        let html = nav.render().to_html();
        assert!(html.contains("&lt;b&gt;X&lt;/b&gt;"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let nav = Nav::new(sample_items()).with_options(NavOptions {
            variant: NavVariant::Tabs,
            ..NavOptions::default()
        });
        assert_eq!(nav.render(), nav.render());
        assert_eq!(nav.render().to_html(), nav.render().to_html());
    }
}
