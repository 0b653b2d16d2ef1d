//! Navigation and collapsible-section components.
//!
//! Each component is a pure derivation from typed configuration to a
//! [`bk_markup::Element`] tree carrying presentation classes, accessibility
//! attributes and toggle hooks (`data-bs-*`). Interactive show/hide behavior
//! belongs to the host toolkit that reads those hooks; this crate only
//! computes initial state and dispatches the notifications the host reports.
//!
//! - [`Nav`]: item list with tabs/pills/underline variants and dropdown submenus
//! - [`Dropdown`]: standalone button dropdown
//! - [`Accordion`]: collapsible group, exclusive or multi-open
//! - [`Collapse`] / [`CollapseToggle`]: single collapsible region and trigger
//!
//! # Example
//!
//! ```
//! use bk_components::{Accordion, AccordionOptions, AccordionSection, DefaultOpen};
//!
//! let accordion = Accordion::new(vec![
//!     AccordionSection::new("First", "One"),
//!     AccordionSection::new("Second", "Two"),
//! ])
//! .with_options(AccordionOptions {
//!     default_open: DefaultOpen::Index(1),
//!     ..AccordionOptions::default()
//! });
//!
//! let root = accordion.render();
//! let body = root.find_by_id("accordionExample-item-1-collapse").unwrap();
//! assert!(body.has_class("show"));
//! ```

mod accordion;
mod click;
mod collapse;
mod dropdown;
mod nav;

pub use accordion::{
    Accordion, AccordionOptions, AccordionSection, DEFAULT_GROUP_ID, DefaultOpen, SectionIds,
};
pub use click::ClickOutcome;
pub use collapse::{
    Collapse, CollapseBehavior, CollapseEvent, CollapseHandlers, CollapseSignal, CollapseToggle,
    ToggleRequest,
};
pub use dropdown::{DropDirection, Dropdown, DropdownEntry, DropdownOptions};
pub use nav::{
    Nav, NavAlignment, NavDropdownItem, NavFill, NavItem, NavLayout, NavOptions, NavVariant,
};

/// Target used when an entry has no `href`.
pub const PLACEHOLDER_HREF: &str = "#";

/// Resolve an optional link target, falling back to [`PLACEHOLDER_HREF`].
pub(crate) fn href_or_placeholder(href: Option<&str>) -> &str {
    match href {
        Some(href) if !href.is_empty() => href,
        _ => PLACEHOLDER_HREF,
    }
}
