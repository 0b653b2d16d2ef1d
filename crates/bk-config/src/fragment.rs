//! Fragment definitions: named component configurations.

use bk_components::{
    Accordion, AccordionOptions, AccordionSection, Dropdown, DropdownEntry, DropdownOptions, Nav,
    NavItem, NavOptions,
};
use bk_markup::Element;
use serde::Deserialize;

/// `[[nav]]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct NavFragment {
    pub name: String,
    #[serde(default)]
    pub items: Vec<NavItem>,
    #[serde(flatten)]
    pub options: NavOptions,
}

/// `[[dropdown]]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct DropdownFragment {
    pub name: String,
    pub button_text: String,
    #[serde(default)]
    pub entries: Vec<DropdownEntry>,
    #[serde(flatten)]
    pub options: DropdownOptions,
}

/// `[[accordion]]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct AccordionFragment {
    pub name: String,
    #[serde(default)]
    pub sections: Vec<AccordionSection>,
    #[serde(flatten)]
    pub options: AccordionOptions,
}

/// A fragment of any kind, borrowed from the loaded configuration.
#[derive(Debug, Clone, Copy)]
pub enum Fragment<'a> {
    Nav(&'a NavFragment),
    Dropdown(&'a DropdownFragment),
    Accordion(&'a AccordionFragment),
}

impl<'a> Fragment<'a> {
    pub fn name(&self) -> &'a str {
        match *self {
            Self::Nav(f) => &f.name,
            Self::Dropdown(f) => &f.name,
            Self::Accordion(f) => &f.name,
        }
    }

    /// Component kind as used for the TOML table name.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Nav(_) => "nav",
            Self::Dropdown(_) => "dropdown",
            Self::Accordion(_) => "accordion",
        }
    }

    /// Derive the fragment's markup tree.
    pub fn render(&self) -> Element {
        match self {
            Self::Nav(f) => Nav::new(f.items.clone())
                .with_options(f.options.clone())
                .render(),
            Self::Dropdown(f) => Dropdown::new(f.button_text.clone(), f.entries.clone())
                .with_options(f.options.clone())
                .render(),
            Self::Accordion(f) => Accordion::new(f.sections.clone())
                .with_options(f.options.clone())
                .render(),
        }
    }
}
