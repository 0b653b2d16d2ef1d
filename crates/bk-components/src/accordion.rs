//! Collapsible group (accordion).
//!
//! Derives the initial open/closed presentation of each section from a
//! [`DefaultOpen`] value. Later transitions are owned by the host
//! toolkit, which scopes exclusivity through the `data-bs-parent` hook.

use std::collections::{BTreeSet, HashSet};

use bk_markup::{Content, Element, Role};

use crate::collapse::{CollapseBehavior, CollapseHandlers, ToggleRequest, selector};

/// Group id used when none is configured.
pub const DEFAULT_GROUP_ID: &str = "accordionExample";

/// One header/body pair of an [`Accordion`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct AccordionSection {
    /// Explicit id; defaults to `{group}-item-{index}`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: Option<String>,
    pub title: Content,
    pub content: Content,
}

impl AccordionSection {
    pub fn new(title: impl Into<Content>, content: impl Into<Content>) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Which sections start open.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawDefaultOpen"))]
pub enum DefaultOpen {
    None,
    Index(usize),
    Indices(BTreeSet<usize>),
}

impl Default for DefaultOpen {
    fn default() -> Self {
        Self::Index(0)
    }
}

impl DefaultOpen {
    /// Map a signed index; any negative value means none open.
    pub fn from_signed(index: i64) -> Self {
        usize::try_from(index).map_or(Self::None, Self::Index)
    }

    /// Resolve to the set of open section indices.
    pub fn resolve(&self) -> BTreeSet<usize> {
        match self {
            Self::None => BTreeSet::new(),
            Self::Index(index) => BTreeSet::from([*index]),
            Self::Indices(indices) => indices.clone(),
        }
    }
}

impl From<usize> for DefaultOpen {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl<const N: usize> From<[usize; N]> for DefaultOpen {
    fn from(indices: [usize; N]) -> Self {
        Self::Indices(BTreeSet::from(indices))
    }
}

/// Configuration form: `-1`, a non-negative index, or an array of indices.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawDefaultOpen {
    Index(i64),
    Indices(BTreeSet<usize>),
}

#[cfg(feature = "serde")]
impl From<RawDefaultOpen> for DefaultOpen {
    fn from(raw: RawDefaultOpen) -> Self {
        match raw {
            RawDefaultOpen::Index(index) => Self::from_signed(index),
            RawDefaultOpen::Indices(indices) => Self::Indices(indices),
        }
    }
}

/// Presentation and state options for an [`Accordion`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AccordionOptions {
    /// Group id, also the scope of the exclusivity hook.
    pub id: String,
    /// Remove borders and rounded corners.
    pub flush: bool,
    /// Allow any number of sections open at once.
    pub always_open: bool,
    pub default_open: DefaultOpen,
}

impl Default for AccordionOptions {
    fn default() -> Self {
        Self {
            id: DEFAULT_GROUP_ID.to_owned(),
            flush: false,
            always_open: false,
            default_open: DefaultOpen::default(),
        }
    }
}

/// Derived identifiers of one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionIds {
    pub item: String,
    pub header: String,
    pub collapse: String,
}

impl SectionIds {
    fn derive(group_id: &str, index: usize, section: &AccordionSection) -> Self {
        let item = section
            .id
            .clone()
            .unwrap_or_else(|| format!("{group_id}-item-{index}"));
        Self {
            header: format!("{item}-header"),
            collapse: format!("{item}-collapse"),
            item,
        }
    }
}

/// Group of collapsible sections.
///
/// # Output Structure
///
/// ```html
/// <div class="accordion" id="faq">
///   <div class="accordion-item">
///     <h2 class="accordion-header" id="faq-item-0-header">
///       <button class="accordion-button" type="button" data-bs-toggle="collapse"
///               data-bs-target="#faq-item-0-collapse" aria-expanded="true"
///               aria-controls="faq-item-0-collapse">Title</button>
///     </h2>
///     <div class="accordion-collapse collapse show" id="faq-item-0-collapse"
///          data-bs-parent="#faq">
///       <div class="accordion-body">Body</div>
///     </div>
///   </div>
/// </div>
/// ```
#[derive(Debug)]
pub struct Accordion {
    sections: Vec<AccordionSection>,
    options: AccordionOptions,
    handlers: CollapseHandlers,
}

impl Accordion {
    pub fn new(sections: Vec<AccordionSection>) -> Self {
        Self {
            sections,
            options: AccordionOptions::default(),
            handlers: CollapseHandlers::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: AccordionOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_handlers(mut self, handlers: CollapseHandlers) -> Self {
        self.handlers = handlers;
        self
    }

    pub fn sections(&self) -> &[AccordionSection] {
        &self.sections
    }

    pub fn options(&self) -> &AccordionOptions {
        &self.options
    }

    pub fn handlers(&self) -> &CollapseHandlers {
        &self.handlers
    }

    /// Indices of sections that start open.
    pub fn open_sections(&self) -> BTreeSet<usize> {
        self.options.default_open.resolve()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open_sections().contains(&index)
    }

    /// Derived ids of the section at `index`.
    pub fn section_ids(&self, index: usize) -> Option<SectionIds> {
        let section = self.sections.get(index)?;
        Some(SectionIds::derive(&self.options.id, index, section))
    }

    /// `data-bs-parent` value, absent in multi-open mode.
    fn parent_selector(&self) -> Option<String> {
        (!self.options.always_open).then(|| selector(&self.options.id))
    }

    pub fn render(&self) -> Element {
        let open = self.open_sections();
        self.check_open(&open);
        let parent = self.parent_selector();

        let mut seen = HashSet::with_capacity(self.sections.len());
        let items = self.sections.iter().enumerate().map(|(index, section)| {
            let ids = SectionIds::derive(&self.options.id, index, section);
            if !seen.insert(ids.item.clone()) {
                tracing::warn!(id = %ids.item, "Duplicate accordion section id");
            }
            render_section(section, &ids, open.contains(&index), parent.as_deref())
        });

        let root = Element::new("div", Role::Container)
            .class("accordion")
            .class_if(self.options.flush, "accordion-flush")
            .attr("id", self.options.id.as_str())
            .children(items.collect::<Vec<_>>());

        tracing::debug!(
            id = %self.options.id,
            sections = self.sections.len(),
            open = ?open,
            "Derived accordion"
        );

        root
    }

    fn check_open(&self, open: &BTreeSet<usize>) {
        let len = self.sections.len();
        for index in open.iter().filter(|i| **i >= len) {
            tracing::warn!(
                id = %self.options.id,
                index,
                sections = len,
                "Default-open index out of range, nothing opened for it"
            );
        }
        if !self.options.always_open && open.len() > 1 {
            tracing::warn!(
                id = %self.options.id,
                open = ?open,
                "Multiple sections open in exclusive mode"
            );
        }
    }

    /// Toggle request for the section at `index`, scoped to this group
    /// unless the group is multi-open.
    pub fn toggle_request(&self, index: usize) -> Option<ToggleRequest> {
        let ids = self.section_ids(index)?;
        Some(ToggleRequest {
            target: selector(&ids.collapse),
            parent: self.parent_selector(),
        })
    }

    /// Ask the host runtime to toggle the section at `index`.
    pub fn request_toggle(&self, index: usize, behavior: &mut impl CollapseBehavior) -> bool {
        let Some(request) = self.toggle_request(index) else {
            return false;
        };
        behavior.toggle(&request);
        true
    }

    /// Forward a lifecycle event reported for one of this group's regions.
    ///
    /// Events for regions outside the group are ignored.
    pub fn notify(&self, event_name: &str, target: &str) -> bool {
        let owned = (0..self.sections.len())
            .filter_map(|index| self.section_ids(index))
            .any(|ids| ids.collapse == target);
        owned && self.handlers.dispatch(event_name, target)
    }
}

fn render_section(
    section: &AccordionSection,
    ids: &SectionIds,
    is_open: bool,
    parent: Option<&str>,
) -> Element {
    let button = Element::new("button", Role::Button)
        .class("accordion-button")
        .class_if(!is_open, "collapsed")
        .attr("type", "button")
        .attr("data-bs-toggle", "collapse")
        .attr("data-bs-target", selector(&ids.collapse))
        .attr("aria-expanded", if is_open { "true" } else { "false" })
        .attr("aria-controls", ids.collapse.as_str())
        .child(section.title.clone());

    let header = Element::new("h2", Role::Heading)
        .class("accordion-header")
        .attr("id", ids.header.as_str())
        .child(button);

    let mut body = Element::new("div", Role::Panel)
        .class("accordion-collapse")
        .class("collapse")
        .class_if(is_open, "show")
        .attr("id", ids.collapse.as_str());
    if let Some(parent) = parent {
        body = body.attr("data-bs-parent", parent);
    }
    let body = body.child(
        Element::new("div", Role::Panel)
            .class("accordion-body")
            .child(section.content.clone()),
    );

    Element::new("div", Role::Item)
        .class("accordion-item")
        .child(header)
        .child(body)
}
