//! Collapsible regions, their triggers and lifecycle notifications.
//!
//! Show/hide transitions are performed by the host toolkit. This module
//! derives the initial markup, describes toggle requests for a host
//! [`CollapseBehavior`], and routes the toolkit's lifecycle events to
//! registered [`CollapseHandlers`].

use std::fmt;

use bk_markup::{ClassList, Content, Element, Role};

/// Lifecycle signal emitted by the host toolkit around a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollapseSignal {
    /// A region is about to open.
    Show,
    /// A region finished opening.
    Shown,
    /// A region is about to close.
    Hide,
    /// A region finished closing.
    Hidden,
}

impl CollapseSignal {
    pub const ALL: [Self; 4] = [Self::Hide, Self::Hidden, Self::Show, Self::Shown];

    /// Event name used by the toolkit runtime.
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Show => "show.bs.collapse",
            Self::Shown => "shown.bs.collapse",
            Self::Hide => "hide.bs.collapse",
            Self::Hidden => "hidden.bs.collapse",
        }
    }

    pub fn from_event_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.event_name() == name)
    }
}

/// Notification passed to a lifecycle callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollapseEvent<'a> {
    pub signal: CollapseSignal,
    /// Id of the region that is transitioning.
    pub target: &'a str,
}

type Callback = Box<dyn Fn(&CollapseEvent<'_>) + Send + Sync>;

/// Optional fire-and-forget callbacks for the four lifecycle signals.
///
/// Callbacks return nothing and are invoked at most once per dispatched event.
/// A panicking callback is not caught.
#[derive(Default)]
pub struct CollapseHandlers {
    show: Option<Callback>,
    shown: Option<Callback>,
    hide: Option<Callback>,
    hidden: Option<Callback>,
}

impl CollapseHandlers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_show(mut self, f: impl Fn(&CollapseEvent<'_>) + Send + Sync + 'static) -> Self {
        self.show = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_shown(mut self, f: impl Fn(&CollapseEvent<'_>) + Send + Sync + 'static) -> Self {
        self.shown = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_hide(mut self, f: impl Fn(&CollapseEvent<'_>) + Send + Sync + 'static) -> Self {
        self.hide = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_hidden(mut self, f: impl Fn(&CollapseEvent<'_>) + Send + Sync + 'static) -> Self {
        self.hidden = Some(Box::new(f));
        self
    }

    fn slot(&self, signal: CollapseSignal) -> Option<&Callback> {
        match signal {
            CollapseSignal::Show => self.show.as_ref(),
            CollapseSignal::Shown => self.shown.as_ref(),
            CollapseSignal::Hide => self.hide.as_ref(),
            CollapseSignal::Hidden => self.hidden.as_ref(),
        }
    }

    pub fn handles(&self, signal: CollapseSignal) -> bool {
        self.slot(signal).is_some()
    }

    /// Event names the host should listen for: only those with a callback.
    pub fn subscriptions(&self) -> Vec<&'static str> {
        CollapseSignal::ALL
            .into_iter()
            .filter(|s| self.handles(*s))
            .map(CollapseSignal::event_name)
            .collect()
    }

    /// Invoke the callback registered for `event_name`.
    ///
    /// Returns `true` when a callback fired. Unknown event names and signals
    /// without a callback are ignored.
    pub fn dispatch(&self, event_name: &str, target: &str) -> bool {
        let Some(signal) = CollapseSignal::from_event_name(event_name) else {
            tracing::debug!(event = event_name, "Ignoring unknown collapse event");
            return false;
        };
        let Some(callback) = self.slot(signal) else {
            return false;
        };
        callback(&CollapseEvent { signal, target });
        true
    }
}

impl fmt::Debug for CollapseHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollapseHandlers")
            .field("subscriptions", &self.subscriptions())
            .finish()
    }
}

/// Identifiers a host runtime needs to toggle a region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleRequest {
    /// Selector of the region, as emitted in `data-bs-target`.
    pub target: String,
    /// Selector of the exclusive group, as emitted in `data-bs-parent`.
    /// `None` when regions toggle independently.
    pub parent: Option<String>,
}

/// Host runtime capability that performs show/hide transitions.
///
/// Implementations own the open/closed state after the initial render and
/// report transitions back through [`CollapseHandlers::dispatch`].
pub trait CollapseBehavior {
    fn toggle(&mut self, request: &ToggleRequest);
}

/// Ensure a target reference is a `#id` selector.
pub(crate) fn selector(target: &str) -> String {
    if target.starts_with('#') {
        target.to_owned()
    } else {
        format!("#{target}")
    }
}

/// A region shown or hidden by a [`CollapseToggle`].
#[derive(Debug)]
pub struct Collapse {
    id: String,
    content: Content,
    show: bool,
    horizontal: bool,
    class_name: String,
    handlers: CollapseHandlers,
}

impl Collapse {
    pub fn new(id: impl Into<String>, content: impl Into<Content>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            show: false,
            horizontal: false,
            class_name: String::new(),
            handlers: CollapseHandlers::default(),
        }
    }

    /// Render initially open.
    #[must_use]
    pub fn shown(mut self) -> Self {
        self.show = true;
        self
    }

    /// Collapse width instead of height.
    #[must_use]
    pub fn horizontal(mut self) -> Self {
        self.horizontal = true;
        self
    }

    #[must_use]
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    #[must_use]
    pub fn with_handlers(mut self, handlers: CollapseHandlers) -> Self {
        self.handlers = handlers;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn handlers(&self) -> &CollapseHandlers {
        &self.handlers
    }

    pub fn render(&self) -> Element {
        let mut classes = ClassList::new()
            .with("collapse")
            .with_if(self.horizontal, "collapse-horizontal")
            .with_if(self.show, "show");
        classes.extend_raw(&self.class_name);

        Element::new("div", Role::Panel)
            .classes(classes)
            .attr("id", self.id.as_str())
            .child(self.content.clone())
    }

    /// Forward a lifecycle event reported for this region.
    ///
    /// Events for other targets are ignored.
    pub fn notify(&self, event_name: &str, target: &str) -> bool {
        target == self.id && self.handlers.dispatch(event_name, target)
    }
}

/// Trigger that toggles a [`Collapse`] by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapseToggle {
    target: String,
    label: Content,
    expanded: bool,
    variant: String,
    class_name: String,
    as_link: bool,
}

impl CollapseToggle {
    /// `target` may be given with or without the leading `#`.
    pub fn new(target: impl Into<String>, label: impl Into<Content>) -> Self {
        Self {
            target: target.into(),
            label: label.into(),
            expanded: false,
            variant: "primary".to_owned(),
            class_name: String::new(),
            as_link: false,
        }
    }

    #[must_use]
    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Button style, rendered as `btn-{variant}`.
    #[must_use]
    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = variant.into();
        self
    }

    #[must_use]
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Render as an anchor with `role="button"` instead of a button.
    #[must_use]
    pub fn as_link(mut self) -> Self {
        self.as_link = true;
        self
    }

    pub fn render(&self) -> Element {
        let target = selector(&self.target);
        let controls = self.target.strip_prefix('#').unwrap_or(&self.target);
        let expanded = if self.expanded { "true" } else { "false" };

        let mut classes = ClassList::new()
            .with("btn")
            .with(format!("btn-{}", self.variant));
        classes.extend_raw(&self.class_name);

        let trigger = if self.as_link {
            Element::new("a", Role::Button)
                .classes(classes)
                .attr("data-bs-toggle", "collapse")
                .attr("href", target)
                .attr("role", "button")
        } else {
            Element::new("button", Role::Button)
                .classes(classes)
                .attr("type", "button")
                .attr("data-bs-toggle", "collapse")
                .attr("data-bs-target", target)
        };

        trigger
            .attr("aria-expanded", expanded)
            .attr("aria-controls", controls)
            .child(self.label.clone())
    }

    /// Toggle request for the targeted region. Standalone regions have no group.
    pub fn toggle_request(&self) -> ToggleRequest {
        ToggleRequest {
            target: selector(&self.target),
            parent: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_event_names_round_trip() {
        for signal in CollapseSignal::ALL {
            assert_eq!(
                CollapseSignal::from_event_name(signal.event_name()),
                Some(signal)
            );
        }
        assert_eq!(CollapseSignal::from_event_name("show.bs.modal"), None);
    }

    #[test]
    fn test_subscriptions_only_registered() {
        let handlers = CollapseHandlers::new().on_shown(|_| {}).on_hide(|_| {});
        assert_eq!(
            handlers.subscriptions(),
            vec!["hide.bs.collapse", "shown.bs.collapse"]
        );
        assert!(CollapseHandlers::new().subscriptions().is_empty());
    }

    #[test]
    fn test_dispatch_invokes_matching_callback() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let handlers = CollapseHandlers::new().on_show(move |event| {
            sink.lock()
                .unwrap()
                .push(format!("{:?}:{}", event.signal, event.target));
        });

        assert!(handlers.dispatch("show.bs.collapse", "panel"));
        assert!(!handlers.dispatch("hidden.bs.collapse", "panel"));
        assert!(!handlers.dispatch("bogus", "panel"));
        assert_eq!(*log.lock().unwrap(), vec!["Show:panel".to_owned()]);
    }

    #[test]
    fn test_collapse_render() {
        let collapse = Collapse::new("details", "Hidden text")
            .horizontal()
            .shown()
            .with_class("mt-2");
        assert_eq!(
            collapse.render().to_html(),
            r#"<div class="collapse collapse-horizontal show mt-2" id="details">Hidden text</div>"#
        );
    }

    #[test]
    fn test_collapse_closed_by_default() {
        let root = Collapse::new("x", Content::markup("<p>a</p>")).render();
        assert_eq!(root.class_list().tokens(), ["collapse"]);
        assert_eq!(
            root.to_html(),
            r#"<div class="collapse" id="x"><p>a</p></div>"#
        );
    }

    #[test]
    fn test_collapse_notify_filters_target() {
        let hits = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&hits);
        let collapse = Collapse::new("mine", "").with_handlers(
            CollapseHandlers::new().on_hidden(move |_| *counter.lock().unwrap() += 1),
        );

        assert!(collapse.notify("hidden.bs.collapse", "mine"));
        assert!(!collapse.notify("hidden.bs.collapse", "other"));
        assert_eq!(*hits.lock().unwrap(), 1);
    }

    #[test]
    fn test_toggle_button() {
        let toggle = CollapseToggle::new("details", "Toggle").expanded(true);
        assert_eq!(
            toggle.render().to_html(),
            r##"<button class="btn btn-primary" type="button" data-bs-toggle="collapse" data-bs-target="#details" aria-expanded="true" aria-controls="details">Toggle</button>"##
        );
    }

    #[test]
    fn test_toggle_link_strips_hash_for_controls() {
        let toggle = CollapseToggle::new("#details", "More")
            .variant("outline-secondary")
            .as_link();
        let root = toggle.render();

        assert_eq!(root.tag(), "a");
        assert_eq!(root.get_attr("href"), Some("#details"));
        assert_eq!(root.get_attr("role"), Some("button"));
        assert_eq!(root.get_attr("aria-controls"), Some("details"));
        assert_eq!(root.get_attr("aria-expanded"), Some("false"));
        assert_eq!(root.class_list().tokens(), ["btn", "btn-outline-secondary"]);
    }

    #[test]
    fn test_controls_keeps_inner_hash() {
        let root = CollapseToggle::new("a#b", "x").render();
        assert_eq!(root.get_attr("data-bs-target"), Some("#a#b"));
        assert_eq!(root.get_attr("aria-controls"), Some("a#b"));
    }

    #[test]
    fn test_toggle_request_has_no_parent() {
        let request = CollapseToggle::new("details", "x").toggle_request();
        assert_eq!(
            request,
            ToggleRequest {
                target: "#details".to_owned(),
                parent: None,
            }
        );
    }
}
