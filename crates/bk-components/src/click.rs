//! Click handling outcome shared by selectable components.

/// Result of a click on a selectable entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The selection callback fired; default navigation proceeds.
    Selected,
    /// The entry owns a submenu; the host toolkit opens it and no selection fires.
    Delegated,
    /// The entry is disabled; no callback fires and default navigation is prevented.
    Suppressed,
}

impl ClickOutcome {
    /// Whether the host must cancel the default navigation for this click.
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::Suppressed)
    }
}
