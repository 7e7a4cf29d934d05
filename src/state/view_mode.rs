//! Layout switcher.
//!
//! Stateless apart from its option list: it never holds the active layout.
//! Callers pass the current layout in and get a change request back.

use crate::model::LayoutId;

/// One entry of the layout switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOption {
    /// Layout this entry switches to.
    pub layout: LayoutId,
    /// Switcher text.
    pub label: &'static str,
    /// Whether this is the current layout.
    pub active: bool,
}

/// Switch among a canonical-ordered subset of layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModeToggle {
    options: Vec<LayoutId>,
}

impl ViewModeToggle {
    /// Build from the caller's subset. Order follows the canonical priority,
    /// never the order supplied.
    pub fn new(available: &[LayoutId]) -> Self {
        Self {
            options: LayoutId::canonical_subset(available),
        }
    }

    /// Offered layouts in canonical order.
    pub fn options(&self) -> &[LayoutId] {
        &self.options
    }

    /// Whether `layout` is offered.
    pub fn contains(&self, layout: LayoutId) -> bool {
        self.options.contains(&layout)
    }

    /// Change request for `requested`, or `None` when it is unavailable or
    /// already active.
    pub fn select(&self, current: LayoutId, requested: LayoutId) -> Option<LayoutId> {
        (requested != current && self.contains(requested)).then_some(requested)
    }

    /// Layout after `current`, wrapping around.
    pub fn next(&self, current: LayoutId) -> Option<LayoutId> {
        self.step(current, 1)
    }

    /// Layout before `current`, wrapping around.
    pub fn prev(&self, current: LayoutId) -> Option<LayoutId> {
        self.step(current, self.options.len().saturating_sub(1))
    }

    fn step(&self, current: LayoutId, offset: usize) -> Option<LayoutId> {
        if self.options.is_empty() {
            return None;
        }
        let position = self
            .options
            .iter()
            .position(|&l| l == current)
            .unwrap_or(0);
        let target = self.options[(position + offset) % self.options.len()];
        self.select(current, target)
    }

    /// Entries for rendering, with the active one flagged.
    pub fn entries(&self, current: LayoutId) -> Vec<LayoutOption> {
        self.options
            .iter()
            .map(|&layout| LayoutOption {
                layout,
                label: layout.label(),
                active: layout == current,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle() -> ViewModeToggle {
        ViewModeToggle::new(&[LayoutId::Grid, LayoutId::Table, LayoutId::Cards])
    }

    #[test]
    fn options_follow_canonical_order() {
        assert_eq!(
            toggle().options(),
            &[LayoutId::Table, LayoutId::Cards, LayoutId::Grid]
        );
    }

    #[test]
    fn select_rejects_unavailable_layout() {
        assert_eq!(toggle().select(LayoutId::Table, LayoutId::List), None);
    }

    #[test]
    fn select_rejects_current_layout() {
        assert_eq!(toggle().select(LayoutId::Table, LayoutId::Table), None);
    }

    #[test]
    fn select_accepts_other_available_layout() {
        assert_eq!(
            toggle().select(LayoutId::Table, LayoutId::Grid),
            Some(LayoutId::Grid)
        );
    }

    #[test]
    fn next_and_prev_wrap() {
        let t = toggle();
        assert_eq!(t.next(LayoutId::Grid), Some(LayoutId::Table));
        assert_eq!(t.prev(LayoutId::Table), Some(LayoutId::Grid));
        assert_eq!(t.next(LayoutId::Table), Some(LayoutId::Cards));
    }

    #[test]
    fn next_with_single_option_is_none() {
        let t = ViewModeToggle::new(&[LayoutId::List]);
        assert_eq!(t.next(LayoutId::List), None);
    }

    #[test]
    fn entries_flag_active_layout() {
        let entries = toggle().entries(LayoutId::Cards);
        let active: Vec<LayoutId> = entries
            .iter()
            .filter(|e| e.active)
            .map(|e| e.layout)
            .collect();
        assert_eq!(active, vec![LayoutId::Cards]);
        assert_eq!(entries[0].label, "Table");
    }
}
