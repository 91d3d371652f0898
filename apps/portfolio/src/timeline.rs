//! Expandable work-history timeline.
//!
//! At most one entry is expanded at a time. Toggling the expanded entry
//! collapses it; toggling any other entry makes it the sole expanded one.

use serde::{Deserialize, Serialize};

/// Expansion state for one page view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineState {
    expanded: Option<usize>,
}

impl TimelineState {
    pub fn collapsed() -> Self {
        Self::default()
    }

    /// Restores a state from a requested index, ignoring indices past the end
    /// of a timeline with `len` entries.
    pub fn restore(requested: Option<usize>, len: usize) -> Self {
        Self {
            expanded: requested.filter(|&idx| idx < len),
        }
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, idx: usize) -> bool {
        self.expanded == Some(idx)
    }

    pub fn toggle(&mut self, idx: usize) {
        self.expanded = if self.is_expanded(idx) { None } else { Some(idx) };
    }

    /// The state a click on entry `idx` would produce, leaving `self` as is.
    pub fn toggled(&self, idx: usize) -> Self {
        let mut next = *self;
        next.toggle(idx);
        next
    }
}

/// Splits a description into display paragraphs: one per non-blank line,
/// surrounding whitespace trimmed.
pub fn description_paragraphs(description: &str) -> Vec<&str> {
    description
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        let state = TimelineState::collapsed();
        assert_eq!(state.expanded(), None);
        assert!(!state.is_expanded(0));
    }

    #[test]
    fn test_toggle_expands_collapsed_entry() {
        let mut state = TimelineState::collapsed();
        state.toggle(2);
        assert_eq!(state.expanded(), Some(2));
        assert!(state.is_expanded(2));
    }

    #[test]
    fn test_toggle_twice_restores_original_state() {
        for original in [TimelineState::collapsed(), TimelineState::restore(Some(1), 4)] {
            let mut state = original;
            state.toggle(3);
            state.toggle(3);
            assert_eq!(state, original);
        }
    }

    #[test]
    fn test_expanding_other_entry_collapses_previous() {
        let mut state = TimelineState::collapsed();
        state.toggle(0);
        state.toggle(4);
        assert!(!state.is_expanded(0));
        assert!(state.is_expanded(4));
        assert_eq!(state.expanded(), Some(4));
    }

    #[test]
    fn test_toggle_is_reversible_many_times() {
        let mut state = TimelineState::collapsed();
        for _ in 0..1_000 {
            state.toggle(1);
        }
        assert_eq!(state, TimelineState::collapsed());
    }

    #[test]
    fn test_toggled_does_not_mutate() {
        let state = TimelineState::restore(Some(0), 3);
        assert_eq!(state.toggled(0).expanded(), None);
        assert_eq!(state.toggled(2).expanded(), Some(2));
        assert_eq!(state.expanded(), Some(0));
    }

    #[test]
    fn test_restore_drops_out_of_range_index() {
        assert_eq!(TimelineState::restore(Some(6), 6).expanded(), None);
        assert_eq!(TimelineState::restore(Some(5), 6).expanded(), Some(5));
        assert_eq!(TimelineState::restore(None, 6).expanded(), None);
    }

    #[test]
    fn test_blank_lines_produce_no_paragraphs() {
        let description = "- first\n- second\n\n- third\n- fourth";
        assert_eq!(description.lines().count(), 5);
        assert_eq!(description_paragraphs(description).len(), 4);
    }

    #[test]
    fn test_paragraphs_are_trimmed() {
        let description = "\n   - spaced out  \n\t\n- tight\n    ";
        assert_eq!(description_paragraphs(description), vec!["- spaced out", "- tight"]);
    }

    #[test]
    fn test_empty_description_has_no_paragraphs() {
        assert!(description_paragraphs("").is_empty());
        assert!(description_paragraphs("\n  \n").is_empty());
    }
}
