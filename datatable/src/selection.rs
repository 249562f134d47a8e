//! Selection state for table rows.
//!
//! Selection uses string IDs for stability across re-sorts and row
//! re-creation. Each mutation reports which IDs it added and removed so the
//! owner can decide whether observers need to hear about it.

use std::collections::HashSet;

/// IDs added and removed by one selection mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionChange {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

impl SelectionChange {
    /// True when the mutation left the set unchanged.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// ID-based multi-selection.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: HashSet<String>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all selected IDs (sorted for deterministic ordering).
    pub fn selected(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Check if an ID is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Get the number of selected items.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Toggle selection of an ID.
    pub fn toggle(&mut self, id: &str) -> SelectionChange {
        if self.selected.remove(id) {
            SelectionChange {
                added: vec![],
                removed: vec![id.to_string()],
            }
        } else {
            self.selected.insert(id.to_string());
            SelectionChange {
                added: vec![id.to_string()],
                removed: vec![],
            }
        }
    }

    /// Select every ID in `ids`.
    /// Returns the IDs that were newly selected.
    pub fn select_all(&mut self, ids: &[String]) -> Vec<String> {
        let mut added = Vec::new();
        for id in ids {
            if self.selected.insert(id.clone()) {
                added.push(id.clone());
            }
        }
        added
    }

    /// Deselect every ID in `ids`, leaving other selected IDs alone.
    /// Returns the IDs that were deselected.
    pub fn deselect_all(&mut self, ids: &[String]) -> Vec<String> {
        ids.iter()
            .filter(|id| self.selected.remove(id.as_str()))
            .cloned()
            .collect()
    }

    /// Header "select all" toggle over the visible IDs.
    ///
    /// If every visible ID is already selected they are all deselected,
    /// otherwise all of them are selected. Selected IDs that are not
    /// visible are never touched.
    pub fn toggle_all(&mut self, visible_ids: &[String]) -> SelectionChange {
        if self.is_all_selected(visible_ids) {
            SelectionChange {
                added: vec![],
                removed: self.deselect_all(visible_ids),
            }
        } else {
            SelectionChange {
                added: self.select_all(visible_ids),
                removed: vec![],
            }
        }
    }

    /// True iff `visible_ids` is non-empty and every member is selected.
    pub fn is_all_selected(&self, visible_ids: &[String]) -> bool {
        !visible_ids.is_empty() && visible_ids.iter().all(|id| self.selected.contains(id))
    }

    /// True when some, but not all, of `visible_ids` are selected.
    pub fn is_partially_selected(&self, visible_ids: &[String]) -> bool {
        visible_ids.iter().any(|id| self.selected.contains(id))
            && !self.is_all_selected(visible_ids)
    }

    /// Clear all selection.
    /// Returns the IDs that were deselected.
    pub fn clear(&mut self) -> Vec<String> {
        self.selected.drain().collect()
    }

    /// Rows whose identity is selected, in the order of `rows`.
    pub fn current_selection<'a, T, F>(&self, rows: &'a [T], key: F) -> Vec<&'a T>
    where
        F: Fn(&T) -> String,
    {
        if self.selected.is_empty() {
            return Vec::new();
        }
        rows.iter()
            .filter(|row| self.selected.contains(&key(*row)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_toggle_flips_membership() {
        let mut selection = Selection::new();
        let change = selection.toggle("2");
        assert_eq!(change.added, ids(&["2"]));
        assert!(selection.is_selected("2"));

        let change = selection.toggle("2");
        assert_eq!(change.removed, ids(&["2"]));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_all_selects_when_partial() {
        let mut selection = Selection::new();
        selection.toggle("1");
        let change = selection.toggle_all(&ids(&["1", "2", "3"]));
        assert_eq!(change.added, ids(&["2", "3"]));
        assert!(change.removed.is_empty());
        assert_eq!(selection.selected(), ids(&["1", "2", "3"]));
    }

    #[test]
    fn test_toggle_all_clears_only_visible() {
        let mut selection = Selection::new();
        selection.select_all(&ids(&["1", "2", "9"]));
        let change = selection.toggle_all(&ids(&["1", "2"]));
        assert_eq!(change.removed, ids(&["1", "2"]));
        assert_eq!(selection.selected(), ids(&["9"]));
    }

    #[test]
    fn test_toggle_all_empty_visible_is_noop() {
        let mut selection = Selection::new();
        selection.toggle("1");
        assert!(selection.toggle_all(&[]).is_empty());
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_all_selected_requires_visible_rows() {
        let selection = Selection::new();
        assert!(!selection.is_all_selected(&[]));
    }

    #[test]
    fn test_partially_selected() {
        let mut selection = Selection::new();
        let visible = ids(&["1", "2"]);
        assert!(!selection.is_partially_selected(&visible));
        selection.toggle("1");
        assert!(selection.is_partially_selected(&visible));
        selection.toggle("2");
        assert!(!selection.is_partially_selected(&visible));
    }

    #[test]
    fn test_current_selection_keeps_row_order() {
        let rows = vec!["1", "2", "3"];
        let mut selection = Selection::new();
        selection.toggle("3");
        selection.toggle("1");
        let current = selection.current_selection(&rows, |row| row.to_string());
        assert_eq!(current, vec![&"1", &"3"]);
    }

    #[test]
    fn test_clear_returns_removed() {
        let mut selection = Selection::new();
        selection.toggle("1");
        assert_eq!(selection.clear(), ids(&["1"]));
        assert!(selection.clear().is_empty());
    }
}
