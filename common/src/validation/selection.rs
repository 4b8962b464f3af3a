use serde::{Deserialize, Serialize};

/// Record ids checked for a bulk approve/reject, in the order they were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    ids: Vec<String>,
}

impl SelectionSet {
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    pub fn toggle(&mut self, id: &str) {
        if self.contains(id) {
            self.ids.retain(|i| i != id);
        } else {
            self.ids.push(id.to_string());
        }
    }

    /// True when `visible` is non-empty and every id in it is selected.
    pub fn is_all_selected(&self, visible: &[&str]) -> bool {
        !visible.is_empty() && visible.iter().all(|id| self.contains(id))
    }

    /// Selects all of `visible`, or clears the selection if that is already the case.
    pub fn toggle_all(&mut self, visible: &[&str]) {
        if self.is_all_selected(visible) {
            self.clear();
        } else {
            self.ids = visible.iter().map(|id| id.to_string()).collect();
        }
    }

    /// Drops ids that are no longer in `visible`.
    pub fn retain_visible(&mut self, visible: &[&str]) {
        self.ids.retain(|id| visible.contains(&id.as_str()));
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_membership() {
        let mut selection = SelectionSet::default();
        selection.toggle("FD-001");
        selection.toggle("FD-004");
        assert_eq!(selection.ids(), ["FD-001", "FD-004"]);
        selection.toggle("FD-001");
        assert_eq!(selection.ids(), ["FD-004"]);
    }

    #[test]
    fn toggle_all_twice_returns_to_empty() {
        let visible = ["FD-001", "FD-002", "FD-003"];
        let mut selection = SelectionSet::default();
        selection.toggle_all(&visible);
        assert!(selection.is_all_selected(&visible));
        assert_eq!(selection.len(), 3);
        selection.toggle_all(&visible);
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_all_completes_a_partial_selection() {
        let visible = ["FD-001", "FD-002"];
        let mut selection = SelectionSet::default();
        selection.toggle("FD-002");
        selection.toggle_all(&visible);
        assert_eq!(selection.ids(), ["FD-001", "FD-002"]);
    }

    #[test]
    fn empty_visible_set_is_never_all_selected() {
        let mut selection = SelectionSet::default();
        assert!(!selection.is_all_selected(&[]));
        selection.toggle("FD-009");
        selection.toggle_all(&[]);
        assert!(selection.is_empty());
    }

    #[test]
    fn retain_visible_prunes_hidden_ids() {
        let mut selection = SelectionSet::default();
        selection.toggle("FD-001");
        selection.toggle("FD-002");
        selection.retain_visible(&["FD-002", "FD-003"]);
        assert_eq!(selection.ids(), ["FD-002"]);
    }
}
