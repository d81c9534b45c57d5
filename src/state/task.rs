// Task categories and the task-selection prompt.
// The category set is closed; the prompt only tracks visibility and the highlighted row.

use std::fmt;

use ratatui::widgets::ListState;
use serde::{Deserialize, Serialize};

/// Category a segment of work is logged under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Task {
    Clinical,
    #[serde(rename = "Non-Clinical")]
    NonClinical,
    Billable,
    #[serde(rename = "Non-Billable")]
    NonBillable,
    Education,
    Break,
}

impl Task {
    /// All categories in prompt order.
    pub const ALL: [Task; 6] = [
        Task::Clinical,
        Task::NonClinical,
        Task::Billable,
        Task::NonBillable,
        Task::Education,
        Task::Break,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Task::Clinical => "Clinical",
            Task::NonClinical => "Non-Clinical",
            Task::Billable => "Billable",
            Task::NonBillable => "Non-Billable",
            Task::Education => "Education",
            Task::Break => "Break",
        }
    }

    /// Look up a category by its one-based position in the prompt.
    pub fn from_shortcut(n: u32) -> Option<Task> {
        let index = usize::try_from(n).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Task-selection prompt state.
#[derive(Debug, Default)]
pub struct TaskSelector {
    visible: bool,
    pub list_state: ListState,
}

impl TaskSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the prompt with the first option highlighted.
    pub fn open(&mut self) {
        self.visible = true;
        self.list_state.select(Some(0));
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn select_prev(&mut self) {
        let i = match self.list_state.selected() {
            Some(0) | None => 0,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_next(&mut self) {
        let last = Task::ALL.len() - 1;
        let i = match self.list_state.selected() {
            Some(i) if i >= last => last,
            Some(i) => i + 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Currently highlighted option.
    pub fn highlighted(&self) -> Option<Task> {
        self.list_state
            .selected()
            .and_then(|i| Task::ALL.get(i).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_export_strings() {
        let labels: Vec<&str> = Task::ALL.iter().map(Task::label).collect();
        assert_eq!(
            labels,
            [
                "Clinical",
                "Non-Clinical",
                "Billable",
                "Non-Billable",
                "Education",
                "Break"
            ]
        );
        assert_eq!(Task::NonBillable.to_string(), "Non-Billable");
    }

    #[test]
    fn test_from_shortcut() {
        assert_eq!(Task::from_shortcut(1), Some(Task::Clinical));
        assert_eq!(Task::from_shortcut(6), Some(Task::Break));
        assert_eq!(Task::from_shortcut(0), None);
        assert_eq!(Task::from_shortcut(7), None);
    }

    #[test]
    fn test_selector_navigation_clamps() {
        let mut selector = TaskSelector::new();
        selector.open();
        assert!(selector.is_visible());
        assert_eq!(selector.highlighted(), Some(Task::Clinical));

        selector.select_prev();
        assert_eq!(selector.highlighted(), Some(Task::Clinical));

        for _ in 0..10 {
            selector.select_next();
        }
        assert_eq!(selector.highlighted(), Some(Task::Break));

        selector.close();
        assert!(!selector.is_visible());
    }

    #[test]
    fn test_reopen_resets_highlight() {
        let mut selector = TaskSelector::new();
        selector.open();
        selector.select_next();
        selector.select_next();
        selector.close();

        selector.open();
        assert_eq!(selector.highlighted(), Some(Task::Clinical));
    }
}
