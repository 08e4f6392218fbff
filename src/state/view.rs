use std::fmt;

use clap::ValueEnum;

use crate::models::RecipeId;

/// The three views of the EcoPlate screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Tab {
    #[default]
    Planner,
    Shopping,
    Impact,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Planner, Tab::Shopping, Tab::Impact];

    /// Label shown in the tab bar.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Planner => "Meal Planner",
            Tab::Shopping => "Shopping List",
            Tab::Impact => "Impact",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Transient presentation state: active tab and expanded recipe details.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    active_tab: Tab,
    /// At most one recipe has its details expanded.
    expanded_recipe: Option<RecipeId>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn expanded_recipe(&self) -> Option<RecipeId> {
        self.expanded_recipe
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Collapse `id` if it is expanded, otherwise expand it in place of any other.
    pub fn toggle_expanded(&mut self, id: RecipeId) {
        self.expanded_recipe = match self.expanded_recipe {
            Some(current) if current == id => None,
            _ => Some(id),
        };
    }

    pub fn is_expanded(&self, id: RecipeId) -> bool {
        self.expanded_recipe == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let view = ViewState::new();
        assert_eq!(view.active_tab(), Tab::Planner);
        assert_eq!(view.expanded_recipe(), None);
    }

    #[test]
    fn test_set_active_tab() {
        let mut view = ViewState::new();
        for tab in Tab::ALL {
            view.set_active_tab(tab);
            assert_eq!(view.active_tab(), tab);
        }
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut view = ViewState::new();
        view.toggle_expanded(RecipeId(1));
        assert!(view.is_expanded(RecipeId(1)));
        view.toggle_expanded(RecipeId(1));
        assert_eq!(view.expanded_recipe(), None);

        // Starting from the expanded id itself: collapse, then expand again.
        view.toggle_expanded(RecipeId(2));
        view.toggle_expanded(RecipeId(2));
        view.toggle_expanded(RecipeId(2));
        assert_eq!(view.expanded_recipe(), Some(RecipeId(2)));
        view.toggle_expanded(RecipeId(2));
        view.toggle_expanded(RecipeId(2));
        assert_eq!(view.expanded_recipe(), Some(RecipeId(2)));

        // A different id replaces, so toggling it twice ends collapsed.
        view.toggle_expanded(RecipeId(3));
        view.toggle_expanded(RecipeId(3));
        assert_eq!(view.expanded_recipe(), None);
    }

    #[test]
    fn test_toggle_other_replaces() {
        let mut view = ViewState::new();
        view.toggle_expanded(RecipeId(1));
        view.toggle_expanded(RecipeId(2));
        assert!(view.is_expanded(RecipeId(2)));
        assert!(!view.is_expanded(RecipeId(1)));
    }

    #[test]
    fn test_tab_labels() {
        assert_eq!(Tab::Shopping.to_string(), "Shopping List");
        assert_eq!(Tab::Planner.label(), "Meal Planner");
    }
}
