use std::rc::Rc;

use crate::error::{EcoError, Result};
use crate::models::{MealPlanEntry, Recipe};

/// Ordered selection of recipes making up the user's meal plan.
///
/// Duplicates are allowed; each entry is added and removed independently.
#[derive(Debug, Clone, Default)]
pub struct MealPlanStore {
    entries: Vec<Rc<Recipe>>,
}

impl MealPlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a recipe to the end of the plan.
    pub fn add(&mut self, recipe: Rc<Recipe>) {
        self.entries.push(recipe);
    }

    /// Remove the entry at `index`, shifting later entries down by one.
    ///
    /// An index past the end is rejected and the plan is left untouched.
    pub fn remove_at(&mut self, index: usize) -> Result<Rc<Recipe>> {
        if index >= self.entries.len() {
            return Err(EcoError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    /// Snapshot of the plan in its current order.
    pub fn list(&self) -> Vec<MealPlanEntry> {
        self.entries
            .iter()
            .enumerate()
            .map(|(position, recipe)| MealPlanEntry::new(position, Rc::clone(recipe)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Impact, RecipeId};

    fn recipe(id: u32) -> Rc<Recipe> {
        Rc::new(Recipe {
            id: RecipeId(id),
            name: format!("Recipe {}", id),
            impact: Impact::new(0.1, 1.0, 0.1),
            ingredients: Vec::new(),
            instructions: String::new(),
            season: String::new(),
        })
    }

    fn ids(store: &MealPlanStore) -> Vec<u32> {
        store.list().iter().map(|e| e.recipe.id.0).collect()
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut store = MealPlanStore::new();
        assert!(store.is_empty());

        store.add(recipe(1));
        store.add(recipe(2));
        store.add(recipe(1));

        assert_eq!(store.len(), 3);
        assert_eq!(ids(&store), vec![1, 2, 1]);

        let positions: Vec<usize> = store.list().iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_remove_shifts_later_entries() {
        let mut store = MealPlanStore::new();
        for id in 1..=4 {
            store.add(recipe(id));
        }

        let removed = store.remove_at(1).unwrap();
        assert_eq!(removed.id, RecipeId(2));
        assert_eq!(ids(&store), vec![1, 3, 4]);
        assert_eq!(store.list()[1].position, 1);
    }

    #[test]
    fn test_remove_out_of_range_leaves_plan_unchanged() {
        let mut store = MealPlanStore::new();
        store.add(recipe(1));
        store.add(recipe(2));

        let err = store.remove_at(2).unwrap_err();
        assert!(matches!(err, EcoError::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(ids(&store), vec![1, 2]);

        assert!(store.remove_at(usize::MAX).is_err());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_from_empty_plan() {
        let mut store = MealPlanStore::new();
        assert!(matches!(
            store.remove_at(0),
            Err(EcoError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_duplicates_removed_independently() {
        let mut store = MealPlanStore::new();
        let shared = recipe(9);
        store.add(Rc::clone(&shared));
        store.add(Rc::clone(&shared));

        store.remove_at(0).unwrap();
        assert_eq!(ids(&store), vec![9]);
    }
}
