use std::rc::Rc;

use super::Recipe;

/// A single selection in the meal plan.
///
/// The same recipe may back several entries; each one is independent.
#[derive(Debug, Clone)]
pub struct MealPlanEntry {
    /// Zero-based position in the plan at the time the entry was listed.
    pub position: usize,

    /// The catalog recipe this entry refers to.
    pub recipe: Rc<Recipe>,
}

impl MealPlanEntry {
    pub fn new(position: usize, recipe: Rc<Recipe>) -> Self {
        Self { position, recipe }
    }
}
