mod plan;
mod recipe;

pub use plan::MealPlanEntry;
pub use recipe::{Impact, Recipe, RecipeId};
