pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod state;

pub use catalog::RecipeCatalog;
pub use error::{EcoError, Result};
pub use models::{Impact, MealPlanEntry, Recipe, RecipeId};
pub use state::PlannerSession;
