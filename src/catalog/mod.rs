mod builtin;
pub mod constants;
mod persistence;
mod recipe_catalog;

pub use builtin::builtin_recipes;
pub use persistence::{load_recipes, save_recipes};
pub use recipe_catalog::RecipeCatalog;
