use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use strsim::jaro_winkler;
use tracing::debug;

use crate::catalog::builtin_recipes;
use crate::catalog::constants::FUZZY_MATCH_THRESHOLD;
use crate::error::{EcoError, Result};
use crate::models::{Recipe, RecipeId};

/// Read-only, ordered collection of recipes available for planning.
#[derive(Debug, Clone)]
pub struct RecipeCatalog {
    recipes: Vec<Rc<Recipe>>,
    /// Position in `recipes` keyed by id.
    by_id: HashMap<RecipeId, usize>,
}

impl RecipeCatalog {
    /// Build a catalog, rejecting duplicate ids and invalid recipes.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self> {
        Self::validate(&recipes)?;
        debug!(count = recipes.len(), "recipe catalog built");
        Ok(Self::assemble(recipes))
    }

    /// The catalog shipped with the application.
    pub fn builtin() -> Self {
        let recipes = builtin_recipes();
        debug_assert!(Self::validate(&recipes).is_ok());
        Self::assemble(recipes)
    }

    fn validate(recipes: &[Recipe]) -> Result<()> {
        let mut seen = HashSet::with_capacity(recipes.len());
        for recipe in recipes {
            if !recipe.is_valid() {
                return Err(EcoError::InvalidRecipe(format!(
                    "{} '{}' needs a name and non-negative impact figures",
                    recipe.id, recipe.name
                )));
            }
            if !seen.insert(recipe.id) {
                return Err(EcoError::DuplicateRecipeId(recipe.id));
            }
        }
        Ok(())
    }

    /// Index already-validated recipes by id.
    fn assemble(recipes: Vec<Recipe>) -> Self {
        let by_id = recipes
            .iter()
            .enumerate()
            .map(|(idx, r)| (r.id, idx))
            .collect();
        Self {
            recipes: recipes.into_iter().map(Rc::new).collect(),
            by_id,
        }
    }

    /// All recipes in catalog order.
    pub fn list_recipes(&self) -> &[Rc<Recipe>] {
        &self.recipes
    }

    pub fn get(&self, id: RecipeId) -> Option<&Rc<Recipe>> {
        self.by_id.get(&id).map(|&idx| &self.recipes[idx])
    }

    /// Find recipes by name.
    ///
    /// A case-insensitive exact match wins outright. Otherwise returns fuzzy
    /// candidates scoring above the threshold, best first.
    pub fn find_by_name(&self, query: &str) -> Vec<&Rc<Recipe>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        if let Some(exact) = self.recipes.iter().find(|r| r.key() == query) {
            return vec![exact];
        }

        let mut candidates: Vec<(&Rc<Recipe>, f64)> = self
            .recipes
            .iter()
            .map(|r| (r, jaro_winkler(&r.key(), &query)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.into_iter().map(|(r, _)| r).collect()
    }

    /// Resolve a name to the single best-matching recipe.
    pub fn resolve_name(&self, query: &str) -> Result<&Rc<Recipe>> {
        self.find_by_name(query)
            .into_iter()
            .next()
            .ok_or_else(|| EcoError::RecipeNotFound(query.to_string()))
    }

    /// Owned copies of every recipe, for export.
    pub fn to_recipes(&self) -> Vec<Recipe> {
        self.recipes.iter().map(|r| Recipe::clone(r)).collect()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl Default for RecipeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
