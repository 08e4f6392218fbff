use std::rc::Rc;

use tracing::{debug, info};

use crate::catalog::RecipeCatalog;
use crate::error::{EcoError, Result};
use crate::models::{MealPlanEntry, Recipe, RecipeId};
use crate::planner::{build_shopping_list, compute_impact, ImpactTotals, ShoppingList};
use crate::state::{MealPlanStore, Tab, ViewState};

/// Everything the presentation layer needs: the catalog, the meal plan and
/// the view state.
///
/// Derived views are computed from the plan on every read, so they can never
/// drift from it.
#[derive(Debug, Clone, Default)]
pub struct PlannerSession {
    catalog: RecipeCatalog,
    plan: MealPlanStore,
    view: ViewState,
}

impl PlannerSession {
    pub fn new(catalog: RecipeCatalog) -> Self {
        Self {
            catalog,
            plan: MealPlanStore::new(),
            view: ViewState::new(),
        }
    }

    pub fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Add the catalog recipe with `id` to the end of the plan.
    pub fn add_recipe(&mut self, id: RecipeId) -> Result<()> {
        let recipe = self
            .catalog
            .get(id)
            .cloned()
            .ok_or_else(|| EcoError::RecipeNotFound(id.to_string()))?;
        self.add(recipe);
        Ok(())
    }

    /// Add a recipe by shared reference.
    pub fn add(&mut self, recipe: Rc<Recipe>) {
        info!(recipe = %recipe.name, id = %recipe.id, "added to meal plan");
        self.plan.add(recipe);
        debug!(entries = self.plan.len(), "meal plan updated");
    }

    /// Remove the plan entry at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<Rc<Recipe>> {
        let removed = self.plan.remove_at(index)?;
        info!(recipe = %removed.name, index, "removed from meal plan");
        debug!(entries = self.plan.len(), "meal plan updated");
        Ok(removed)
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        debug!(tab = %tab, "switched tab");
        self.view.set_active_tab(tab);
    }

    pub fn toggle_expanded(&mut self, id: RecipeId) {
        self.view.toggle_expanded(id);
        debug!(expanded = ?self.view.expanded_recipe(), "toggled recipe details");
    }

    /// Current plan, in order.
    pub fn meal_plan(&self) -> Vec<MealPlanEntry> {
        self.plan.list()
    }

    pub fn plan_len(&self) -> usize {
        self.plan.len()
    }

    pub fn impact_totals(&self) -> ImpactTotals {
        compute_impact(&self.plan.list())
    }

    pub fn shopping_list(&self) -> ShoppingList {
        build_shopping_list(&self.plan.list())
    }
}
