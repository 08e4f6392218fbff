use dialoguer::{Confirm, Select};

use crate::error::Result;
use crate::models::{MealPlanEntry, RecipeId};
use crate::state::{PlannerSession, Tab};

/// Actions offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    SwitchTab,
    AddRecipe,
    RemoveEntry,
    ToggleDetails,
    Quit,
}

impl MenuAction {
    fn label(self) -> &'static str {
        match self {
            MenuAction::SwitchTab => "Switch view",
            MenuAction::AddRecipe => "Add recipe to plan",
            MenuAction::RemoveEntry => "Remove recipe from plan",
            MenuAction::ToggleDetails => "Show/hide recipe details",
            MenuAction::Quit => "Quit",
        }
    }
}

/// Actions that make sense for the current session.
///
/// Removal is only offered when the plan has entries.
pub fn available_actions(session: &PlannerSession) -> Vec<MenuAction> {
    let mut actions = vec![MenuAction::SwitchTab, MenuAction::AddRecipe];
    if session.plan_len() > 0 {
        actions.push(MenuAction::RemoveEntry);
    }
    actions.push(MenuAction::ToggleDetails);
    actions.push(MenuAction::Quit);
    actions
}

/// Prompt for the next main-menu action.
pub fn prompt_menu_action(session: &PlannerSession) -> Result<MenuAction> {
    let actions = available_actions(session);
    let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();

    let selection = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(actions[selection])
}

/// Prompt for a tab, defaulting to the current one.
pub fn prompt_tab(current: Tab) -> Result<Tab> {
    let default = Tab::ALL.iter().position(|&t| t == current).unwrap_or(0);
    let labels: Vec<&str> = Tab::ALL.iter().map(|t| t.label()).collect();

    let selection = Select::new()
        .with_prompt("Which view?")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(Tab::ALL[selection])
}

/// Prompt for a catalog recipe. `None` if the user backs out.
pub fn prompt_recipe(session: &PlannerSession, prompt: &str) -> Result<Option<RecipeId>> {
    let recipes = session.catalog().list_recipes();
    let mut options: Vec<String> = recipes
        .iter()
        .map(|r| {
            let marker = if session.view().is_expanded(r.id) {
                " (expanded)"
            } else {
                ""
            };
            format!("{} [{}]{}", r.name, r.season, marker)
        })
        .collect();
    options.push("Back".to_string());

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact()?;

    Ok(recipes.get(selection).map(|r| r.id))
}

/// Prompt for a meal plan entry, returning its index in the given snapshot.
pub fn prompt_plan_entry(plan: &[MealPlanEntry]) -> Result<Option<usize>> {
    let mut options: Vec<String> = plan
        .iter()
        .map(|e| format!("{}. {}", e.position + 1, e.recipe.name))
        .collect();
    options.push("Back".to_string());

    let selection = Select::new()
        .with_prompt("Remove which entry?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(plan.get(selection).map(|e| e.position))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
