use std::rc::Rc;

use crate::models::Recipe;
use crate::planner::{eco_score, IMPACT_TIPS, SHOPPING_TIPS};
use crate::state::{PlannerSession, Tab};

const EMPTY_PLAN_MESSAGE: &str = "Your meal plan is empty. Add recipes from above to get started!";
const EMPTY_SHOPPING_MESSAGE: &str = "Add recipes to your meal plan to generate a shopping list";

/// Join lines into a block of text ending in a newline.
fn to_block(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Header plus tab bar, with the active tab bracketed.
pub fn render_header(active: Tab) -> String {
    let tabs: Vec<String> = Tab::ALL
        .iter()
        .map(|&tab| {
            if tab == active {
                format!("[{}]", tab)
            } else {
                format!(" {} ", tab)
            }
        })
        .collect();

    to_block(vec![
        "=== EcoPlate — Sustainable Meal Planning ===".to_string(),
        tabs.join(" | "),
    ])
}

fn detail_lines(recipe: &Recipe) -> Vec<String> {
    let mut lines = vec!["      Ingredients:".to_string()];
    lines.extend(
        recipe
            .ingredients
            .iter()
            .map(|ingredient| format!("        - {}", ingredient)),
    );
    lines.push("      Instructions:".to_string());
    lines.extend(recipe.instruction_steps().map(|step| format!("        {}", step)));
    lines
}

/// Ingredients and instructions of a single recipe.
pub fn render_recipe_details(recipe: &Recipe) -> String {
    to_block(detail_lines(recipe))
}

/// Recipe suggestions followed by the current meal plan.
pub fn render_planner(session: &PlannerSession) -> String {
    let mut lines = vec!["Sustainable Recipe Suggestions".to_string(), String::new()];

    for (i, recipe) in session.catalog().list_recipes().iter().enumerate() {
        let expanded = session.view().is_expanded(recipe.id);
        let marker = if expanded { "v" } else { ">" };
        lines.push(format!("  {} {}. {}", marker, i + 1, recipe.name));
        lines.push(format!("      Season: {}", recipe.season));
        lines.push(format!("      {} kg CO₂ saved", recipe.impact.carbon));
        if expanded {
            lines.extend(detail_lines(recipe));
        }
    }

    lines.push(String::new());
    lines.push("Your Meal Plan".to_string());
    lines.push(String::new());

    let plan = session.meal_plan();
    if plan.is_empty() {
        lines.push(format!("  {}", EMPTY_PLAN_MESSAGE));
    }
    for entry in &plan {
        lines.push(format!("  {:>3}. {}", entry.position + 1, entry.recipe.name));
    }
    to_block(lines)
}

/// Ingredient usage counts, in first-seen order, plus shopping tips.
pub fn render_shopping(session: &PlannerSession) -> String {
    let mut lines = vec!["Shopping List".to_string(), String::new()];

    let list = session.shopping_list();
    if list.is_empty() {
        lines.push(format!("  {}", EMPTY_SHOPPING_MESSAGE));
        return to_block(lines);
    }

    let width = list
        .items()
        .iter()
        .map(|item| item.ingredient.chars().count())
        .max()
        .unwrap_or(10);

    for item in list.items() {
        let plural = if item.count > 1 { "s" } else { "" };
        lines.push(format!(
            "  {:<width$}  Used in {} recipe{}",
            item.ingredient,
            item.count,
            plural,
            width = width
        ));
    }

    lines.push(String::new());
    lines.push("Shopping Tips:".to_string());
    lines.extend(SHOPPING_TIPS.iter().map(|tip| format!("  * {}", tip)));
    to_block(lines)
}

/// Eco score and cumulative savings, plus impact tips.
pub fn render_impact(session: &PlannerSession) -> String {
    let totals = session.impact_totals();

    let mut lines = vec![
        "Your Environmental Impact".to_string(),
        String::new(),
        format!("  Eco Score: {}", eco_score(session.plan_len())),
        String::new(),
        format!("  Carbon Impact:   {:.1} kg", totals.carbon_saved),
        "                   CO₂ emissions reduced".to_string(),
        format!("  Water Footprint: {} L", totals.water_saved),
        "                   Water saved compared to average meals".to_string(),
        format!("  Waste Reduction: {:.1} kg", totals.waste_saved),
        "                   Food waste prevented".to_string(),
        String::new(),
        "Environmental Impact Tips:".to_string(),
    ];
    lines.extend(IMPACT_TIPS.iter().map(|tip| format!("  * {}", tip)));
    to_block(lines)
}

/// Body of a single tab.
pub fn render_tab(session: &PlannerSession, tab: Tab) -> String {
    match tab {
        Tab::Planner => render_planner(session),
        Tab::Shopping => render_shopping(session),
        Tab::Impact => render_impact(session),
    }
}

/// The whole screen for the session's active tab.
pub fn render_screen(session: &PlannerSession) -> String {
    let active = session.view().active_tab();
    let mut out = render_header(active);
    out.push('\n');
    out.push_str(&render_tab(session, active));
    out
}

/// Print the whole screen for the active tab.
pub fn display_screen(session: &PlannerSession) {
    println!();
    print!("{}", render_screen(session));
}

/// Print the catalog, optionally with each recipe's details.
pub fn display_catalog(recipes: &[Rc<Recipe>], details: bool) {
    if recipes.is_empty() {
        println!("Catalog: (none)");
        return;
    }

    println!();
    println!("=== Catalog ({} recipes) ===", recipes.len());
    println!();

    for recipe in recipes {
        println!(
            "  {} {} [{}] - CO₂ {} kg, water {} L, waste {} kg",
            recipe.id,
            recipe.name,
            recipe.season,
            recipe.impact.carbon,
            recipe.impact.water,
            recipe.impact.waste
        );
        if details {
            print!("{}", render_recipe_details(recipe));
        }
    }

    println!();
}
