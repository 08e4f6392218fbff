use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;

use eco_plate_rs::catalog::{load_recipes, save_recipes, RecipeCatalog};
use eco_plate_rs::cli::{Cli, Command};
use eco_plate_rs::error::Result;
use eco_plate_rs::interface::{
    display_catalog, display_screen, prompt_menu_action, prompt_plan_entry, prompt_recipe,
    prompt_tab, prompt_yes_no, render_header, render_tab, MenuAction,
};
use eco_plate_rs::logging::init_logging;
use eco_plate_rs::state::{PlannerSession, Tab};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let catalog = load_catalog(cli.catalog.as_deref())?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Interactive => cmd_interactive(catalog),
        Command::Catalog { details, export } => cmd_catalog(&catalog, details, export),
        Command::Plan { recipes, tab } => cmd_plan(catalog, &recipes, tab),
    }
}

/// Use the catalog file if one was given, otherwise the built-in recipes.
fn load_catalog(path: Option<&Path>) -> Result<RecipeCatalog> {
    match path {
        Some(path) => {
            let recipes = load_recipes(path)?;
            let catalog = RecipeCatalog::new(recipes)?;
            info!(path = %path.display(), recipes = catalog.len(), "loaded recipe catalog");
            Ok(catalog)
        }
        None => Ok(RecipeCatalog::builtin()),
    }
}

/// Menu loop: render the active view, then apply one user action.
fn cmd_interactive(catalog: RecipeCatalog) -> Result<()> {
    if catalog.is_empty() {
        println!("The recipe catalog is empty. Nothing to plan.");
        return Ok(());
    }

    let mut session = PlannerSession::new(catalog);

    loop {
        display_screen(&session);
        println!();

        match prompt_menu_action(&session)? {
            MenuAction::SwitchTab => {
                let tab = prompt_tab(session.view().active_tab())?;
                session.set_active_tab(tab);
            }
            MenuAction::AddRecipe => {
                if let Some(id) = prompt_recipe(&session, "Add which recipe?")? {
                    session.add_recipe(id)?;
                }
            }
            MenuAction::RemoveEntry => {
                let plan = session.meal_plan();
                if let Some(index) = prompt_plan_entry(&plan)? {
                    session.remove_at(index)?;
                }
            }
            MenuAction::ToggleDetails => {
                let prompt = "Show or hide details for which recipe?";
                if let Some(id) = prompt_recipe(&session, prompt)? {
                    session.toggle_expanded(id);
                    session.set_active_tab(Tab::Planner);
                }
            }
            MenuAction::Quit => {
                if session.plan_len() == 0
                    || prompt_yes_no("Quit? Your meal plan will not be saved.", true)?
                {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Print the catalog and optionally export it.
fn cmd_catalog(catalog: &RecipeCatalog, details: bool, export: Option<PathBuf>) -> Result<()> {
    display_catalog(catalog.list_recipes(), details);

    if let Some(path) = export {
        save_recipes(&path, &catalog.to_recipes())?;
        println!("Catalog written to {}", path.display());
    }

    Ok(())
}

/// Add recipes by name, in order, then print the requested views.
fn cmd_plan(catalog: RecipeCatalog, names: &[String], tab: Option<Tab>) -> Result<()> {
    let mut session = PlannerSession::new(catalog);

    for name in names {
        let recipe = session.catalog().resolve_name(name)?.clone();
        if recipe.name.to_lowercase() != name.trim().to_lowercase() {
            println!("Matched '{}' to '{}'", name, recipe.name);
        }
        session.add(recipe);
    }

    let tabs: Vec<Tab> = match tab {
        Some(tab) => vec![tab],
        None => Tab::ALL.to_vec(),
    };

    for tab in tabs {
        session.set_active_tab(tab);
        println!();
        print!("{}", render_header(tab));
        println!();
        print!("{}", render_tab(&session, tab));
    }

    Ok(())
}
