use std::collections::HashMap;

use assert_float_eq::*;

use eco_plate_rs::catalog::RecipeCatalog;
use eco_plate_rs::models::{Impact, Recipe, RecipeId};
use eco_plate_rs::planner::{build_shopping_list, compute_impact, ImpactTotals};
use eco_plate_rs::state::PlannerSession;
use eco_plate_rs::EcoError;

fn make_recipe(id: u32, carbon: f64, water: f64, waste: f64, ingredients: &[&str]) -> Recipe {
    Recipe {
        id: RecipeId(id),
        name: format!("Recipe {}", id),
        impact: Impact::new(carbon, water, waste),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        instructions: String::new(),
        season: "Any".to_string(),
    }
}

/// Recipe A and B from the worked example, plus a third with a repeated ingredient.
fn sample_session() -> PlannerSession {
    let catalog = RecipeCatalog::new(vec![
        make_recipe(1, 0.5, 300.0, 0.2, &["X", "Y"]),
        make_recipe(2, 0.3, 200.0, 0.1, &["Y", "Z"]),
        make_recipe(3, 0.7, 120.0, 0.05, &["Z", "W", "Z"]),
    ])
    .unwrap();
    PlannerSession::new(catalog)
}

fn shopping_map(session: &PlannerSession) -> HashMap<String, u32> {
    session.shopping_list().to_map()
}

fn expected_map(pairs: &[(&str, u32)]) -> HashMap<String, u32> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

/// Straight sum over the plan, written independently of `compute_impact`.
fn reference_totals(session: &PlannerSession) -> ImpactTotals {
    let mut totals = ImpactTotals::default();
    for entry in session.meal_plan() {
        totals.carbon_saved += entry.recipe.impact.carbon;
        totals.water_saved += entry.recipe.impact.water;
        totals.waste_saved += entry.recipe.impact.waste;
    }
    totals
}

#[test]
fn test_worked_example() {
    let mut session = sample_session();
    session.add_recipe(RecipeId(1)).unwrap();
    session.add_recipe(RecipeId(2)).unwrap();

    let totals = session.impact_totals();
    assert_float_absolute_eq!(totals.carbon_saved, 0.8, 1e-9);
    assert_float_absolute_eq!(totals.water_saved, 500.0, 1e-9);
    assert_float_absolute_eq!(totals.waste_saved, 0.3, 1e-9);
    assert_eq!(
        shopping_map(&session),
        expected_map(&[("X", 1), ("Y", 2), ("Z", 1)])
    );

    let removed = session.remove_at(0).unwrap();
    assert_eq!(removed.id, RecipeId(1));

    let totals = session.impact_totals();
    assert_float_absolute_eq!(totals.carbon_saved, 0.3, 1e-9);
    assert_float_absolute_eq!(totals.water_saved, 200.0, 1e-9);
    assert_float_absolute_eq!(totals.waste_saved, 0.1, 1e-9);
    assert_eq!(shopping_map(&session), expected_map(&[("Y", 1), ("Z", 1)]));
}

#[test]
fn test_empty_plan_derivations() {
    let session = sample_session();
    assert!(session.shopping_list().is_empty());
    assert_eq!(session.impact_totals(), ImpactTotals::default());
    assert!(build_shopping_list(&[]).is_empty());
    assert_eq!(compute_impact(&[]), ImpactTotals::default());
}

#[test]
fn test_totals_match_sum_after_every_operation() {
    let mut session = sample_session();

    // (add id) or (remove index); indices are valid for the plan at that point.
    let script: &[(bool, u32)] = &[
        (true, 1),
        (true, 3),
        (true, 2),
        (true, 1),
        (false, 1),
        (true, 3),
        (false, 0),
        (true, 2),
        (false, 3),
        (false, 0),
        (true, 1),
        (false, 2),
        (false, 0),
        (false, 0),
    ];

    for &(is_add, value) in script {
        if is_add {
            session.add_recipe(RecipeId(value)).unwrap();
        } else {
            session.remove_at(value as usize).unwrap();
        }

        let totals = session.impact_totals();
        let reference = reference_totals(&session);
        assert_eq!(totals.carbon_saved.to_bits(), reference.carbon_saved.to_bits());
        assert_eq!(totals.water_saved.to_bits(), reference.water_saved.to_bits());
        assert_eq!(totals.waste_saved.to_bits(), reference.waste_saved.to_bits());
    }

    assert_eq!(session.plan_len(), 0);
    assert_eq!(session.impact_totals(), ImpactTotals::default());
}

#[test]
fn test_add_then_remove_is_inverse() {
    let mut session = sample_session();
    session.add_recipe(RecipeId(2)).unwrap();
    session.add_recipe(RecipeId(3)).unwrap();

    let totals_before = session.impact_totals();
    let list_before = session.shopping_list();

    session.add_recipe(RecipeId(1)).unwrap();
    let index = session.plan_len() - 1;
    session.remove_at(index).unwrap();

    assert_eq!(session.impact_totals(), totals_before);
    assert_eq!(session.shopping_list(), list_before);
}

#[test]
fn test_duplicate_entries_are_independent() {
    let mut session = sample_session();
    session.add_recipe(RecipeId(1)).unwrap();
    session.add_recipe(RecipeId(1)).unwrap();

    assert_eq!(session.plan_len(), 2);
    let doubled = session.impact_totals();
    assert_float_absolute_eq!(doubled.carbon_saved, 1.0, 1e-9);
    assert_float_absolute_eq!(doubled.water_saved, 600.0, 1e-9);
    assert_eq!(shopping_map(&session), expected_map(&[("X", 2), ("Y", 2)]));

    session.remove_at(1).unwrap();
    let halved = session.impact_totals();
    assert_float_absolute_eq!(halved.carbon_saved, doubled.carbon_saved / 2.0, 1e-9);
    assert_float_absolute_eq!(halved.water_saved, doubled.water_saved / 2.0, 1e-9);
    assert_float_absolute_eq!(halved.waste_saved, doubled.waste_saved / 2.0, 1e-9);
    assert_eq!(session.meal_plan()[0].recipe.id, RecipeId(1));
}

#[test]
fn test_repeated_ingredient_counts_per_slot() {
    let mut session = sample_session();
    session.add_recipe(RecipeId(3)).unwrap();
    assert_eq!(shopping_map(&session), expected_map(&[("Z", 2), ("W", 1)]));
}

#[test]
fn test_out_of_range_remove_leaves_plan_unchanged() {
    let mut session = sample_session();
    session.add_recipe(RecipeId(1)).unwrap();
    session.add_recipe(RecipeId(2)).unwrap();

    let err = session.remove_at(2).unwrap_err();
    assert!(matches!(err, EcoError::IndexOutOfRange { index: 2, len: 2 }));

    let ids: Vec<RecipeId> = session.meal_plan().iter().map(|e| e.recipe.id).collect();
    assert_eq!(ids, vec![RecipeId(1), RecipeId(2)]);
    assert_float_absolute_eq!(session.impact_totals().water_saved, 500.0, 1e-9);
}

#[test]
fn test_toggle_law_through_session() {
    let mut session = sample_session();
    let original = session.view().expanded_recipe();

    session.toggle_expanded(RecipeId(2));
    session.toggle_expanded(RecipeId(2));
    assert_eq!(session.view().expanded_recipe(), original);

    session.toggle_expanded(RecipeId(1));
    session.toggle_expanded(RecipeId(3));
    assert_eq!(session.view().expanded_recipe(), Some(RecipeId(3)));
}
