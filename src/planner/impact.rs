use crate::models::MealPlanEntry;

/// Cumulative environmental savings over a meal plan.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ImpactTotals {
    /// Kilograms of CO₂ not emitted.
    pub carbon_saved: f64,
    /// Litres of water saved.
    pub water_saved: f64,
    /// Kilograms of food waste prevented.
    pub waste_saved: f64,
}

/// Sum every entry's impact, in plan order, starting from zero.
///
/// The result depends only on the current plan, never on the add/remove
/// history that produced it.
pub fn compute_impact(plan: &[MealPlanEntry]) -> ImpactTotals {
    plan.iter()
        .fold(ImpactTotals::default(), |mut totals, entry| {
            let impact = &entry.recipe.impact;
            totals.carbon_saved += impact.carbon;
            totals.water_saved += impact.water;
            totals.waste_saved += impact.waste;
            totals
        })
}
