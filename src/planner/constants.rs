/// Eco score shown once the plan has at least one entry.
pub const ECO_SCORE_GOOD: &str = "Good";

/// Eco score shown for an empty plan.
pub const ECO_SCORE_EMPTY: &str = "Start planning!";

// ─────────────────────────────────────────────────────────────────────────────
// Tips shown under the shopping list and impact views
// ─────────────────────────────────────────────────────────────────────────────

pub const SHOPPING_TIPS: [&str; 3] = [
    "Bring reusable bags to reduce plastic waste",
    "Look for locally grown produce to reduce carbon footprint",
    "Choose items with minimal packaging when possible",
];

pub const IMPACT_TIPS: [&str; 3] = [
    "Plant-based meals generally have a lower carbon footprint",
    "Seasonal and local ingredients require less transportation energy",
    "Using all parts of ingredients reduces food waste",
];

/// Eco score label for a plan with `entries` selections.
pub fn eco_score(entries: usize) -> &'static str {
    if entries > 0 {
        ECO_SCORE_GOOD
    } else {
        ECO_SCORE_EMPTY
    }
}
