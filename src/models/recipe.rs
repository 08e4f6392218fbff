use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable catalog identifier of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub u32);

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Environmental savings of one serving, compared to an average meal.
///
/// Carbon and waste are in kilograms, water in litres.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Impact {
    pub carbon: f64,
    pub water: f64,
    pub waste: f64,
}

impl Impact {
    pub fn new(carbon: f64, water: f64, waste: f64) -> Self {
        Self {
            carbon,
            water,
            waste,
        }
    }

    /// All three figures are finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.carbon, self.water, self.waste]
            .into_iter()
            .all(|v| v.is_finite() && v >= 0.0)
    }
}

/// An immutable catalog recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,

    pub name: String,

    pub impact: Impact,

    /// Ingredient names in display order. Names may repeat.
    #[serde(default)]
    pub ingredients: Vec<String>,

    /// Newline-separated preparation steps.
    #[serde(default)]
    pub instructions: String,

    #[serde(default)]
    pub season: String,
}

impl Recipe {
    /// Basic validation: a non-blank name and valid impact figures.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.impact.is_valid()
    }

    /// Instruction steps with blank lines dropped.
    pub fn instruction_steps(&self) -> impl Iterator<Item = &str> {
        self.instructions
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }

    /// Canonical key for name lookups (lowercase, trimmed).
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }
}
