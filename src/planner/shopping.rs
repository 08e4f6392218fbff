use std::collections::HashMap;

use crate::models::MealPlanEntry;

/// One line of the shopping list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingItem {
    pub ingredient: String,
    /// Number of (plan entry, ingredient slot) pairs naming this ingredient.
    pub count: u32,
}

/// Ingredient name to usage count, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
    index: HashMap<String, usize>,
}

impl ShoppingList {
    /// Bump the count for `ingredient`, appending it if new.
    fn increment(&mut self, ingredient: &str) {
        match self.index.get(ingredient) {
            Some(&idx) => self.items[idx].count += 1,
            None => {
                self.index.insert(ingredient.to_string(), self.items.len());
                self.items.push(ShoppingItem {
                    ingredient: ingredient.to_string(),
                    count: 1,
                });
            }
        }
    }

    /// Count for an ingredient, if it is on the list.
    pub fn get(&self, ingredient: &str) -> Option<u32> {
        self.index.get(ingredient).map(|&idx| self.items[idx].count)
    }

    /// Items in the order their ingredient was first encountered.
    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    /// Items ordered by ingredient name.
    pub fn sorted_items(&self) -> Vec<&ShoppingItem> {
        let mut sorted: Vec<&ShoppingItem> = self.items.iter().collect();
        sorted.sort_by(|a, b| a.ingredient.cmp(&b.ingredient));
        sorted
    }

    /// Plain mapping view, for consumers that do not care about order.
    pub fn to_map(&self) -> HashMap<String, u32> {
        self.items
            .iter()
            .map(|item| (item.ingredient.clone(), item.count))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Count, for each ingredient, how many ingredient slots across the plan name it.
///
/// A recipe listing the same ingredient twice contributes two to its count.
pub fn build_shopping_list(plan: &[MealPlanEntry]) -> ShoppingList {
    let mut list = ShoppingList::default();
    for entry in plan {
        for ingredient in &entry.recipe.ingredients {
            list.increment(ingredient);
        }
    }
    list
}
