pub mod constants;
pub mod impact;
pub mod shopping;

pub use constants::*;
pub use impact::{compute_impact, ImpactTotals};
pub use shopping::{build_shopping_list, ShoppingItem, ShoppingList};
