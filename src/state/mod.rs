mod session;
mod store;
mod view;

pub use session::PlannerSession;
pub use store::MealPlanStore;
pub use view::{Tab, ViewState};
