pub mod prompts;
pub mod render;

pub use prompts::{
    available_actions, prompt_menu_action, prompt_plan_entry, prompt_recipe, prompt_tab,
    prompt_yes_no, MenuAction,
};
pub use render::{
    display_catalog, display_screen, render_header, render_impact, render_planner,
    render_recipe_details, render_screen, render_shopping, render_tab,
};
