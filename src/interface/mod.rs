pub mod prompts;
pub mod render;

pub use prompts::{prompt_shopping_checks, prompt_step, prompt_yes_no, run_onboarding};
pub use render::{
    display_dashboard, display_meal, display_profile, display_shopping_list, display_week_plan,
};
