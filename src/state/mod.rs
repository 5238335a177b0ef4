mod persistence;
mod store;

pub use persistence::{load_profile, load_profile_opt, load_store, save_profile, save_store};
pub use store::{week_start_today, MealPlanRecord, MealPlanStore};
