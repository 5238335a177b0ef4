pub mod cli;
pub mod dashboard;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod onboarding;
pub mod planner;
pub mod shopping;
pub mod state;

pub use error::{PlannerError, Result};
pub use models::{AggregatedIngredient, Ingredient, Meal, MealPlan};
pub use shopping::{aggregate_ingredients, try_aggregate, ShoppingList};
