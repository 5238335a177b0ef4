pub mod ingredient;
pub mod meal;
pub mod profile;

pub use ingredient::{format_quantity, AggregatedIngredient, Ingredient, IngredientKey};
pub use meal::{Meal, MealPlan};
pub use profile::{ActivityLevel, Allergy, Gender, Objective, Profile, TrainingFrequency};
