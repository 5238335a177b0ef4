use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Invalid quantity for '{name}': {quantity}")]
    InvalidQuantity { name: String, quantity: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HF_TOKEN is not set")]
    MissingApiKey,

    #[error("Generation service returned {status}: {body}")]
    Remote { status: u16, body: String },

    #[error("Could not parse generated meal plan: {0}")]
    MalformedResponse(String),

    #[error("No meal plan found for user '{0}'")]
    NoMealPlan(String),

    #[error("Meal not found: {0}")]
    MealNotFound(String),

    #[error("Index {index} out of range for list of {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No profile found, run 'onboard' first")]
    ProfileNotFound,
}

pub type Result<T> = std::result::Result<T, PlannerError>;
