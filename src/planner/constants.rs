/// Days of the planning week, in display order.
pub const DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Meal slots per day, in display order.
pub const MEAL_TYPES: [&str; 4] = ["Breakfast", "Lunch", "Snack", "Dinner"];

/// Default text-generation endpoint.
pub const DEFAULT_MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/HuggingFaceH4/zephyr-7b-beta";

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Minimum Jaro-Winkler score for a fuzzy title match.
pub const TITLE_MATCH_THRESHOLD: f64 = 0.7;
