pub mod constants;
pub mod generator;
pub mod parse;
pub mod prompt;
pub mod schedule;

pub use constants::*;
pub use generator::{generate_weekly_plan, GeneratorConfig, HfClient, TextGenerator};
pub use parse::{extract_plan, extract_plan_for, parse_plan_text};
pub use prompt::build_prompt;
pub use schedule::{daily_summary, find_by_title, find_meal, week_grid};
