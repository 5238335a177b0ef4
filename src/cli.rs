use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Meal planner: weekly plans, shopping lists and onboarding from the terminal.
#[derive(Parser, Debug)]
#[command(name = "meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the stored meal plans JSON file.
    #[arg(short, long, env = "MEALPLAN_STORE", default_value = "mealplans.json")]
    pub store: PathBuf,

    /// Path to the onboarding profile JSON file.
    #[arg(short, long, env = "MEALPLAN_PROFILE", default_value = "profile.json")]
    pub profile: PathBuf,

    /// User whose plans are read and written.
    #[arg(short, long, env = "MEALPLAN_USER", default_value = "local")]
    pub user: String,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Show progress cards and the current week at a glance.
    #[default]
    Dashboard,

    /// Answer the onboarding questionnaire and save the profile.
    Onboard,

    /// Show the saved profile.
    Profile,

    /// Show the latest weekly plan as a table.
    Plan,

    /// Show the details of one meal from the latest plan.
    Meal {
        /// Meal title (fuzzy matched).
        title: String,
    },

    /// Generate this week's plan with the text-generation service.
    Generate,

    /// Build the shopping list from the latest plan.
    Shopping {
        /// Tick items off interactively.
        #[arg(short, long)]
        interactive: bool,

        /// Export the list as CSV to this path.
        #[arg(short, long)]
        export: Option<PathBuf>,
    },
}
