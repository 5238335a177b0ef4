use std::path::Path;

use clap::Parser;

use meal_planner_rs::cli::{Cli, Command};
use meal_planner_rs::error::{PlannerError, Result};
use meal_planner_rs::interface::{
    display_dashboard, display_meal, display_profile, display_shopping_list, display_week_plan,
    prompt_shopping_checks, prompt_yes_no, run_onboarding,
};
use meal_planner_rs::logging::init_tracing;
use meal_planner_rs::models::MealPlan;
use meal_planner_rs::onboarding::OnboardingWizard;
use meal_planner_rs::planner::{
    find_by_title, generate_weekly_plan, GeneratorConfig, HfClient,
};
use meal_planner_rs::shopping::{write_csv, ShoppingList};
use meal_planner_rs::state::{
    load_profile, load_profile_opt, load_store, save_profile, save_store, week_start_today,
    MealPlanStore,
};

fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    if let Err(e) = run() {
        tracing::error!(error = %e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    tracing::debug!(?command, user = %cli.user, "starting");

    match command {
        Command::Dashboard => cmd_dashboard(&cli.store, &cli.user),
        Command::Onboard => cmd_onboard(&cli.profile),
        Command::Profile => cmd_profile(&cli.profile),
        Command::Plan => cmd_plan(&cli.store, &cli.user),
        Command::Meal { title } => cmd_meal(&cli.store, &cli.user, &title),
        Command::Generate => cmd_generate(&cli.store, &cli.profile, &cli.user),
        Command::Shopping {
            interactive,
            export,
        } => cmd_shopping(&cli.store, &cli.user, interactive, export.as_deref()),
    }
}

/// The user's most recent plan, or an empty one.
fn latest_plan(store: &MealPlanStore, user: &str) -> MealPlan {
    store
        .latest_for(user)
        .map(|r| r.meals_json.clone())
        .unwrap_or_default()
}

/// Show mock progress cards plus the current week.
fn cmd_dashboard(store_path: &Path, user: &str) -> Result<()> {
    let store = load_store(store_path)?;
    let plan = latest_plan(&store, user);
    display_dashboard(&plan.meals);
    Ok(())
}

/// Run the onboarding questionnaire; the profile is saved only when finished.
fn cmd_onboard(profile_path: &Path) -> Result<()> {
    let mut wizard = OnboardingWizard::new();

    if let Some(existing) = load_profile_opt(profile_path)? {
        println!("A profile already exists; your answers will replace it.");
        wizard.data = existing.into();
    }

    match run_onboarding(wizard)? {
        Some(wizard) => {
            let profile = wizard.finish();
            save_profile(profile_path, &profile)?;
            tracing::info!(path = %profile_path.display(), "profile saved");
            println!("Profile saved.");
            display_profile(&profile);
        }
        None => println!("Onboarding cancelled, nothing saved."),
    }

    Ok(())
}

fn cmd_profile(profile_path: &Path) -> Result<()> {
    let profile = load_profile(profile_path)?;
    display_profile(&profile);
    Ok(())
}

/// Show the latest weekly plan.
fn cmd_plan(store_path: &Path, user: &str) -> Result<()> {
    let store = load_store(store_path)?;

    if let Some(record) = store.latest_for(user) {
        println!("Week starting {}", record.week_start);
    }
    display_week_plan(&latest_plan(&store, user).meals);
    Ok(())
}

/// Show one meal of the latest plan.
fn cmd_meal(store_path: &Path, user: &str, title: &str) -> Result<()> {
    let store = load_store(store_path)?;
    let record = store
        .latest_for(user)
        .ok_or_else(|| PlannerError::NoMealPlan(user.to_string()))?;

    let meal = find_by_title(&record.meals_json.meals, title)
        .ok_or_else(|| PlannerError::MealNotFound(title.to_string()))?;

    display_meal(meal);
    Ok(())
}

/// Generate this week's plan and store it, replacing any plan for the same week.
fn cmd_generate(store_path: &Path, profile_path: &Path, user: &str) -> Result<()> {
    let profile = load_profile_opt(profile_path)?;
    if profile.is_none() {
        println!("No profile found; generating without dietary constraints.");
    }

    let client = HfClient::new(GeneratorConfig::from_env())?;
    println!("Generating meal plan...");
    let plan = generate_weekly_plan(&client, profile.as_ref())?;

    if plan.is_empty() {
        return Err(PlannerError::MalformedResponse(
            "generated plan contains no meals".to_string(),
        ));
    }

    let week_start = week_start_today();
    let mut store = load_store(store_path)?;
    let inserted = store.upsert(user, week_start, plan);
    save_store(store_path, &store)?;

    println!(
        "{} plan for week starting {}.",
        if inserted { "Saved new" } else { "Replaced" },
        week_start
    );
    display_week_plan(&latest_plan(&store, user).meals);
    Ok(())
}

/// Aggregate the latest plan into a shopping list.
fn cmd_shopping(
    store_path: &Path,
    user: &str,
    interactive: bool,
    export: Option<&Path>,
) -> Result<()> {
    let store = load_store(store_path)?;
    let record = store
        .latest_for(user)
        .ok_or_else(|| PlannerError::NoMealPlan(user.to_string()))?;

    let mut list = ShoppingList::from_plan(&record.meals_json)?;
    display_shopping_list(&list);

    if interactive && !list.is_empty() {
        prompt_shopping_checks(&mut list)?;
        display_shopping_list(&list);
    }

    match export {
        Some(path) => {
            write_csv(&list, path)?;
            println!("Exported {} items to {}", list.len(), path.display());
        }
        None if interactive && !list.is_empty() => {
            if prompt_yes_no("Export to CSV (shopping_list.csv)?", false)? {
                let path = Path::new("shopping_list.csv");
                write_csv(&list, path)?;
                println!("Exported {} items to {}", list.len(), path.display());
            }
        }
        None => {}
    }

    Ok(())
}
