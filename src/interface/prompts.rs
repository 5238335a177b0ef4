use std::fmt::Display;
use std::str::FromStr;

use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::error::Result;
use crate::models::{ActivityLevel, Allergy, Gender, Objective, TrainingFrequency};
use crate::onboarding::{Advance, OnboardingData, OnboardingStep, OnboardingWizard};
use crate::planner::constants::MEAL_TYPES;
use crate::shopping::ShoppingList;

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Optional typed value; empty input keeps it unset.
fn prompt_optional<T>(prompt: &str, current: Option<T>) -> Result<Option<T>>
where
    T: FromStr + Display + Copy,
{
    let input: String = Input::new()
        .with_prompt(prompt)
        .with_initial_text(current.map(|v| v.to_string()).unwrap_or_default())
        .allow_empty(true)
        .validate_with(|s: &String| -> std::result::Result<(), String> {
            if s.trim().is_empty() || s.trim().parse::<T>().is_ok() {
                Ok(())
            } else {
                Err(format!("'{}' is not a valid number", s.trim()))
            }
        })
        .interact_text()?;

    Ok(input.trim().parse().ok())
}

/// Free text; blank input leaves it unset.
fn prompt_text(prompt: &str, current: Option<&str>) -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .with_initial_text(current.unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    Ok(if input.is_empty() {
        None
    } else {
        Some(input.to_string())
    })
}

/// Single choice among `options`, preselecting the current answer.
fn prompt_choice<T: Display + PartialEq + Copy>(
    prompt: &str,
    options: &[T],
    current: Option<T>,
) -> Result<T> {
    let labels: Vec<String> = options.iter().map(|o| o.to_string()).collect();
    let default = current
        .and_then(|c| options.iter().position(|o| *o == c))
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(options[selection])
}

/// Multiple choice among `options`, preselecting the current answers.
fn prompt_many<T: Display + PartialEq + Clone>(
    prompt: &str,
    options: &[T],
    current: &[T],
) -> Result<Vec<T>> {
    let labels: Vec<String> = options.iter().map(|o| o.to_string()).collect();
    let defaults: Vec<bool> = options.iter().map(|o| current.contains(o)).collect();

    let selection = MultiSelect::new()
        .with_prompt(prompt)
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    Ok(selection.into_iter().map(|i| options[i].clone()).collect())
}

/// Ask the questions belonging to one onboarding step.
pub fn prompt_step(step: OnboardingStep, data: &mut OnboardingData) -> Result<()> {
    match step {
        OnboardingStep::PersonalInfo => {
            let info = &mut data.personal_info;
            info.name = prompt_text("Name", info.name.as_deref())?;
            info.gender = Some(prompt_choice("Gender", &Gender::ALL, info.gender)?);
            info.age = prompt_optional("Age", info.age)?;
            info.weight_kg = prompt_optional("Weight (kg)", info.weight_kg)?;
            info.height_cm = prompt_optional("Height (cm)", info.height_cm)?;
        }
        OnboardingStep::Lifestyle => {
            let life = &mut data.lifestyle;
            life.activity = Some(prompt_choice(
                "Physical activity",
                &ActivityLevel::ALL,
                life.activity,
            )?);
            life.frequency = Some(prompt_choice(
                "Workouts per week",
                &TrainingFrequency::ALL,
                life.frequency,
            )?);
        }
        OnboardingStep::Health => {
            let health = &mut data.health;
            health.allergies = prompt_many(
                "Allergies and intolerances (space to toggle)",
                &Allergy::ALL,
                &health.allergies,
            )?;
            health.pregnancy = prompt_yes_no("Pregnant?", health.pregnancy)?;
        }
        OnboardingStep::Family => {
            data.family_members = prompt_optional("Household members", data.family_members)?;
        }
        OnboardingStep::Goals => {
            let goals = &mut data.goals;
            goals.objective = Some(prompt_choice("Objective", &Objective::ALL, goals.objective)?);
            let meal_types: Vec<String> = MEAL_TYPES.iter().map(|m| m.to_string()).collect();
            goals.meals = prompt_many("Meals to include", &meal_types, &goals.meals)?;
        }
        OnboardingStep::Notifications => {
            let hours: [u8; 4] = [1, 2, 3, 4];
            let labels: Vec<String> = hours
                .iter()
                .map(|h| match h {
                    1 => "Every hour".to_string(),
                    h => format!("Every {} hours", h),
                })
                .collect();
            let default = data
                .hydration_frequency
                .and_then(|h| hours.iter().position(|x| *x == h))
                .unwrap_or(0);
            let selection = Select::new()
                .with_prompt("Hydration reminder")
                .items(&labels)
                .default(default)
                .interact()?;
            data.hydration_frequency = Some(hours[selection]);
        }
    }
    Ok(())
}

/// Drive the wizard interactively.
///
/// Returns the finished wizard, or `None` if the user cancelled.
pub fn run_onboarding(mut wizard: OnboardingWizard) -> Result<Option<OnboardingWizard>> {
    loop {
        let step = wizard.current_step();
        println!();
        println!(
            "=== Step {}/{}: {} ({:.0}%) ===",
            wizard.step_index() + 1,
            wizard.step_count(),
            step,
            wizard.progress_percent()
        );

        prompt_step(step, &mut wizard.data)?;

        let forward = if wizard.is_last_step() { "Finish" } else { "Next" };
        let action = Select::new()
            .with_prompt("Continue")
            .items(&[forward, "Back", "Cancel"])
            .default(0)
            .interact()?;

        match action {
            0 => {
                if wizard.next() == Advance::Finished {
                    return Ok(Some(wizard));
                }
            }
            1 => {
                wizard.back();
            }
            _ => return Ok(None),
        }
    }
}

/// Let the user tick items off the shopping list.
pub fn prompt_shopping_checks(list: &mut ShoppingList) -> Result<()> {
    let labels: Vec<String> = list
        .items()
        .iter()
        .map(|i| format!("{} ({})", i.name, i.amount_label()))
        .collect();
    let defaults: Vec<bool> = list.items().iter().map(|i| i.checked).collect();

    let selection = MultiSelect::new()
        .with_prompt("Tick what you already have (space to toggle, enter to confirm)")
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    list.apply_selection(&selection)
}
