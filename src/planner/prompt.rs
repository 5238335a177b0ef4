use crate::models::Profile;
use crate::planner::constants::{DAYS, MEAL_TYPES};

/// Build the generation prompt for a weekly plan.
///
/// Profile answers, when present, are appended as extra constraints.
pub fn build_prompt(profile: Option<&Profile>) -> String {
    let mut prompt = format!(
        "Generate a weekly meal plan in JSON format covering 7 days ({}) with 4 meals per day ({}). \
         Return a single object with a \"meals\" array where every meal has: id, title, day, meal_type, \
         ingredients (array of objects with name, quantity as a number, unit, department), \
         description, instructions, nutrition (calories, carbs, protein, fats).",
        DAYS.join(", "),
        MEAL_TYPES.join(", "),
    );

    if let Some(profile) = profile {
        let constraints = profile_constraints(profile);
        if !constraints.is_empty() {
            prompt.push_str(" Constraints: ");
            prompt.push_str(&constraints.join("; "));
            prompt.push('.');
        }
    }

    prompt.push_str(" Reply with the JSON only, no additional text.");
    prompt
}

fn profile_constraints(profile: &Profile) -> Vec<String> {
    let mut out = Vec::new();

    if !profile.allergies.is_empty() {
        let names: Vec<String> = profile.allergies.iter().map(|a| a.to_string()).collect();
        out.push(format!("exclude ingredients containing {}", names.join(", ")));
    }
    if profile.pregnancy {
        out.push("suitable during pregnancy".to_string());
    }
    if let Some(objective) = profile.objective {
        out.push(format!("goal: {}", objective.to_string().to_lowercase()));
    }
    if let Some(members) = profile.family_members.filter(|&m| m > 1) {
        out.push(format!("quantities for {} people", members));
    }
    if !profile.meals.is_empty() && profile.meals.len() < MEAL_TYPES.len() {
        out.push(format!("only include {}", profile.meals.join(", ")));
    }

    out
}
