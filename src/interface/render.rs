use crate::dashboard::{progress_bar, quick_stats};
use crate::models::{format_quantity, Meal, Profile};
use crate::planner::constants::{DAYS, MEAL_TYPES};
use crate::planner::{daily_summary, week_grid};
use crate::shopping::ShoppingList;

/// Display the week as a meal-type by day table.
pub fn display_week_plan(meals: &[Meal]) {
    if meals.is_empty() {
        println!("No meal plan yet. Run 'generate' to create one.");
        return;
    }

    let grid = week_grid(meals);

    // Column width fits the longest title or day name
    let width = meals
        .iter()
        .map(|m| m.title.len())
        .chain(DAYS.iter().map(|d| d.len()))
        .max()
        .unwrap_or(10)
        .min(24);
    let label_width = MEAL_TYPES.iter().map(|m| m.len()).max().unwrap_or(9);

    println!();
    println!("=== Weekly Plan ===");
    println!();

    print!("{:>label_width$}", "");
    for day in DAYS {
        print!(" | {:<width$}", day);
    }
    println!();

    for (meal_type, row) in MEAL_TYPES.iter().zip(&grid) {
        print!("{:>label_width$}", meal_type);
        for cell in row {
            print!(" | {:<width$}", truncate(cell.unwrap_or("-"), width));
        }
        println!();
    }
    println!();
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let cut: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{}~", cut)
    }
}

/// Display one meal's details.
pub fn display_meal(meal: &Meal) {
    println!();
    println!("=== {} ===", meal.title);
    if let (Some(day), Some(meal_type)) = (&meal.day, &meal.meal_type) {
        println!("{} {}", day, meal_type);
    }
    if let Some(description) = &meal.description {
        println!();
        println!("{}", description);
    }

    println!();
    println!("Ingredients:");
    if meal.ingredients().is_empty() {
        println!("  (none)");
    }
    for ing in meal.ingredients() {
        println!("  - {} - {} {}", ing.name, format_quantity(ing.quantity), ing.unit);
    }

    if let Some(instructions) = &meal.instructions {
        println!();
        println!("Instructions:");
        println!("{}", instructions);
    }
    if let Some(link) = &meal.youtube_link {
        println!();
        println!("Video recipe: {}", link);
    }
    if let Some(nutrition) = &meal.nutrition {
        println!();
        println!("Nutrition:");
        match serde_json::to_string_pretty(nutrition) {
            Ok(pretty) => println!("{}", pretty),
            Err(_) => println!("{}", nutrition),
        }
    }
    if let Some(photo) = &meal.photo_url {
        println!();
        println!("Photo: {}", photo);
    }
    println!();
}

/// Display the shopping list with checkboxes.
pub fn display_shopping_list(list: &ShoppingList) {
    if list.is_empty() {
        println!("Shopping list is empty (the current plan has no ingredients).");
        return;
    }

    println!();
    println!("=== Shopping List ===");
    println!();

    let max_name_len = list.items().iter().map(|i| i.name.len()).max().unwrap_or(10);

    for item in list.items() {
        let mark = if item.checked { "x" } else { " " };
        let department = item
            .department
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(|d| format!(" ({})", d))
            .unwrap_or_default();
        println!(
            "[{}] {:<width$}  {}{}",
            mark,
            item.name,
            item.amount_label(),
            department,
            width = max_name_len
        );
    }

    println!();
    println!("{} of {} items checked", list.checked_count(), list.len());
    println!();
}

/// Display the dashboard cards and the current week at a glance.
pub fn display_dashboard(meals: &[Meal]) {
    println!();
    println!("=== Your Progress ===");
    println!();

    for stat in quick_stats() {
        println!(
            "{:<16} {:>6} / {:<14} {} {:.0}%",
            stat.title,
            stat.value,
            stat.target,
            progress_bar(stat.progress, 20),
            stat.progress
        );
    }

    println!();
    println!("--- This Week ---");
    for (day, count, calories) in daily_summary(meals) {
        match calories {
            Some(cal) => println!("{:<10} {} meals, {:.0} kcal", day, count, cal),
            None => println!("{:<10} {} meals", day, count),
        }
    }
    println!();
}

/// Display a saved profile.
pub fn display_profile(profile: &Profile) {
    fn show<T: ToString>(value: Option<T>) -> String {
        value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
    }

    let allergies: Vec<String> = profile.allergies.iter().map(|a| a.to_string()).collect();

    println!();
    println!("=== Profile ===");
    println!("Name:              {}", profile.name.as_deref().unwrap_or("-"));
    println!("Gender:            {}", show(profile.gender));
    println!("Age:               {}", show(profile.age));
    println!("Weight (kg):       {}", show(profile.weight_kg));
    println!("Height (cm):       {}", show(profile.height_cm));
    println!("Activity:          {}", show(profile.activity));
    println!("Workouts/week:     {}", show(profile.activity_frequency));
    println!("Allergies:         {}", if allergies.is_empty() { "-".to_string() } else { allergies.join(", ") });
    println!("Pregnant:          {}", if profile.pregnancy { "yes" } else { "no" });
    println!("Household members: {}", show(profile.family_members));
    println!("Objective:         {}", show(profile.objective));
    println!("Meals:             {}", if profile.meals.is_empty() { "-".to_string() } else { profile.meals.join(", ") });
    println!(
        "Hydration:         {}",
        profile
            .hydration_frequency
            .map(|h| format!("every {}h", h))
            .unwrap_or_else(|| "-".to_string())
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Soup", 10), "Soup");
        assert_eq!(truncate("Grilled Salmon", 8), "Grilled~");
    }
}
