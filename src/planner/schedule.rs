use strsim::jaro_winkler;

use crate::models::Meal;
use crate::planner::constants::{DAYS, MEAL_TYPES, TITLE_MATCH_THRESHOLD};

/// First meal scheduled for the given day and meal type.
pub fn find_meal<'a>(meals: &'a [Meal], day: &str, meal_type: &str) -> Option<&'a Meal> {
    meals.iter().find(|m| m.is_in_slot(day, meal_type))
}

/// Find a meal by title: exact (case-insensitive) first, then closest fuzzy match.
pub fn find_by_title<'a>(meals: &'a [Meal], query: &str) -> Option<&'a Meal> {
    let query = query.trim().to_lowercase();

    if let Some(meal) = meals.iter().find(|m| m.title.to_lowercase() == query) {
        return Some(meal);
    }

    meals
        .iter()
        .map(|m| (m, jaro_winkler(&m.title.to_lowercase(), &query)))
        .filter(|(_, score)| *score > TITLE_MATCH_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(m, _)| m)
}

/// Grid of meal titles: one row per meal type, one column per day.
pub fn week_grid(meals: &[Meal]) -> Vec<Vec<Option<&str>>> {
    MEAL_TYPES
        .iter()
        .map(|meal_type| {
            DAYS.iter()
                .map(|day| find_meal(meals, day, meal_type).map(|m| m.title.as_str()))
                .collect()
        })
        .collect()
}

/// Per-day meal count and summed calories (`None` when no meal reports any).
pub fn daily_summary(meals: &[Meal]) -> Vec<(&'static str, usize, Option<f64>)> {
    DAYS.iter()
        .map(|&day| {
            let todays: Vec<&Meal> = MEAL_TYPES
                .iter()
                .filter_map(|mt| find_meal(meals, day, mt))
                .collect();
            let calories: Vec<f64> = todays.iter().filter_map(|m| m.calories()).collect();
            let total = if calories.is_empty() {
                None
            } else {
                Some(calories.iter().sum::<f64>())
            };
            (day, todays.len(), total)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(title: &str, day: &str, meal_type: &str) -> Meal {
        Meal {
            title: title.to_string(),
            day: Some(day.to_string()),
            meal_type: Some(meal_type.to_string()),
            ..Default::default()
        }
    }

    fn sample() -> Vec<Meal> {
        vec![
            meal("Avocado Toast", "Monday", "Breakfast"),
            meal("Quinoa Salad", "monday", "lunch "),
            meal("Grilled Salmon", "Tuesday", "Dinner"),
        ]
    }

    #[test]
    fn test_find_meal_by_slot() {
        let meals = sample();
        assert_eq!(find_meal(&meals, "Monday", "Lunch").unwrap().title, "Quinoa Salad");
        assert!(find_meal(&meals, "Sunday", "Lunch").is_none());
    }

    #[test]
    fn test_find_by_title_exact_and_fuzzy() {
        let meals = sample();
        assert_eq!(find_by_title(&meals, "grilled salmon").unwrap().title, "Grilled Salmon");
        assert_eq!(find_by_title(&meals, "Quinoa Salat").unwrap().title, "Quinoa Salad");
        assert!(find_by_title(&meals, "zzzz").is_none());
    }

    #[test]
    fn test_week_grid_shape() {
        let meals = sample();
        let grid = week_grid(&meals);
        assert_eq!(grid.len(), MEAL_TYPES.len());
        assert!(grid.iter().all(|row| row.len() == DAYS.len()));
        assert_eq!(grid[0][0], Some("Avocado Toast"));
        assert_eq!(grid[3][1], Some("Grilled Salmon"));
        assert_eq!(grid[2][0], None);
    }

    #[test]
    fn test_daily_summary_calories() {
        let mut meals = sample();
        meals[0].nutrition = Some(serde_json::json!({"calories": 350}));
        meals[1].nutrition = Some(serde_json::json!({"calories": 480}));

        let summary = daily_summary(&meals);
        assert_eq!(summary[0], ("Monday", 2, Some(830.0)));
        assert_eq!(summary[1], ("Tuesday", 1, None));
        assert_eq!(summary[6], ("Sunday", 0, None));
    }
}
