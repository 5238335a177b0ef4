use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::Ingredient;

/// A planned dish with its ingredients and display metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Generated plans use either strings or numbers; both are kept as text.
    #[serde(default, deserialize_with = "id_as_string")]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// `None` when the generated record had no list or an explicit null.
    #[serde(default)]
    pub ingredients: Option<Vec<Ingredient>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<String>,
}

fn id_as_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(serde::de::Error::custom(format!(
            "meal id must be a string or number, got {}",
            other
        ))),
    }
}

impl Meal {
    /// Ingredients, treating a missing list as empty.
    pub fn ingredients(&self) -> &[Ingredient] {
        self.ingredients.as_deref().unwrap_or(&[])
    }

    /// Whether this meal is scheduled in the given slot (trimmed, case-insensitive).
    pub fn is_in_slot(&self, day: &str, meal_type: &str) -> bool {
        fn same(field: &Option<String>, wanted: &str) -> bool {
            field
                .as_deref()
                .map(|v| v.trim().to_lowercase() == wanted.trim().to_lowercase())
                .unwrap_or(false)
        }
        same(&self.day, day) && same(&self.meal_type, meal_type)
    }

    /// Calories from the free-form nutrition object, if the model supplied them.
    pub fn calories(&self) -> Option<f64> {
        let nutrition = self.nutrition.as_ref()?;
        ["calories", "kcal", "calorie"]
            .iter()
            .find_map(|k| nutrition.get(*k))
            .and_then(|v| match v {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            })
    }
}

/// A weekly meal plan as stored and as produced by the generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    #[serde(default)]
    pub meals: Vec<Meal>,
}

impl MealPlan {
    pub fn new(meals: Vec<Meal>) -> Self {
        Self { meals }
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_null_ingredients_are_empty() {
        let missing: Meal = serde_json::from_str(r#"{"title": "Toast"}"#).unwrap();
        let null: Meal = serde_json::from_str(r#"{"title": "Toast", "ingredients": null}"#).unwrap();
        assert!(missing.ingredients().is_empty());
        assert!(null.ingredients().is_empty());
    }

    #[test]
    fn test_numeric_and_string_ids() {
        let plan: MealPlan = serde_json::from_str(
            r#"{"meals": [{"id": 1, "title": "Toast"}, {"id": "b-2"}, {"id": null}, {"title": "No id"}]}"#,
        )
        .unwrap();
        let ids: Vec<&str> = plan.meals.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "b-2", "", ""]);
    }

    #[test]
    fn test_object_id_rejected() {
        let result: std::result::Result<Meal, _> = serde_json::from_str(r#"{"id": {"x": 1}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_plan_without_meals_is_empty() {
        let plan: MealPlan = serde_json::from_str("{}").unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_is_in_slot_ignores_case_and_whitespace() {
        let meal = Meal {
            day: Some(" monday ".to_string()),
            meal_type: Some("LUNCH".to_string()),
            ..Default::default()
        };
        assert!(meal.is_in_slot("Monday", "Lunch"));
        assert!(!meal.is_in_slot("Tuesday", "Lunch"));
        assert!(!Meal::default().is_in_slot("Monday", "Lunch"));
    }

    #[test]
    fn test_calories_from_number_or_string() {
        let mut meal: Meal =
            serde_json::from_str(r#"{"title": "Soup", "nutrition": {"calories": 420}}"#).unwrap();
        assert_eq!(meal.calories(), Some(420.0));

        meal.nutrition = Some(serde_json::json!({"calories": "310"}));
        assert_eq!(meal.calories(), Some(310.0));

        meal.nutrition = None;
        assert_eq!(meal.calories(), None);
    }
}
