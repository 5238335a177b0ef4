use std::collections::HashMap;

use crate::error::{PlannerError, Result};
use crate::models::{AggregatedIngredient, IngredientKey, Meal};

/// Merge the ingredients of every meal into one deduplicated shopping list.
///
/// Ingredients sharing `(name, unit, department)` are summed; the first one
/// seen for a key supplies the record's fields. Output follows first-seen
/// order and every entry starts unchecked.
pub fn aggregate_ingredients(meals: &[Meal]) -> Vec<AggregatedIngredient> {
    let mut positions: HashMap<IngredientKey, usize> = HashMap::new();
    let mut items: Vec<AggregatedIngredient> = Vec::new();

    for ingredient in meals.iter().flat_map(|m| m.ingredients()) {
        let key = ingredient.key();
        match positions.get(&key) {
            Some(&idx) => items[idx].quantity += ingredient.quantity,
            None => {
                positions.insert(key, items.len());
                items.push(AggregatedIngredient::seed(ingredient));
            }
        }
    }

    items
}

/// Reject the first ingredient whose quantity is negative or not finite.
pub fn validate_quantities(meals: &[Meal]) -> Result<()> {
    match meals
        .iter()
        .flat_map(|m| m.ingredients())
        .find(|i| !i.has_valid_quantity())
    {
        Some(bad) => Err(PlannerError::InvalidQuantity {
            name: bad.name.clone(),
            quantity: bad.quantity,
        }),
        None => Ok(()),
    }
}

/// Validate every quantity, then aggregate. Nothing is merged on failure.
pub fn try_aggregate(meals: &[Meal]) -> Result<Vec<AggregatedIngredient>> {
    validate_quantities(meals)?;
    let items = aggregate_ingredients(meals);
    tracing::debug!(meals = meals.len(), items = items.len(), "aggregated ingredients");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ingredient;

    fn meal(ingredients: Vec<Ingredient>) -> Meal {
        Meal {
            ingredients: Some(ingredients),
            ..Default::default()
        }
    }

    #[test]
    fn test_sums_matching_keys() {
        let meals = vec![
            meal(vec![Ingredient::new("Rice", 200.0, "g")]),
            meal(vec![
                Ingredient::new("Rice", 100.0, "g"),
                Ingredient::new("Egg", 2.0, "pcs"),
            ]),
        ];

        let items = aggregate_ingredients(&meals);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Rice");
        assert_eq!(items[0].quantity, 300.0);
        assert_eq!(items[1].name, "Egg");
        assert_eq!(items[1].quantity, 2.0);
        assert!(items.iter().all(|i| !i.checked));
    }

    #[test]
    fn test_distinct_on_any_key_field() {
        let meals = vec![meal(vec![
            Ingredient::new("Milk", 1.0, "l"),
            Ingredient::new("Milk", 200.0, "ml"),
            Ingredient::new("Milk", 1.0, "l").with_department("Dairy"),
            Ingredient::new("Oat milk", 1.0, "l"),
        ])];

        assert_eq!(aggregate_ingredients(&meals).len(), 4);
    }

    #[test]
    fn test_first_seen_fields_win() {
        let meals = vec![
            meal(vec![Ingredient::new("Tomato", 2.0, "pcs")]),
            meal(vec![Ingredient::new("Tomato", 3.0, "pcs").with_department("")]),
        ];

        let items = aggregate_ingredients(&meals);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].department, None);
        assert_eq!(items[0].quantity, 5.0);
    }

    #[test]
    fn test_meals_without_ingredients() {
        let meals = vec![Meal::default(), meal(vec![]), Meal::default()];
        assert!(aggregate_ingredients(&meals).is_empty());
        assert!(aggregate_ingredients(&[]).is_empty());
    }

    #[test]
    fn test_try_aggregate_rejects_negative() {
        let meals = vec![meal(vec![
            Ingredient::new("Rice", 100.0, "g"),
            Ingredient::new("Salt", -5.0, "g"),
        ])];

        match try_aggregate(&meals) {
            Err(PlannerError::InvalidQuantity { name, quantity }) => {
                assert_eq!(name, "Salt");
                assert_eq!(quantity, -5.0);
            }
            other => panic!("expected InvalidQuantity, got {:?}", other),
        }
    }

    #[test]
    fn test_try_aggregate_accepts_zero() {
        let meals = vec![meal(vec![Ingredient::new("Water", 0.0, "ml")])];
        let items = try_aggregate(&meals).unwrap();
        assert_eq!(items.len(), 1);
    }
}
